use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("API returned HTTP {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("API rejected the request: {message}")]
    EnvelopeError {
        message: String,
        errors: Vec<String>,
    },

    #[error("Unexpected response shape: {message}")]
    ResponseError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ApiError { .. } | Self::EnvelopeError { .. } => ErrorCategory::Api,
            Self::SerializationError(_) | Self::ResponseError { .. } => ErrorCategory::Data,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::UrlParseError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::ApiError { .. } | Self::EnvelopeError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) | Self::ResponseError { .. } => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::UrlParseError(_) => ErrorSeverity::Critical,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::HttpError(_) => {
                "Check network connectivity and that the portal base URL is reachable".to_string()
            }
            Self::ApiError { status, .. } if *status == 401 || *status == 403 => {
                "Verify the API token in your configuration is valid and not expired".to_string()
            }
            Self::ApiError { status, .. } if *status >= 500 => {
                "The backend is having trouble; retry later or contact the platform team"
                    .to_string()
            }
            Self::ApiError { .. } => {
                "Check the request parameters against the portal API documentation".to_string()
            }
            Self::EnvelopeError { errors, .. } if !errors.is_empty() => {
                format!("Fix the reported problems: {}", errors.join("; "))
            }
            Self::EnvelopeError { .. } => {
                "Review the request payload; the backend rejected it".to_string()
            }
            Self::SerializationError(_) | Self::ResponseError { .. } => {
                "The response did not match the expected contract; check client and backend versions"
                    .to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Fix the '{}' entry in your configuration file", field)
            }
            Self::UrlParseError(_) => "Provide a valid http(s) base URL".to_string(),
            Self::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(_) => "Could not reach the TM portal API".to_string(),
            Self::ApiError { status, message } => {
                format!("The portal API answered with HTTP {}: {}", status, message)
            }
            Self::EnvelopeError { message, .. } => {
                format!("The portal API rejected the request: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
