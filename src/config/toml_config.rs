use crate::domain::ports::ApiConfig;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_RETRY_DELAY_SECONDS: u64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientInfo,
    pub api: ApiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders (API tokens, per-environment URLs)
    /// with environment variable values. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("client.name", &self.client.name)?;
        crate::utils::validation::validate_url("api.base_url", &self.api.base_url)?;

        // `{`/`}` are legal in a parsed URL, so an unset variable would
        // otherwise slip through validate_url and hit the wire as-is
        if self.api.base_url.contains("${") {
            return Err(ClientError::ConfigValidationError {
                field: "api.base_url".to_string(),
                message: format!(
                    "Unresolved environment variable in '{}'",
                    self.api.base_url
                ),
            });
        }

        if let Some(timeout) = self.api.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "api.timeout_seconds",
                timeout as usize,
                1,
            )?;
        }

        if let Some(delay) = self.api.retry_delay_seconds {
            crate::utils::validation::validate_range("api.retry_delay_seconds", delay, 0, 300)?;
        }

        // Placeholder that survived substitution means the variable was unset
        if let Some(headers) = &self.api.headers {
            for (name, value) in headers {
                if value.contains("${") {
                    return Err(ClientError::ConfigValidationError {
                        field: format!("api.headers.{}", name),
                        message: format!("Unresolved environment variable in '{}'", value),
                    });
                }
            }
        }

        Ok(())
    }
}

impl ApiConfig for TomlConfig {
    fn base_url(&self) -> &str {
        &self.api.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn headers(&self) -> HashMap<String, String> {
        self.api.headers.clone().unwrap_or_default()
    }

    fn retry_attempts(&self) -> u32 {
        self.api.retry_attempts.unwrap_or(0)
    }

    fn retry_delay_seconds(&self) -> u64 {
        self.api
            .retry_delay_seconds
            .unwrap_or(DEFAULT_RETRY_DELAY_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
