use crate::utils::dates::datetime_millis;
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The uniform response wrapper every portal endpoint uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(with = "datetime_millis")]
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope: a failed or empty response becomes a typed error.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(ClientError::EnvelopeError {
                message: self
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
                errors: self.errors.unwrap_or_default(),
            });
        }
        self.data.ok_or_else(|| ClientError::ResponseError {
            message: "successful response carried no data".to_string(),
        })
    }
}

/// Paged-list envelope used by every listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page_number: i32,
    pub page_size: i32,
    pub total_count: i64,
    pub has_next_page: bool,
}

/// Query-string paging parameters.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_number: i32,
    pub page_size: i32,
}

impl PageQuery {
    pub fn new(page_number: i32, page_size: i32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn next(self) -> Self {
        Self {
            page_number: self.page_number + 1,
            ..self
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_envelope_unwraps_data() {
        let json = r#"{
            "success": true,
            "message": "OK",
            "data": 42,
            "timestamp": "2026-02-01T12:00:00.000Z"
        }"#;
        let envelope: ApiResponse<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data().unwrap(), 42);
    }

    #[test]
    fn test_failed_envelope_becomes_error() {
        let json = r#"{
            "success": false,
            "message": "Validation failed",
            "data": null,
            "errors": ["code is required"],
            "timestamp": "2026-02-01T12:00:00.000Z"
        }"#;
        let envelope: ApiResponse<i64> = serde_json::from_str(json).unwrap();
        match envelope.into_data() {
            Err(ClientError::EnvelopeError { message, errors }) => {
                assert_eq!(message, "Validation failed");
                assert_eq!(errors, vec!["code is required".to_string()]);
            }
            other => panic!("expected EnvelopeError, got {:?}", other),
        }
    }

    #[test]
    fn test_success_without_data_is_response_error() {
        let json = r#"{"success": true, "timestamp": "2026-02-01T12:00:00.000Z"}"#;
        let envelope: ApiResponse<i64> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            envelope.into_data(),
            Err(ClientError::ResponseError { .. })
        ));
    }

    #[test]
    fn test_envelope_ignores_unknown_fields() {
        let json = r#"{
            "success": true,
            "data": 1,
            "timestamp": "2026-02-01T12:00:00.000Z",
            "traceId": "b1c2d3",
            "serverVersion": "4.12.0"
        }"#;
        let envelope: ApiResponse<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data().unwrap(), 1);
    }

    #[test]
    fn test_paged_list_camel_case_fields() {
        let json = r#"{
            "items": ["a", "b"],
            "pageNumber": 2,
            "pageSize": 2,
            "totalCount": 5,
            "hasNextPage": true
        }"#;
        let page: PagedList<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page_number, 2);
        assert!(page.has_next_page);
    }
}
