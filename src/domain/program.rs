//! User programs, their versions, and execution records. Version control and
//! scheduling happen backend-side; these are the wire mirrors.

use crate::utils::dates::{datetime_millis, opt_datetime_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ExecutionStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl ExecutionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<i32>,
    #[serde(with = "datetime_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramVersionDto {
    pub id: i64,
    pub program_id: i64,
    pub version_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(with = "datetime_millis")]
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionDto {
    pub id: i64,
    pub program_id: i64,
    pub version_id: i64,
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tm_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
    #[serde(with = "datetime_millis")]
    pub queued_at: DateTime<Utc>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCreateDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStartDto {
    pub version_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tm_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_status_terminal() {
        assert!(ExecutionStatus::Failed.is_terminal());
        assert!(ExecutionStatus::Cancelled.is_terminal());
        assert!(!ExecutionStatus::Running.is_terminal());
        assert!(!ExecutionStatus::Pending.is_terminal());
    }

    #[test]
    fn test_running_execution_has_no_finish_stamp() {
        let json = r#"{
            "id": 101,
            "programId": 5,
            "versionId": 17,
            "status": "Running",
            "targetTmId": 7,
            "triggeredBy": "operator@example.com",
            "queuedAt": "2026-02-01T09:00:00.000Z",
            "startedAt": "2026-02-01T09:00:02.350Z"
        }"#;
        let dto: ExecutionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.status, ExecutionStatus::Running);
        assert!(dto.started_at.is_some());
        assert!(dto.finished_at.is_none());
        assert!(dto.error_message.is_none());
    }

    #[test]
    fn test_program_version_round_trip() {
        let json = r#"{"id":17,"programId":5,"versionNumber":3,"changelog":"tuned thresholds","createdBy":"eng@example.com","createdAt":"2026-01-20T14:05:00.000Z","published":true}"#;
        let dto: ProgramVersionDto = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&dto).unwrap(), json);
    }
}
