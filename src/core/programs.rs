//! Program, version and execution endpoints.

use crate::core::client::ApiClient;
use crate::domain::envelope::{PagedList, PageQuery};
use crate::domain::ports::ApiConfig;
use crate::domain::program::{
    ExecutionDto, ExecutionStartDto, ProgramCreateDto, ProgramDto, ProgramVersionDto,
};
use crate::utils::error::Result;

impl<C: ApiConfig> ApiClient<C> {
    pub async fn list_programs(&self, page: PageQuery) -> Result<PagedList<ProgramDto>> {
        self.get("programs", Some(&page)).await
    }

    pub async fn get_program(&self, id: i64) -> Result<ProgramDto> {
        self.get::<_, ()>(&format!("programs/{}", id), None).await
    }

    pub async fn create_program(&self, body: &ProgramCreateDto) -> Result<ProgramDto> {
        self.post("programs", body).await
    }

    pub async fn list_program_versions(&self, program_id: i64) -> Result<Vec<ProgramVersionDto>> {
        self.get::<_, ()>(&format!("programs/{}/versions", program_id), None)
            .await
    }

    pub async fn get_program_version(
        &self,
        program_id: i64,
        version_id: i64,
    ) -> Result<ProgramVersionDto> {
        self.get::<_, ()>(
            &format!("programs/{}/versions/{}", program_id, version_id),
            None,
        )
        .await
    }

    /// Marks a version as published; only published versions can be executed.
    pub async fn publish_program_version(
        &self,
        program_id: i64,
        version_id: i64,
    ) -> Result<ProgramVersionDto> {
        self.post(
            &format!("programs/{}/versions/{}/publish", program_id, version_id),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn start_execution(
        &self,
        program_id: i64,
        body: &ExecutionStartDto,
    ) -> Result<ExecutionDto> {
        self.post(&format!("programs/{}/executions", program_id), body)
            .await
    }

    pub async fn list_executions(
        &self,
        program_id: i64,
        page: PageQuery,
    ) -> Result<PagedList<ExecutionDto>> {
        self.get(&format!("programs/{}/executions", program_id), Some(&page))
            .await
    }

    pub async fn get_execution(&self, id: i64) -> Result<ExecutionDto> {
        self.get::<_, ()>(&format!("executions/{}", id), None).await
    }

    pub async fn cancel_execution(&self, id: i64) -> Result<ExecutionDto> {
        self.post(
            &format!("executions/{}/cancel", id),
            &serde_json::json!({}),
        )
        .await
    }
}
