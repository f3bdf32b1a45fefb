//! TM endpoints: CRUD, alternative-site proposals, hazard assessments.

use crate::core::client::ApiClient;
use crate::domain::envelope::{PagedList, PageQuery};
use crate::domain::hazard::HazardAssessmentDto;
use crate::domain::ports::ApiConfig;
use crate::domain::tm::{AlternativeTmCreateDto, TmCreateDto, TmDto, TmSummaryDto, TmUpdateDto};
use crate::utils::error::Result;

impl<C: ApiConfig> ApiClient<C> {
    pub async fn list_tms(&self, page: PageQuery) -> Result<PagedList<TmSummaryDto>> {
        self.get("tms", Some(&page)).await
    }

    pub async fn get_tm(&self, id: i64) -> Result<TmDto> {
        self.get::<_, ()>(&format!("tms/{}", id), None).await
    }

    pub async fn create_tm(&self, body: &TmCreateDto) -> Result<TmDto> {
        self.post("tms", body).await
    }

    pub async fn update_tm(&self, id: i64, body: &TmUpdateDto) -> Result<TmDto> {
        self.put(&format!("tms/{}", id), body).await
    }

    pub async fn delete_tm(&self, id: i64) -> Result<()> {
        self.delete(&format!("tms/{}", id)).await
    }

    /// Proposes an alternative site for an existing TM. The backend answers
    /// with the proposal hydrated as a new TM record under review.
    pub async fn create_alternative_tm(&self, body: &AlternativeTmCreateDto) -> Result<TmDto> {
        self.post(&format!("tms/{}/alternatives", body.tm_id), body)
            .await
    }

    pub async fn get_hazard_assessment(&self, tm_id: i64) -> Result<HazardAssessmentDto> {
        self.get::<_, ()>(&format!("tms/{}/hazard-assessment", tm_id), None)
            .await
    }

    /// Submits field observations; the returned assessment carries the
    /// backend-computed scores.
    pub async fn submit_hazard_assessment(
        &self,
        tm_id: i64,
        body: &HazardAssessmentDto,
    ) -> Result<HazardAssessmentDto> {
        self.put(&format!("tms/{}/hazard-assessment", tm_id), body)
            .await
    }
}
