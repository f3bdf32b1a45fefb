use crate::core::client::ApiClient;
use crate::domain::building::{BuildingCreateDto, BuildingDto};
use crate::domain::ports::ApiConfig;
use crate::utils::error::Result;

impl<C: ApiConfig> ApiClient<C> {
    pub async fn list_buildings(&self, tm_id: i64) -> Result<Vec<BuildingDto>> {
        self.get::<_, ()>(&format!("tms/{}/buildings", tm_id), None)
            .await
    }

    pub async fn get_building(&self, id: i64) -> Result<BuildingDto> {
        self.get::<_, ()>(&format!("buildings/{}", id), None).await
    }

    pub async fn create_building(&self, body: &BuildingCreateDto) -> Result<BuildingDto> {
        self.post(&format!("tms/{}/buildings", body.tm_id), body)
            .await
    }
}
