//! UI-component bundle endpoints consumed by the portal frontend.

use crate::core::client::ApiClient;
use crate::domain::ports::ApiConfig;
use crate::domain::ui::{UiComponentBundleDto, UiComponentDto};
use crate::utils::error::Result;

impl<C: ApiConfig> ApiClient<C> {
    pub async fn get_ui_bundle(&self, bundle_id: i64) -> Result<UiComponentBundleDto> {
        self.get::<_, ()>(&format!("ui/bundles/{}", bundle_id), None)
            .await
    }

    pub async fn list_ui_bundle_components(&self, bundle_id: i64) -> Result<Vec<UiComponentDto>> {
        self.get::<_, ()>(&format!("ui/bundles/{}/components", bundle_id), None)
            .await
    }
}
