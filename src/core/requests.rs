//! Request (ticket) workflow endpoints.

use crate::core::client::ApiClient;
use crate::domain::envelope::{PagedList, PageQuery};
use crate::domain::ports::ApiConfig;
use crate::domain::request::{
    RequestCreateDto, RequestDto, RequestStatus, RequestStatusUpdateDto,
};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestListQuery {
    page_number: i32,
    page_size: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<RequestStatus>,
}

impl<C: ApiConfig> ApiClient<C> {
    pub async fn list_requests(
        &self,
        page: PageQuery,
        status: Option<RequestStatus>,
    ) -> Result<PagedList<RequestDto>> {
        let query = RequestListQuery {
            page_number: page.page_number,
            page_size: page.page_size,
            status,
        };
        self.get("requests", Some(&query)).await
    }

    pub async fn get_request(&self, id: i64) -> Result<RequestDto> {
        self.get::<_, ()>(&format!("requests/{}", id), None).await
    }

    pub async fn create_request(&self, body: &RequestCreateDto) -> Result<RequestDto> {
        self.post("requests", body).await
    }

    pub async fn update_request_status(
        &self,
        id: i64,
        body: &RequestStatusUpdateDto,
    ) -> Result<RequestDto> {
        self.put(&format!("requests/{}/status", id), body).await
    }
}
