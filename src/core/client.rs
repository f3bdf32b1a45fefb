use crate::domain::envelope::{ApiResponse, PagedList, PageQuery};
use crate::domain::ports::ApiConfig;
use crate::utils::error::{ClientError, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

// Guard for paged iteration against a backend that never flips hasNextPage
const MAX_PAGES: usize = 1000;

/// Typed HTTP client for the TM portal API. Every endpoint wraps its payload
/// in the uniform `ApiResponse<T>` envelope; this client unwraps it and turns
/// failures into [`ClientError`].
pub struct ApiClient<C: ApiConfig> {
    pub(crate) config: C,
    pub(crate) http: Client,
}

impl<C: ApiConfig> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn prepare(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .timeout(Duration::from_secs(self.config.timeout_seconds()));

        for (key, value) in self.config.headers() {
            request = request.header(&key, &value);
        }

        request
    }

    /// GET with retry: transport errors and 5xx answers are retried up to
    /// `retry_attempts` times. Other verbs are not idempotent and never retry.
    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let max_retries = self.config.retry_attempts();
        let delay = Duration::from_secs(self.config.retry_delay_seconds());
        let mut attempt: u32 = 0;

        loop {
            let mut request = self.prepare(Method::GET, &url);
            if let Some(q) = query {
                request = request.query(q);
            }

            tracing::debug!("GET {}", url);
            match self.dispatch::<T>(request).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    attempt += 1;
                    tracing::warn!(
                        "GET {} failed ({}), retrying {}/{}",
                        url,
                        e,
                        attempt,
                        max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);
        let request = self.prepare(Method::POST, &url).json(body);
        self.dispatch(request).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::debug!("PUT {}", url);
        let request = self.prepare(Method::PUT, &url).json(body);
        self.dispatch(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path);
        tracing::debug!("DELETE {}", url);
        let request = self.prepare(Method::DELETE, &url);
        self.dispatch_empty(request).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope.into_data()
    }

    /// For endpoints whose envelope carries no payload (deletes, cancels).
    async fn dispatch_empty(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        let envelope: ApiResponse<serde_json::Value> = response.json().await?;
        if !envelope.success {
            return Err(ClientError::EnvelopeError {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
                errors: envelope.errors.unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Error-status bodies still use the envelope; surface its message when
    /// one is there.
    async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> ClientError {
        let message = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        ClientError::ApiError {
            status: status.as_u16(),
            message,
        }
    }
}

fn is_retryable(error: &ClientError) -> bool {
    match error {
        ClientError::HttpError(_) => true,
        ClientError::ApiError { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Walks a paged listing until `has_next_page` goes false and collects every
/// item.
pub async fn fetch_all_pages<T, F, Fut>(first: PageQuery, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<PagedList<T>>>,
{
    let mut query = first;
    let mut items = Vec::new();

    for _ in 0..MAX_PAGES {
        let page = fetch_page(query).await?;
        let has_next = page.has_next_page;
        tracing::debug!(
            "fetched page {} ({} items, total {})",
            page.page_number,
            page.items.len(),
            page.total_count
        );
        items.extend(page.items);
        if !has_next {
            return Ok(items);
        }
        query = query.next();
    }

    Err(ClientError::ResponseError {
        message: format!("listing did not terminate after {} pages", MAX_PAGES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedConfig {
        base_url: String,
    }

    impl ApiConfig for FixedConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }

        fn headers(&self) -> HashMap<String, String> {
            HashMap::new()
        }

        fn retry_attempts(&self) -> u32 {
            0
        }

        fn retry_delay_seconds(&self) -> u64 {
            0
        }
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let client = ApiClient::new(FixedConfig {
            base_url: "https://tm.example.com/api/".to_string(),
        });
        assert_eq!(
            client.endpoint("/tms/7"),
            "https://tm.example.com/api/tms/7"
        );
        assert_eq!(client.endpoint("tms"), "https://tm.example.com/api/tms");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_walks_until_exhausted() {
        let pages = vec![
            PagedList {
                items: vec![1, 2],
                page_number: 1,
                page_size: 2,
                total_count: 5,
                has_next_page: true,
            },
            PagedList {
                items: vec![3, 4],
                page_number: 2,
                page_size: 2,
                total_count: 5,
                has_next_page: true,
            },
            PagedList {
                items: vec![5],
                page_number: 3,
                page_size: 2,
                total_count: 5,
                has_next_page: false,
            },
        ];

        let all = fetch_all_pages(PageQuery::new(1, 2), |query| {
            let page = pages[(query.page_number - 1) as usize].clone();
            async move { Ok(page) }
        })
        .await
        .unwrap();

        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fetch_all_pages_propagates_errors() {
        let result: Result<Vec<i32>> =
            tokio_test::block_on(fetch_all_pages(PageQuery::default(), |_| async {
                Err(ClientError::ResponseError {
                    message: "boom".to_string(),
                })
            }));
        assert!(result.is_err());
    }
}
