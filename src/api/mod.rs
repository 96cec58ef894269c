//! REST API Client
//!
//! Frontend bindings to the todo service, organized by resource. The stores
//! only see the `TodoApi` / `AssigneeApi` traits so tests can swap in an
//! in-memory implementation.

mod assignee;
mod todo;

use serde::de::DeserializeOwned;

use crate::error::{status_message, AppError, AppResult};

pub use assignee::AssigneeApi;
pub use todo::TodoApi;

/// HTTP implementation of both API traits
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send and decode a JSON response body
    async fn fetch_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> AppResult<T> {
        let response = Self::send(request).await?;
        response.json::<T>().await.map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Send and discard the response body
    async fn fetch_empty(&self, request: reqwest::RequestBuilder) -> AppResult<()> {
        Self::send(request).await.map(|_| ())
    }

    async fn send(request: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let response = request.send().await.map_err(AppError::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        let message = status_message(status.as_u16(), &body);
        log::warn!("[HttpApi] {} -> {}", url, status);
        Err(AppError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
