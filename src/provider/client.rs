//! HTTP client for the trivia provider API.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use jeopardy_core::CategoryId;

use super::{CategoriesResponse, CategoryDetails, ProviderError, TriviaProvider};

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    details: HashMap<String, CategoryDetails>,
}

/// HTTP client for the trivia provider.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    base_url: String,
    client: Client,
}

impl ProviderClient {
    /// Create a client for `base_url` (no trailing slash needed) whose
    /// requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "provider request");
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Handle response, converting HTTP errors to ProviderError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| ProviderError::Shape(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ProviderError::NotFound(body)),
                _ => Err(ProviderError::Server(format!("{}: {}", status, body))),
            }
        }
    }
}

impl TriviaProvider for ProviderClient {
    async fn category_ids(&self) -> Result<Vec<CategoryId>, ProviderError> {
        let listing: CategoriesResponse = self.get("/categories").await?;
        Ok(listing.categories.into_iter().map(|c| c.id).collect())
    }

    async fn category_details(&self, id: &CategoryId) -> Result<CategoryDetails, ProviderError> {
        let mut response: DetailsResponse = self.get(&format!("/details/{}", id)).await?;
        response.details.remove(id.as_str()).ok_or_else(|| {
            ProviderError::Shape(format!("details response has no entry for category {}", id))
        })
    }
}
