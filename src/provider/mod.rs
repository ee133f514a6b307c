//! Access to the remote trivia data provider.
//!
//! The loader only depends on [`TriviaProvider`]; [`ProviderClient`] is the
//! HTTP implementation. The wire shapes are:
//!
//! - `GET {base}/categories` -> `{ "categories": [{ "id": .. }, ..] }`
//! - `GET {base}/details/{id}` -> `{ "details": { "<id>": { "title": .., "clues": [{ "question": .., "answer": .. }, ..] } } }`

mod client;

use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use jeopardy_core::CategoryId;

pub use client::ProviderClient;

/// Provider call failures.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl ProviderError {
    /// Whether retrying the same call could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => !e.is_decode(),
            Self::Timeout(_) | Self::Server(_) => true,
            Self::NotFound(_) | Self::Shape(_) => false,
        }
    }
}

/// Source of categories and clues.
///
/// Futures must be `Send` so loads can run inside server handlers.
pub trait TriviaProvider: Send + Sync {
    /// Every category id the provider offers.
    fn category_ids(&self) -> impl Future<Output = Result<Vec<CategoryId>, ProviderError>> + Send;

    /// Title and clues of one category, as sent by the provider.
    fn category_details(
        &self,
        id: &CategoryId,
    ) -> impl Future<Output = Result<CategoryDetails, ProviderError>> + Send;
}

/// One entry of the `/categories` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
}

/// A category as returned by `/details/{id}`. Fields are optional so the
/// loader, not the decoder, reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Vec<ClueDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClueDetails {
    #[serde(default, deserialize_with = "text_or_number")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub answer: Option<String>,
}

impl ClueDetails {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}

impl CategoryDetails {
    pub fn new(title: impl Into<String>, clues: Vec<ClueDetails>) -> Self {
        Self {
            title: Some(title.into()),
            clues,
        }
    }
}

/// Answers like `4` arrive as JSON numbers.
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(
        Option::<Text>::deserialize(deserializer)?.map(|text| match text {
            Text::String(s) => s,
            Text::Number(n) => n.to_string(),
            Text::Bool(b) => b.to_string(),
        }),
    )
}
