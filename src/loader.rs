//! Board loading: pick random categories from the provider and fetch their clues.
//!
//! A load either returns a complete [`Board`] or an error; categories fetched
//! before a failure are dropped with the partially built list.

use std::future::Future;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use jeopardy_core::{select_category_ids, Board, BoardError, Category, CategoryId, Clue};

use crate::provider::{CategoryDetails, ProviderError, TriviaProvider};

/// How many clues each category on the board holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueCount {
    /// Keep the first `n` clues; categories with fewer fail to load.
    Fixed(usize),
    /// Use the smallest clue count among the fetched categories.
    ProviderDeclared,
}

#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Categories per board
    pub categories: usize,
    pub clue_count: ClueCount,
    /// Upper bound on each provider call
    pub request_timeout: Duration,
    /// Extra attempts for transient provider failures
    pub retries: u32,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            categories: 6,
            clue_count: ClueCount::Fixed(5),
            request_timeout: Duration::from_secs(10),
            retries: 1,
        }
    }
}

pub struct BoardLoader<P> {
    provider: P,
    settings: LoaderSettings,
}

impl<P: TriviaProvider> BoardLoader<P> {
    pub fn new(provider: P, settings: LoaderSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Load a board with the configured number of categories.
    pub async fn new_board(&self) -> Result<Board, BoardError> {
        self.load_board(self.settings.categories).await
    }

    /// Load a board of `count` randomly chosen categories.
    pub async fn load_board(&self, count: usize) -> Result<Board, BoardError> {
        let all = self.fetch_category_ids().await?;
        let ids = select_category_ids(&all, count, &mut rand::thread_rng())?;
        self.load_selected(&ids).await
    }

    /// Like [`load_board`](Self::load_board) with a reproducible selection.
    pub async fn load_board_seeded(&self, count: usize, seed: u64) -> Result<Board, BoardError> {
        let all = self.fetch_category_ids().await?;
        let ids = select_category_ids(&all, count, &mut StdRng::seed_from_u64(seed))?;
        self.load_selected(&ids).await
    }

    /// Every category id the provider offers.
    pub async fn fetch_category_ids(&self) -> Result<Vec<CategoryId>, BoardError> {
        self.with_retry(|| self.provider.category_ids())
            .await
            .map_err(|e| BoardError::CategoryListFetch {
                reason: e.to_string(),
            })
    }

    /// Fetch one category with all its clues hidden.
    pub async fn fetch_category(&self, id: &CategoryId) -> Result<Category, BoardError> {
        let fetch_error = |reason: String| BoardError::CategoryFetch {
            id: id.clone(),
            reason,
        };
        let details = self
            .with_retry(|| self.provider.category_details(id))
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        build_category(details, self.settings.clue_count).map_err(fetch_error)
    }

    /// Fetch the given categories in order and assemble them into a board.
    pub async fn load_selected(&self, ids: &[CategoryId]) -> Result<Board, BoardError> {
        let mut categories = Vec::with_capacity(ids.len());
        for (index, id) in ids.iter().enumerate() {
            tracing::debug!(%id, index, total = ids.len(), "fetching category");
            categories.push(self.fetch_category(id).await?);
        }

        if self.settings.clue_count == ClueCount::ProviderDeclared {
            let shortest = categories.iter().map(|c| c.clues.len()).min().unwrap_or(0);
            for category in &mut categories {
                category.clues.truncate(shortest);
            }
        }

        let board = Board::new(categories)?;
        tracing::info!(
            categories = board.category_count(),
            clues = board.clues_per_category(),
            "board loaded"
        );
        Ok(board)
    }

    /// Run a provider call under the request timeout, retrying transient
    /// failures up to the configured bound.
    async fn with_retry<T, F, Fut>(&self, mut call: F) -> Result<T, ProviderError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let timeout = self.settings.request_timeout;
        let mut attempt = 0;
        loop {
            let result = match tokio::time::timeout(timeout, call()).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(timeout)),
            };
            match result {
                Err(e) if e.is_transient() && attempt < self.settings.retries => {
                    attempt += 1;
                    tracing::warn!(attempt, "Retrying provider call: {}", e);
                }
                other => return other,
            }
        }
    }
}

/// Validate a provider category and turn it into hidden clues.
fn build_category(details: CategoryDetails, clue_count: ClueCount) -> Result<Category, String> {
    let title = details
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or("missing title")?;

    let (required, keep) = match clue_count {
        ClueCount::Fixed(n) => (n, n),
        ClueCount::ProviderDeclared => (1, details.clues.len()),
    };
    if details.clues.len() < required {
        return Err(format!(
            "expected at least {} clues, provider returned {}",
            required,
            details.clues.len()
        ));
    }

    let clues = details
        .clues
        .into_iter()
        .take(keep)
        .enumerate()
        .map(|(i, clue)| match (clue.question, clue.answer) {
            (Some(question), Some(answer)) => Ok(Clue::new(question, answer)),
            (None, _) => Err(format!("clue {} has no question", i)),
            (_, None) => Err(format!("clue {} has no answer", i)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Category::new(title, clues))
}
