//! In-memory trivia provider for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use jeopardy::loader::{BoardLoader, ClueCount, LoaderSettings};
use jeopardy::provider::{CategoryDetails, ClueDetails, ProviderError, TriviaProvider};
use jeopardy_core::CategoryId;

#[derive(Default)]
pub struct FakeProvider {
    ids: Vec<CategoryId>,
    details: HashMap<CategoryId, CategoryDetails>,
    /// Remaining transient failures per category
    flaky: Mutex<HashMap<CategoryId, u32>>,
    hanging: HashSet<CategoryId>,
    /// 1-based detail call number that fails with a shape error
    broken_call: Option<usize>,
    list_unavailable: bool,
    detail_calls: AtomicUsize,
    fetched: Mutex<Vec<CategoryId>>,
}

impl FakeProvider {
    /// `count` categories with ids "1".."count", each holding `clues` clues
    /// named `Q<category>.<clue>` / `A<category>.<clue>`.
    pub fn with_categories(count: usize, clues: usize) -> Self {
        let mut provider = Self::default();
        for c in 1..=count {
            provider = provider.with_category(&c.to_string(), clues);
        }
        provider
    }

    pub fn with_category(mut self, id: &str, clues: usize) -> Self {
        let details = CategoryDetails::new(
            format!("Category {id}"),
            (0..clues)
                .map(|j| ClueDetails::new(format!("Q{id}.{j}"), format!("A{id}.{j}")))
                .collect(),
        );
        self.with_details(id, details)
    }

    pub fn with_details(mut self, id: &str, details: CategoryDetails) -> Self {
        let id = CategoryId::from(id);
        if !self.ids.contains(&id) {
            self.ids.push(id.clone());
        }
        self.details.insert(id, details);
        self
    }

    pub fn flaky(self, id: &str, failures: u32) -> Self {
        self.flaky
            .lock()
            .unwrap()
            .insert(CategoryId::from(id), failures);
        self
    }

    pub fn hanging(mut self, id: &str) -> Self {
        self.hanging.insert(CategoryId::from(id));
        self
    }

    pub fn broken_call(mut self, call: usize) -> Self {
        self.broken_call = Some(call);
        self
    }

    pub fn list_unavailable(mut self) -> Self {
        self.list_unavailable = true;
        self
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn fetched(&self) -> Vec<CategoryId> {
        self.fetched.lock().unwrap().clone()
    }
}

impl TriviaProvider for FakeProvider {
    async fn category_ids(&self) -> Result<Vec<CategoryId>, ProviderError> {
        if self.list_unavailable {
            return Err(ProviderError::NotFound("/categories".to_string()));
        }
        Ok(self.ids.clone())
    }

    async fn category_details(&self, id: &CategoryId) -> Result<CategoryDetails, ProviderError> {
        let call = self.detail_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.fetched.lock().unwrap().push(id.clone());

        if self.hanging.contains(id) {
            std::future::pending::<()>().await;
        }
        if self.broken_call == Some(call) {
            return Err(ProviderError::Shape(format!("call {call} returned garbage")));
        }
        let flaky = {
            let mut flaky = self.flaky.lock().unwrap();
            match flaky.get_mut(id) {
                Some(remaining) if *remaining > 0 => {
                    *remaining -= 1;
                    true
                }
                _ => false,
            }
        };
        if flaky {
            return Err(ProviderError::Server("503 Service Unavailable".to_string()));
        }

        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }
}

pub fn settings(categories: usize, clues: usize) -> LoaderSettings {
    LoaderSettings {
        categories,
        clue_count: ClueCount::Fixed(clues),
        request_timeout: Duration::from_millis(200),
        retries: 1,
    }
}

pub fn loader(provider: FakeProvider, categories: usize, clues: usize) -> BoardLoader<FakeProvider> {
    BoardLoader::new(provider, settings(categories, clues))
}
