use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::loader::{ClueCount, LoaderSettings};

const APP_NAME: &str = "jeopardy";
const CONFIG_FILE: &str = "config.json";

/// Public jeopardy clue API the original game was played against.
pub const DEFAULT_API_URL: &str = "https://jeopardy-api-08c22fd2e683.herokuapp.com/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the trivia provider
    pub api_url: String,
    /// Number of categories on a board
    pub categories: usize,
    /// Clues kept per category. `None` uses the smallest count the provider
    /// returned for the selected categories.
    pub clues_per_category: Option<usize>,
    /// Timeout for each provider request
    pub request_timeout_secs: u64,
    /// Extra attempts for a provider call that failed transiently
    pub fetch_retries: u32,
    /// Port for `serve`
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            categories: 6,
            clues_per_category: Some(5),
            request_timeout_secs: 10,
            fetch_retries: 1,
            port: 3000,
        }
    }
}

impl Config {
    /// Load the user's config file, then apply `JEOPARDY_*` environment
    /// overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        let mut config = match get_config_path() {
            Ok(path) => Self::from_path(&path)?,
            Err(e) => {
                tracing::warn!("No config directory, using defaults: {}", e);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, usually the process environment.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("JEOPARDY_API_URL") {
            self.api_url = url;
        }
        if let Some(v) = lookup("JEOPARDY_CATEGORIES") {
            self.categories = v.parse().context("JEOPARDY_CATEGORIES must be a number")?;
        }
        if let Some(v) = lookup("JEOPARDY_CLUES") {
            // "provider" defers to whatever the provider returns
            self.clues_per_category = match v.trim() {
                "provider" => None,
                n => Some(n.parse().context("JEOPARDY_CLUES must be a number or \"provider\"")?),
            };
        }
        if let Some(v) = lookup("JEOPARDY_TIMEOUT_SECS") {
            self.request_timeout_secs =
                v.parse().context("JEOPARDY_TIMEOUT_SECS must be a number")?;
        }
        if let Some(v) = lookup("JEOPARDY_RETRIES") {
            self.fetch_retries = v.parse().context("JEOPARDY_RETRIES must be a number")?;
        }
        if let Some(v) = lookup("JEOPARDY_PORT") {
            self.port = v.parse().context("JEOPARDY_PORT must be a port number")?;
        }
        self.validate()
    }

    /// Reject settings no load could succeed with.
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            categories: self.categories,
            clue_count: match self.clues_per_category {
                Some(n) => ClueCount::Fixed(n),
                None => ClueCount::ProviderDeclared,
            },
            request_timeout: self.request_timeout(),
            retries: self.fetch_retries,
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
