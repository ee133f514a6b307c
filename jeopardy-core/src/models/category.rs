use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::clue::Clue;

/// A titled column of clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

/// Provider-side identifier of a category.
///
/// Providers send ids as JSON numbers or strings; both deserialize into the
/// same textual form so `7` and `"7"` name the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawCategoryId::deserialize(deserializer)? {
            RawCategoryId::Number(n) => Self(n.to_string()),
            RawCategoryId::Text(s) => Self(s),
        })
    }
}
