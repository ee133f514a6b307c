use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of one cell: the category column and the clue row within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub category: usize,
    pub clue: usize,
}

impl Coord {
    pub fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

/// Renders as the `"<category>-<clue>"` cell id used by the views.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid cell id {0:?}, expected \"<category>-<clue>\"")]
pub struct ParseCoordError(String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let (category, clue) = s.trim().split_once('-').ok_or_else(err)?;
        // usize::from_str would also take a leading '+'
        let index = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            part.parse::<usize>().map_err(|_| err())
        };
        Ok(Self {
            category: index(category)?,
            clue: index(clue)?,
        })
    }
}
