use thiserror::Error;

use crate::models::{CategoryId, Coord};

/// Failures while building a board or addressing a clue on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Not enough categories: requested {requested}, provider offers {available}")]
    InsufficientSource { requested: usize, available: usize },

    #[error("Failed to fetch category list: {reason}")]
    CategoryListFetch { reason: String },

    #[error("Failed to fetch category {id}: {reason}")]
    CategoryFetch { id: CategoryId, reason: String },

    #[error("Category {category} has {found} clues, expected {expected}")]
    UnevenClueCount {
        category: usize,
        expected: usize,
        found: usize,
    },

    #[error("No clue at {coord} on a {categories}x{clues} board")]
    OutOfRange {
        coord: Coord,
        categories: usize,
        clues: usize,
    },
}

pub type Result<T> = core::result::Result<T, BoardError>;
