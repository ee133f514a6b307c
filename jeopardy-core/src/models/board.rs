use serde::Serialize;

use super::category::Category;
use super::clue::Clue;
use super::coord::Coord;
use crate::error::{BoardError, Result};

/// The categories of one game session.
///
/// Every category holds exactly [`Board::clues_per_category`] clues, so each
/// coordinate inside the grid resolves to one clue. A board is never patched
/// in place beyond clue reveal states; a new game builds a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    categories: Vec<Category>,
    clues_per_category: usize,
}

impl Board {
    /// Assemble a board, checking that all categories have the same clue count.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let clues_per_category = categories.first().map_or(0, |c| c.clues.len());
        if let Some((index, category)) = categories
            .iter()
            .enumerate()
            .find(|(_, c)| c.clues.len() != clues_per_category)
        {
            return Err(BoardError::UnevenClueCount {
                category: index,
                expected: clues_per_category,
                found: category.clues.len(),
            });
        }
        Ok(Self {
            categories,
            clues_per_category,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn clues_per_category(&self) -> usize {
        self.clues_per_category
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn clue(&self, coord: Coord) -> Option<&Clue> {
        self.categories
            .get(coord.category)
            .and_then(|c| c.clues.get(coord.clue))
    }

    pub(crate) fn clue_mut(&mut self, coord: Coord) -> Result<&mut Clue> {
        let categories = self.categories.len();
        let clues = self.clues_per_category;
        self.categories
            .get_mut(coord.category)
            .and_then(|c| c.clues.get_mut(coord.clue))
            .ok_or(BoardError::OutOfRange {
                coord,
                categories,
                clues,
            })
    }

    /// True once every clue on the board shows its answer.
    pub fn is_complete(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|c| &c.clues)
            .all(|clue| clue.reveal_state().is_terminal())
    }
}
