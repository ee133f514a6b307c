//! JSON shapes exchanged with the browser page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jeopardy_core::{Category, Clue, RevealState};

use crate::game::Game;

/// The board as the page draws it. Hidden cells carry no text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardView {
    pub game_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub clues_per_category: usize,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub title: String,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: RevealState,
    pub text: Option<String>,
}

/// A click on a cell. `game_id` guards against clicks on a replaced board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealInput {
    #[serde(default)]
    pub game_id: Option<Uuid>,
    pub category: usize,
    pub clue: usize,
}

impl From<&Game> for BoardView {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            started_at: game.started_at,
            clues_per_category: game.board.clues_per_category(),
            categories: game.board.categories().iter().map(Into::into).collect(),
        }
    }
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            cells: category.clues.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Clue> for CellView {
    fn from(clue: &Clue) -> Self {
        Self {
            state: clue.reveal_state(),
            text: clue.visible_text().map(str::to_string),
        }
    }
}
