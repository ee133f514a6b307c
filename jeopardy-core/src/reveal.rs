//! The clue reveal state machine.
//!
//! | state           | on click        | displays  | mark revealed |
//! |-----------------|-----------------|-----------|---------------|
//! | `Hidden`        | `QuestionShown` | question  | no            |
//! | `QuestionShown` | `AnswerShown`   | answer    | yes           |
//! | `AnswerShown`   | (no change)     | answer    | no            |

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Board, Clue, Coord, RevealState};

/// Outcome of one click on a clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// Text the cell should now display.
    pub display_text: String,
    /// False when the click hit an already answered clue.
    pub state_changed: bool,
    /// State of the clue after the click.
    pub state: RevealState,
    /// Set on the click that shows the answer, so the view can style the
    /// cell as finished.
    pub mark_revealed: bool,
}

impl Clue {
    /// Advance this clue by one click.
    pub fn reveal(&mut self) -> Reveal {
        let previous = self.reveal_state;
        let state = previous.next();
        self.reveal_state = state;

        let display_text = match state {
            RevealState::QuestionShown => self.question.clone(),
            RevealState::AnswerShown | RevealState::Hidden => self.answer.clone(),
        };

        Reveal {
            display_text,
            state_changed: state != previous,
            state,
            mark_revealed: previous == RevealState::QuestionShown,
        }
    }
}

impl Board {
    /// Advance the clue at `coord`. Out-of-range coordinates leave the board
    /// untouched.
    pub fn reveal(&mut self, coord: Coord) -> Result<Reveal> {
        let reveal = self.clue_mut(coord)?.reveal();
        if reveal.state_changed {
            tracing::debug!(%coord, state = reveal.state.as_str(), "clue revealed");
        }
        Ok(reveal)
    }
}

/// Free-function form of [`Board::reveal`] addressed by raw indices.
pub fn reveal(board: &mut Board, category_index: usize, clue_index: usize) -> Result<Reveal> {
    board.reveal(Coord::new(category_index, clue_index))
}
