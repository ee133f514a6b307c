//! Board model and clue reveal state machine for the jeopardy game.
//!
//! # Core Concepts
//!
//! - [`Board`]: the categories of one game session. Every category holds the
//!   same number of clues, so any [`Coord`] inside the grid names exactly one
//!   [`Clue`].
//! - [`Clue`]: a question/answer pair advanced through [`RevealState`] by
//!   [`Board::reveal`]. The lifecycle is `Hidden -> QuestionShown -> AnswerShown`;
//!   clicks on a fully revealed clue are no-ops.
//! - [`select_category_ids`]: uniform sampling without replacement of the
//!   categories that make up a new board.
//!
//! Fetching clue data is not this crate's concern; the application crate
//! builds [`Category`] values from its provider and hands them to
//! [`Board::new`].

mod error;
mod models;
mod reveal;
mod select;

pub use error::*;
pub use models::*;
pub use reveal::*;
pub use select::*;
