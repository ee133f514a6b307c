//! Domain models for a game board.
//!
//! - [`Board`]: ordered categories with a uniform clue count.
//! - [`Category`]: a titled column of clues, identified upstream by [`CategoryId`].
//! - [`Clue`]: question and answer text plus its [`RevealState`].
//! - [`Coord`]: the (category, clue) address of one cell.

mod board;
mod category;
mod clue;
mod coord;

pub use board::*;
pub use category::*;
pub use clue::*;
pub use coord::*;
