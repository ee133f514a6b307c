//! The current game, as held by a view.
//!
//! A session owns at most one [`Board`]. Restarting discards it immediately
//! and a newly loaded board only becomes visible through [`GameSession::commit`],
//! so clicks can never reach a board that is still loading or half built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use jeopardy_core::{Board, BoardError, Coord, Reveal};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No game is ready ({0})")]
    NotReady(GameStatus),

    #[error("Game {0} has been replaced")]
    StaleGame(Uuid),

    #[error("Load was superseded by a newer restart")]
    Superseded,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Lifecycle of a session.
///
/// - `Idle`: nothing started yet
/// - `Loading`: a board is being fetched
/// - `Ready`: a board accepts clicks
/// - `Failed`: the last load failed, no board
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed board with its identity.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub board: Board,
}

/// Proof that a load was started; only the latest ticket can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug)]
enum Phase {
    Idle,
    Loading,
    Ready(Game),
    Failed(String),
}

#[derive(Debug)]
pub struct GameSession {
    generation: u64,
    phase: Phase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: Phase::Idle,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Idle => GameStatus::Idle,
            Phase::Loading => GameStatus::Loading,
            Phase::Ready(_) => GameStatus::Ready,
            Phase::Failed(_) => GameStatus::Failed,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        match &self.phase {
            Phase::Ready(game) => Some(game),
            _ => None,
        }
    }

    /// Reason the last load failed, if it did.
    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Drop the current board and start loading a new one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        tracing::debug!(generation = self.generation, "game load started");
        LoadTicket(self.generation)
    }

    /// Make `board` the current game if `ticket` is still the latest load.
    pub fn commit(&mut self, ticket: LoadTicket, board: Board) -> Result<&Game, GameError> {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                generation = self.generation,
                "discarding superseded board"
            );
            return Err(GameError::Superseded);
        }
        let game = Game {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            board,
        };
        tracing::info!(game_id = %game.id, "game ready");
        self.phase = Phase::Ready(game);
        self.game().ok_or(GameError::NotReady(self.status()))
    }

    /// Record a failed load. Returns false if the ticket was superseded.
    pub fn fail(&mut self, ticket: LoadTicket, reason: impl Into<String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.phase = Phase::Failed(reason.into());
        true
    }

    /// Advance the clue at `coord` on the current board.
    pub fn reveal(&mut self, coord: Coord) -> Result<Reveal, GameError> {
        let status = self.status();
        match &mut self.phase {
            Phase::Ready(game) => Ok(game.board.reveal(coord)?),
            _ => Err(GameError::NotReady(status)),
        }
    }

    /// Like [`reveal`](Self::reveal), rejecting clicks meant for another game.
    pub fn reveal_in(&mut self, game_id: Uuid, coord: Coord) -> Result<Reveal, GameError> {
        match self.game() {
            Some(game) if game.id != game_id => Err(GameError::StaleGame(game_id)),
            _ => self.reveal(coord),
        }
    }
}
