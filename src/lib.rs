//! Jeopardy board game: loads a board from a trivia provider and serves it
//! to a browser page or a terminal.
//!
//! - [`provider`]: the trivia provider trait and its HTTP client
//! - [`loader`]: random category selection and atomic board loading
//! - [`game`]: the current game owned by a view, gating clicks until a load commits
//! - [`api`]: axum router for the browser page and its JSON API
//! - [`render`]: text rendering for terminal play
//! - [`config`]: file and environment configuration

pub mod api;
pub mod config;
pub mod game;
pub mod loader;
pub mod provider;
pub mod render;
