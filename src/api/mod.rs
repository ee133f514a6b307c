mod handlers;
mod views;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::game::GameSession;
use crate::loader::BoardLoader;
use crate::provider::TriviaProvider;

pub use views::*;

/// Shared server state: the loader and the one game this server hosts.
pub struct AppState<P> {
    pub loader: Arc<BoardLoader<P>>,
    pub session: Arc<Mutex<GameSession>>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            session: Arc::clone(&self.session),
        }
    }
}

impl<P: TriviaProvider> AppState<P> {
    pub fn new(loader: BoardLoader<P>) -> Self {
        Self {
            loader: Arc::new(loader),
            session: Arc::new(Mutex::new(GameSession::new())),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock().expect("game session lock poisoned")
    }
}

pub fn create_router<P: TriviaProvider + 'static>(state: AppState<P>) -> Router {
    let api = Router::new()
        // Game
        .route(
            "/game",
            get(handlers::get_game::<P>).post(handlers::start_game::<P>),
        )
        .route("/game/reveal", post(handlers::reveal_clue::<P>))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
