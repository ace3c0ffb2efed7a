//! # Joke Search Server
//!
//! HTTP surface of the joke search: one JSON search endpoint that forwards
//! the query to the search engine, plus the static search page.

pub mod errors;
pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

pub use errors::ApiError;
use joke_search_repository::SearchEngineClient;
use joke_search_shared::DEFAULT_RESULT_SIZE;

/// Directory holding the bundled search page.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// State shared by all request handlers.
///
/// Nothing in it is mutated after startup, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn SearchEngineClient>,
    pub result_size: usize,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create state serving the bundled page and returning five results.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            client,
            result_size: DEFAULT_RESULT_SIZE,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}

/// Build the HTTP router.
///
/// - `GET /` serves `index.html`
/// - `POST /api/search` runs a similarity search
/// - `GET /:asset` serves any other file of the static directory
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::assets::index))
        .route("/api/search", post(handlers::search::search))
        .route("/:asset", get(handlers::assets::asset))
        .with_state(state)
}
