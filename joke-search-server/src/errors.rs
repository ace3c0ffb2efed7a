//! Error types for the search server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use joke_search_repository::SearchError;
use serde_json::json;
use thiserror::Error;

/// Message returned to callers for every failed search.
pub const SEARCH_FAILED: &str = "Search failed";

/// Errors that can occur while serving a search request.
///
/// Callers never see the variant: every error becomes the same 500 body.
/// The detail is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be read as a search request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The search engine call failed.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl ApiError {
    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": SEARCH_FAILED })),
        )
            .into_response()
    }
}
