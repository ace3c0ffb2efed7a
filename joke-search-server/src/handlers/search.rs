//! The search endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::errors::ApiError;
use crate::AppState;
use joke_search_shared::{JokeHit, SearchQuery};

/// Body of `POST /api/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_text: String,
}

/// Forward the text to the engine as a similarity query and return the top
/// hits as `[{ "joke": ..., "score": ... }]`.
///
/// The text is passed through as-is. Any failure, including a body that is
/// not a search request, is answered with `500 {"error": "Search failed"}`.
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<JokeHit>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection, "Search error");
        ApiError::invalid_request(rejection.body_text())
    })?;

    let query = SearchQuery::new(request.search_text).with_size(state.result_size);

    let hits = state.client.search(&query).await.map_err(|e| {
        error!(error = %e, "Search error");
        ApiError::from(e)
    })?;

    debug!(hits = hits.len(), "Search served");
    Ok(Json(hits))
}
