//! OpenSearch query builders and response parsing.

use serde_json::{json, Value};

use super::index_config::{EMBEDDING_FIELD, JOKE_FIELD};
use crate::errors::SearchError;
use joke_search_shared::{JokeHit, SearchQuery};

/// Build a neural similarity query from a SearchQuery.
///
/// The engine embeds `query_text` with `model_id` and returns the `k`
/// nearest documents by the embedding field. `size` and `k` are the same so
/// the response holds at most `query.size` hits.
pub fn build_search_query(query: &SearchQuery, model_id: &str) -> Value {
    json!({
        "size": query.size,
        "query": {
            "neural": {
                (EMBEDDING_FIELD): {
                    "model_id": model_id,
                    "query_text": query.text,
                    "k": query.size
                }
            }
        }
    })
}

/// Parse the hits of a search response, keeping engine order.
pub fn parse_hits(body: &Value) -> Result<Vec<JokeHit>, SearchError> {
    let hits = body
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(|h| h.as_array())
        .ok_or_else(|| SearchError::parse("Response has no hits array"))?;

    hits.iter().map(parse_hit).collect()
}

fn parse_hit(hit: &Value) -> Result<JokeHit, SearchError> {
    let joke = hit
        .get("_source")
        .and_then(|s| s.get(JOKE_FIELD))
        .and_then(|j| j.as_str())
        .ok_or_else(|| SearchError::parse("Hit has no joke in _source"))?;

    let score = hit
        .get("_score")
        .and_then(|s| s.as_f64())
        .ok_or_else(|| SearchError::parse("Hit has no numeric _score"))?;

    Ok(JokeHit::new(joke, score))
}
