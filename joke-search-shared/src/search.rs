//! Search query and result types.

use serde::{Deserialize, Serialize};

/// Number of results returned by a similarity search unless overridden.
pub const DEFAULT_RESULT_SIZE: usize = 5;

/// A free-text similarity query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Text the engine turns into a query embedding.
    pub text: String,
    /// Maximum number of hits. Also used as `k` for the nearest-neighbor search.
    pub size: usize,
}

impl SearchQuery {
    /// Create a query with the default result size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: DEFAULT_RESULT_SIZE,
        }
    }

    /// Override the number of results.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

/// One search hit: the joke and its engine-assigned score.
///
/// The score is whatever the engine returns for the hit. It is not
/// normalized and only meaningful for ordering results of the same query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JokeHit {
    pub joke: String,
    pub score: f64,
}

impl JokeHit {
    pub fn new(joke: impl Into<String>, score: f64) -> Self {
        Self {
            joke: joke.into(),
            score,
        }
    }
}
