//! The document stored in the search index.

use serde::{Deserialize, Serialize};

/// A single joke as it is written to the search index.
///
/// Only the joke text is sent. The embedding field is added by the
/// ingestion pipeline on the engine side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeDocument {
    /// The joke text.
    pub joke: String,
}

impl JokeDocument {
    /// Create a new document from joke text.
    pub fn new(joke: impl Into<String>) -> Self {
        Self { joke: joke.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_only_joke_field() {
        let doc = JokeDocument::new("I'm reading a book about anti-gravity.");
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "joke": "I'm reading a book about anti-gravity." })
        );
    }
}
