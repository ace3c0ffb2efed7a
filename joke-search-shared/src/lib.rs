//! # Joke Search Shared
//!
//! Types shared between the ingestion run, the search server and the
//! search engine repository.

mod document;
mod search;

pub use document::JokeDocument;
pub use search::{JokeHit, SearchQuery, DEFAULT_RESULT_SIZE};
