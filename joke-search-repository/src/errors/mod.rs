//! Error types for the joke search repository.

mod search_error;

pub use search_error::SearchError;
