//! # Joke Search Ingest
//!
//! This crate loads jokes from a CSV file into the search index.
//!
//! ## Architecture
//!
//! The ingest follows a Reader-Loader pattern:
//!
//! 1. **Reader**: Streams joke rows out of a CSV file
//! 2. **Loader**: Sets up the pipeline and index, then indexes one row at a time

pub mod errors;
pub mod loader;
pub mod reader;

pub use errors::IngestError;
pub use loader::{IngestSummary, JokeLoader, RowFailurePolicy};
pub use reader::JokeCsvReader;
