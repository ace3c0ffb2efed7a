//! Error types for the joke ingest.

use joke_search_repository::SearchError;
use thiserror::Error;

/// Errors that can occur in the joke ingest.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The CSV header has no column with the expected name.
    #[error("CSV has no '{0}' column")]
    MissingColumn(String),

    /// A CSV record could not be read or decoded.
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Pipeline or index setup failed; nothing was indexed.
    #[error("Setup error: {0}")]
    SetupError(SearchError),

    /// Indexing a single row failed.
    #[error("Failed to index row {row}: {source}")]
    RowError {
        /// 1-based data row number, not counting the header.
        row: usize,
        source: SearchError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IngestError {
    /// Create a missing column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvError(err.to_string())
    }
}
