//! Loader module for the joke ingest.
//!
//! Prepares the search engine and indexes jokes into it, one request per row.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::errors::IngestError;
use joke_search_repository::{SearchEngineClient, SetupOutcome};
use joke_search_shared::JokeDocument;

/// What the loader does after a row fails to decode or index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowFailurePolicy {
    /// Stop at the first failing row. Rows after it are not read.
    #[default]
    Abort,
    /// Log the failure and move on to the next row.
    Continue,
}

impl FromStr for RowFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            other => Err(format!(
                "unknown row failure policy '{}', expected 'abort' or 'continue'",
                other
            )),
        }
    }
}

impl fmt::Display for RowFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// Outcome of an ingest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Rows taken from the reader, including failed ones.
    pub rows_read: usize,
    /// Rows accepted by the search engine.
    pub indexed: usize,
    /// Rows that failed to decode or index.
    pub failed: usize,
    /// Whether the run stopped before the end of the input.
    pub aborted: bool,
}

/// Loader that indexes jokes into the search engine.
///
/// The loader is responsible for:
/// - Creating the ingest pipeline and the index when they are missing
/// - Issuing exactly one index request per row, strictly in order
/// - Applying the row failure policy
///
/// There is no batching and no retry. A run that stops part-way leaves the
/// rows indexed so far in place and records no progress marker.
pub struct JokeLoader {
    client: Arc<dyn SearchEngineClient>,
    policy: RowFailurePolicy,
}

impl JokeLoader {
    /// Create a new loader that aborts on the first failing row.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            client,
            policy: RowFailurePolicy::default(),
        }
    }

    /// Create a new loader with the given row failure policy.
    pub fn with_policy(client: Arc<dyn SearchEngineClient>, policy: RowFailurePolicy) -> Self {
        Self { client, policy }
    }

    /// Ensure the ingest pipeline and then the index exist.
    ///
    /// The pipeline goes first because the index names it as its default
    /// pipeline. Any failure is fatal for the run.
    #[instrument(skip(self))]
    pub async fn ensure_setup(&self) -> Result<(), IngestError> {
        let pipeline = self.client.ensure_pipeline_exists().await.map_err(|e| {
            error!(error = %e, "Error handling pipeline");
            IngestError::SetupError(e)
        })?;

        let index = self.client.ensure_index_exists().await.map_err(|e| {
            error!(error = %e, "Error creating index");
            IngestError::SetupError(e)
        })?;

        info!(
            pipeline_created = pipeline == SetupOutcome::Created,
            index_created = index == SetupOutcome::Created,
            "OpenSearch initialization completed successfully"
        );
        Ok(())
    }

    /// Set up the engine and index every row.
    ///
    /// # Returns
    ///
    /// * `Ok(IngestSummary)` - The run completed, possibly with failed rows
    /// * `Err(IngestError::SetupError)` - If pipeline or index setup failed
    pub async fn run<I>(&self, rows: I) -> Result<IngestSummary, IngestError>
    where
        I: IntoIterator<Item = Result<JokeDocument, IngestError>>,
    {
        self.ensure_setup().await?;
        Ok(self.index_rows(rows).await)
    }

    /// Index every row, assuming setup has already run.
    ///
    /// Rows are indexed one at a time; each request is awaited before the
    /// next row is pulled from `rows`.
    pub async fn index_rows<I>(&self, rows: I) -> IngestSummary
    where
        I: IntoIterator<Item = Result<JokeDocument, IngestError>>,
    {
        let mut summary = IngestSummary::default();

        for row in rows {
            summary.rows_read += 1;
            let row_number = summary.rows_read;

            let result = match row {
                Ok(doc) => self
                    .client
                    .index_document(&doc)
                    .await
                    .map_err(|source| IngestError::RowError {
                        row: row_number,
                        source,
                    }),
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => {
                    summary.indexed += 1;
                    debug!(row = row_number, "Indexed joke");
                }
                Err(e) => {
                    summary.failed += 1;
                    error!(row = row_number, error = %e, "Error indexing jokes");

                    if self.policy == RowFailurePolicy::Abort {
                        warn!(row = row_number, "Stopping ingest after failed row");
                        summary.aborted = true;
                        break;
                    }
                }
            }
        }

        info!(
            rows_read = summary.rows_read,
            indexed = summary.indexed,
            failed = summary.failed,
            aborted = summary.aborted,
            "Finished indexing jokes"
        );

        summary
    }
}
