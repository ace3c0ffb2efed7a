//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing the OpenSearch client to be swapped for a mock in tests.

use async_trait::async_trait;

use crate::errors::SearchError;
use joke_search_shared::{JokeDocument, JokeHit, SearchQuery};

/// Result of an ensure-exists operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The resource was missing and has been created.
    Created,
    /// The resource was already present; nothing was sent.
    AlreadyExists,
}

/// Abstract interface for search engine operations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so one client can be shared by
/// the ingestion run and by concurrent request handlers.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>` for consistent error handling.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Run a similarity query against the joke index.
    ///
    /// Hits are returned in engine order, at most `query.size` of them.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let hits = client.search(&SearchQuery::new("atoms")).await?;
    /// for hit in hits {
    ///     println!("{:.2} {}", hit.score, hit.joke);
    /// }
    /// ```
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JokeHit>, SearchError>;

    /// Index a single document. The engine assigns the document id.
    async fn index_document(&self, document: &JokeDocument) -> Result<(), SearchError>;

    /// Ensure the embedding ingest pipeline exists, creating it if it doesn't.
    ///
    /// # Returns
    ///
    /// * `Ok(SetupOutcome::Created)` - The pipeline was missing and was created
    /// * `Ok(SetupOutcome::AlreadyExists)` - The pipeline was already present
    /// * `Err(SearchError::PipelineCreationError)` - If the check or creation fails
    async fn ensure_pipeline_exists(&self) -> Result<SetupOutcome, SearchError>;

    /// Ensure the joke index exists with its vector mapping, creating it if
    /// it doesn't.
    ///
    /// The pipeline must exist first since the index names it as its
    /// default pipeline.
    ///
    /// # Returns
    ///
    /// * `Ok(SetupOutcome::Created)` - The index was missing and was created
    /// * `Ok(SetupOutcome::AlreadyExists)` - The index was already present
    /// * `Err(SearchError::IndexCreationError)` - If the check or creation fails
    async fn ensure_index_exists(&self) -> Result<SetupOutcome, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster status is green or yellow
    /// * `Ok(false)` - If the cluster status is red
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
