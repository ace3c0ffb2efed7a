//! Dependency initialization and wiring for the joke search binaries.

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::AppError;
use joke_search_ingest::{IngestSummary, JokeCsvReader, JokeLoader, RowFailurePolicy};
use joke_search_repository::{OpenSearchClient, SearchEngineClient};
use joke_search_server::AppState;

/// Container for all initialized dependencies.
///
/// One search client is built here and shared by whatever the binary runs.
pub struct Dependencies {
    /// Settings the dependencies were built from.
    pub settings: Settings,
    /// The search engine client.
    pub search_client: Arc<dyn SearchEngineClient>,
}

impl Dependencies {
    /// Initialize all dependencies from validated settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the OpenSearch client can't be created
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        info!(
            opensearch_url = %settings.opensearch.url,
            index = %settings.opensearch.index_name,
            port = settings.port,
            "Initializing dependencies"
        );

        let search_client = OpenSearchClient::new(settings.opensearch.clone()).map_err(|e| {
            AppError::config(format!("Failed to create OpenSearch client: {}", e))
        })?;

        Ok(Self::with_client(settings, Arc::new(search_client)))
    }

    /// Wire the given client instead of building one.
    pub fn with_client(settings: Settings, search_client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            settings,
            search_client,
        }
    }

    /// Verify the cluster is reachable and not red.
    pub async fn verify_connection(&self) -> Result<(), AppError> {
        let healthy = self.search_client.health_check().await?;

        if !healthy {
            return Err(AppError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");
        Ok(())
    }

    /// Build the CSV loader.
    pub fn loader(&self, policy: RowFailurePolicy) -> JokeLoader {
        JokeLoader::with_policy(self.search_client.clone(), policy)
    }

    /// Set up the engine, then index every row of the CSV file at `csv`.
    ///
    /// # Returns
    ///
    /// * `Ok(IngestSummary)` - The run completed, possibly with failed rows
    /// * `Err(AppError)` - If setup failed, the file can't be opened or it
    ///   has no `joke` column
    pub async fn ingest(
        &self,
        csv: &Path,
        policy: RowFailurePolicy,
    ) -> Result<IngestSummary, AppError> {
        let loader = self.loader(policy);

        // Pipeline and index must exist before the first row is read.
        loader.ensure_setup().await?;

        info!(path = %csv.display(), policy = %policy, "Indexing jokes");
        let reader = JokeCsvReader::from_path(csv)?;

        Ok(loader.index_rows(reader).await)
    }

    /// Build the state of the HTTP server.
    pub fn app_state(&self) -> AppState {
        AppState::new(self.search_client.clone()).with_static_dir(self.settings.static_dir.clone())
    }
}
