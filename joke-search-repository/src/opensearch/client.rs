//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cert::CertificateValidation,
    cluster::ClusterHealthParts,
    http::{
        response::Response,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        StatusCode,
    },
    indices::{IndicesCreateParts, IndicesExistsParts},
    ingest::{IngestGetPipelineParts, IngestPutPipelineParts},
    IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::OpenSearchConfig;
use crate::errors::SearchError;
use crate::interfaces::{SearchEngineClient, SetupOutcome};
use crate::opensearch::index_config::get_index_settings;
use crate::opensearch::pipeline_config::get_pipeline_body;
use crate::opensearch::queries::{build_search_query, parse_hits};
use joke_search_shared::{JokeDocument, JokeHit, SearchQuery};

/// OpenSearch client implementation.
///
/// Talks to a single node with HTTP basic auth. Certificate validation is
/// disabled so the client works against the self-signed certificate of a
/// local cluster.
///
/// # Example
///
/// ```ignore
/// let config = OpenSearchConfig::new("https://localhost:9200", "admin", "admin");
/// let client = OpenSearchClient::new(config)?;
///
/// client.ensure_pipeline_exists().await?;
/// client.ensure_index_exists().await?;
/// client.index_document(&JokeDocument::new("I used to hate facial hair, but then it grew on me.")).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    config: OpenSearchConfig,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client from the given configuration.
    ///
    /// No request is sent; use `health_check` to verify the cluster is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL is invalid or transport setup fails
    pub fn new(config: OpenSearchConfig) -> Result<Self, SearchError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::Basic(
                config.username.clone(),
                config.password.clone(),
            ))
            .cert_validation(CertificateValidation::None)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            index = %config.index_name,
            pipeline = %config.pipeline_id,
            "Created OpenSearch client"
        );

        Ok(Self { client, config })
    }

    /// Read the body of a failed response for logging and error messages.
    async fn failure_message(response: Response, action: &str) -> String {
        let status = response.status_code();
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "{} request failed", action);
        format!("{} failed with status {}: {}", action, status, body)
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self, query), fields(size = query.size))]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JokeHit>, SearchError> {
        let body = build_search_query(query, &self.config.model_id);

        let response = self
            .client
            .search(SearchParts::Index(&[self.config.index_name.as_str()]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchError::query(
                Self::failure_message(response, "Search").await,
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let hits = parse_hits(&body)?;
        debug!(hits = hits.len(), "Search completed");
        Ok(hits)
    }

    #[instrument(skip(self, document), fields(index = %self.config.index_name))]
    async fn index_document(&self, document: &JokeDocument) -> Result<(), SearchError> {
        let response = self
            .client
            .index(IndexParts::Index(&self.config.index_name))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::index(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchError::index(
                Self::failure_message(response, "Index").await,
            ));
        }

        debug!("Document indexed");
        Ok(())
    }

    #[instrument(skip(self), fields(pipeline = %self.config.pipeline_id))]
    async fn ensure_pipeline_exists(&self) -> Result<SetupOutcome, SearchError> {
        let response = self
            .client
            .ingest()
            .get_pipeline(IngestGetPipelineParts::Id(&self.config.pipeline_id))
            .send()
            .await
            .map_err(|e| SearchError::pipeline_creation(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            info!("Pipeline already exists");
            return Ok(SetupOutcome::AlreadyExists);
        }
        if status != StatusCode::NOT_FOUND {
            return Err(SearchError::pipeline_creation(
                Self::failure_message(response, "Pipeline lookup").await,
            ));
        }

        let response = self
            .client
            .ingest()
            .put_pipeline(IngestPutPipelineParts::Id(&self.config.pipeline_id))
            .body(get_pipeline_body(&self.config.model_id))
            .send()
            .await
            .map_err(|e| SearchError::pipeline_creation(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchError::pipeline_creation(
                Self::failure_message(response, "Pipeline creation").await,
            ));
        }

        info!("Pipeline created successfully");
        Ok(SetupOutcome::Created)
    }

    #[instrument(skip(self), fields(index = %self.config.index_name))]
    async fn ensure_index_exists(&self) -> Result<SetupOutcome, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.config.index_name.as_str()]))
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            info!("Index already exists");
            return Ok(SetupOutcome::AlreadyExists);
        }
        if status != StatusCode::NOT_FOUND {
            return Err(SearchError::index_creation(
                Self::failure_message(response, "Index lookup").await,
            ));
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.config.index_name))
            .body(get_index_settings(
                &self.config.pipeline_id,
                self.config.embedding_dimension,
            ))
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchError::index_creation(
                Self::failure_message(response, "Index creation").await,
            ));
        }

        info!("Index created successfully");
        Ok(SetupOutcome::Created)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Err(SearchError::connection(
                Self::failure_message(response, "Health check").await,
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let status = body.get("status").and_then(|s| s.as_str()).unwrap_or("red");
        debug!(status = %status, "Cluster health");
        Ok(status == "green" || status == "yellow")
    }
}
