//! Connection and resource configuration for the OpenSearch client.

/// Default OpenSearch URL.
pub const DEFAULT_URL: &str = "https://localhost:9200";

/// Default name of the joke index.
pub const DEFAULT_INDEX_NAME: &str = "dadjokes";

/// Default id of the embedding ingest pipeline.
pub const DEFAULT_PIPELINE_ID: &str = "dad-joke-pipeline";

/// Default id of the embedding model deployed on the cluster.
pub const DEFAULT_MODEL_ID: &str = "aRoRN5cBnmOZFWB0spsS";

/// Dimension of the vectors produced by the default model.
pub const DEFAULT_EMBEDDING_DIMENSION: u32 = 768;

/// Configuration for the OpenSearchClient.
///
/// The same model id must be used at ingestion and query time, otherwise
/// query embeddings are not comparable with the stored ones.
#[derive(Debug, Clone)]
pub struct OpenSearchConfig {
    /// Cluster URL (e.g., "https://localhost:9200").
    pub url: String,
    /// Basic auth user name.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// Index holding the joke documents.
    pub index_name: String,
    /// Ingest pipeline computing the embeddings.
    pub pipeline_id: String,
    /// Model used by the pipeline and by neural queries.
    pub model_id: String,
    /// Dimension of the `knn_vector` field.
    pub embedding_dimension: u32,
}

impl OpenSearchConfig {
    /// Create a config for the given cluster and credentials with default
    /// resource names.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            pipeline_id: DEFAULT_PIPELINE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
        }
    }

    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    pub fn with_pipeline_id(mut self, pipeline_id: impl Into<String>) -> Self {
        self.pipeline_id = pipeline_id.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_embedding_dimension(mut self, dimension: u32) -> Self {
        self.embedding_dimension = dimension;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenSearchConfig::new(DEFAULT_URL, "admin", "secret");

        assert_eq!(config.url, "https://localhost:9200");
        assert_eq!(config.index_name, "dadjokes");
        assert_eq!(config.pipeline_id, "dad-joke-pipeline");
        assert_eq!(config.model_id, "aRoRN5cBnmOZFWB0spsS");
        assert_eq!(config.embedding_dimension, 768);
    }

    #[test]
    fn test_overrides() {
        let config = OpenSearchConfig::new(DEFAULT_URL, "admin", "secret")
            .with_index_name("jokes-v2")
            .with_pipeline_id("jokes-pipeline")
            .with_model_id("model-123")
            .with_embedding_dimension(384);

        assert_eq!(config.index_name, "jokes-v2");
        assert_eq!(config.pipeline_id, "jokes-pipeline");
        assert_eq!(config.model_id, "model-123");
        assert_eq!(config.embedding_dimension, 384);
    }
}
