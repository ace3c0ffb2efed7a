//! Settings read from the environment.

use std::env;
use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::AppError;
use joke_search_repository::config::{
    DEFAULT_INDEX_NAME, DEFAULT_MODEL_ID, DEFAULT_PIPELINE_ID, DEFAULT_URL,
};
use joke_search_repository::OpenSearchConfig;
use joke_search_server::DEFAULT_STATIC_DIR;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Validated application settings.
///
/// # Environment Variables
///
/// - `OPENSEARCH_URL`: Cluster URL (default: https://localhost:9200)
/// - `OPENSEARCH_USERNAME`: Basic auth user (required)
/// - `OPENSEARCH_PASSWORD`: Basic auth password (required)
/// - `OPENSEARCH_INDEX`: Joke index name (default: dadjokes)
/// - `OPENSEARCH_PIPELINE`: Ingest pipeline id (default: dad-joke-pipeline)
/// - `OPENSEARCH_MODEL_ID`: Embedding model id (default: aRoRN5cBnmOZFWB0spsS)
/// - `PORT`: HTTP listen port (default: 3000)
/// - `STATIC_DIR`: Directory of the search page (default: bundled `public/`)
#[derive(Debug, Clone)]
pub struct Settings {
    pub opensearch: OpenSearchConfig,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(AppError::config(format!("Invalid .env file: {}", e))),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = var("OPENSEARCH_URL").unwrap_or_else(|| DEFAULT_URL.to_string());
        let parsed = Url::parse(&url)
            .map_err(|e| AppError::config(format!("Invalid OPENSEARCH_URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "Invalid OPENSEARCH_URL '{}': scheme must be http or https",
                url
            )));
        }

        let username = var("OPENSEARCH_USERNAME")
            .ok_or_else(|| AppError::config("OPENSEARCH_USERNAME is not set"))?;
        let password = var("OPENSEARCH_PASSWORD")
            .ok_or_else(|| AppError::config("OPENSEARCH_PASSWORD is not set"))?;

        let index_name =
            var("OPENSEARCH_INDEX").unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());
        let pipeline_id =
            var("OPENSEARCH_PIPELINE").unwrap_or_else(|| DEFAULT_PIPELINE_ID.to_string());
        let model_id =
            var("OPENSEARCH_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let opensearch = OpenSearchConfig::new(url, username, password)
            .with_index_name(index_name)
            .with_pipeline_id(pipeline_id)
            .with_model_id(model_id);

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let static_dir = var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            opensearch,
            port,
            static_dir,
        })
    }
}
