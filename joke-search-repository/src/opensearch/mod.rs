//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
mod index_config;
mod pipeline_config;
mod queries;

pub use client::OpenSearchClient;
pub use index_config::{get_index_settings, EMBEDDING_FIELD, JOKE_FIELD};
pub use pipeline_config::get_pipeline_body;
pub use queries::{build_search_query, parse_hits};
