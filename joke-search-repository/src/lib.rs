//! # Joke Search Repository
//!
//! This crate provides the trait for talking to the remote search engine and
//! a concrete implementation for OpenSearch. The engine owns the index, the
//! embedding pipeline and the vector scoring; this crate only configures them
//! and issues requests.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use config::OpenSearchConfig;
pub use errors::SearchError;
pub use interfaces::{SearchEngineClient, SetupOutcome};
pub use opensearch::OpenSearchClient;
