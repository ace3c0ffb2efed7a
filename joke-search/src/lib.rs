//! # Joke Search
//!
//! Entry points and configuration for the joke search binaries.
//!
//! This crate wires the OpenSearch client into the CSV ingest (`ingest`
//! binary) and into the HTTP server (`server` binary).

pub mod config;
pub mod telemetry;

pub use config::{Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur during startup or execution of a binary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] joke_search_ingest::IngestError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] joke_search_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
