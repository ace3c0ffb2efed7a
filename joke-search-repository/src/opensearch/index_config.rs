//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the joke index.

use serde_json::{json, Value};

/// Field holding the joke text.
pub const JOKE_FIELD: &str = "joke";

/// Field holding the vector computed by the ingest pipeline.
pub const EMBEDDING_FIELD: &str = "joke-embedding";

/// Get the index settings and mappings for the joke index.
///
/// The configuration includes:
/// - **index.knn**: Enables the k-NN plugin for the index
/// - **default_pipeline**: Every indexed document runs through the embedding pipeline
/// - **knn_vector**: The embedding field with L2 distance
pub fn get_index_settings(pipeline_id: &str, embedding_dimension: u32) -> Value {
    json!({
        "settings": {
            "index.knn": true,
            "default_pipeline": pipeline_id
        },
        "mappings": {
            "properties": {
                "id": {
                    "type": "text"
                },
                (EMBEDDING_FIELD): {
                    "type": "knn_vector",
                    "dimension": embedding_dimension,
                    "space_type": "l2"
                },
                (JOKE_FIELD): {
                    "type": "text"
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_settings_structure() {
        let settings = get_index_settings("dad-joke-pipeline", 768);

        assert_eq!(settings["settings"]["index.knn"], true);
        assert_eq!(settings["settings"]["default_pipeline"], "dad-joke-pipeline");

        let properties = &settings["mappings"]["properties"];
        assert_eq!(properties["id"]["type"], "text");
        assert_eq!(properties["joke"]["type"], "text");
        assert_eq!(properties["joke-embedding"]["type"], "knn_vector");
        assert_eq!(properties["joke-embedding"]["dimension"], 768);
        assert_eq!(properties["joke-embedding"]["space_type"], "l2");
    }

    #[test]
    fn test_index_settings_follow_arguments() {
        let settings = get_index_settings("other-pipeline", 384);

        assert_eq!(settings["settings"]["default_pipeline"], "other-pipeline");
        assert_eq!(
            settings["mappings"]["properties"]["joke-embedding"]["dimension"],
            384
        );
    }
}
