//! Ingest pipeline definition.

use serde_json::{json, Value};

use super::index_config::{EMBEDDING_FIELD, JOKE_FIELD};

/// Get the body of the embedding ingest pipeline.
///
/// A single `text_embedding` processor reads the joke text and writes the
/// model output into the embedding field.
pub fn get_pipeline_body(model_id: &str) -> Value {
    json!({
        "description": "An NLP ingest pipeline",
        "processors": [
            {
                "text_embedding": {
                    "model_id": model_id,
                    "field_map": {
                        (JOKE_FIELD): EMBEDDING_FIELD
                    }
                }
            }
        ]
    })
}
