//! Static files of the search page.

use std::io::ErrorKind;
use std::path::Path;

use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::AppState;

const INDEX_FILE: &str = "index.html";

/// `GET /`: the search page.
pub async fn index(State(state): State<AppState>) -> Response {
    serve_file(&state.static_dir, INDEX_FILE).await
}

/// `GET /:asset`: any other file directly inside the static directory.
pub async fn asset(State(state): State<AppState>, UrlPath(name): UrlPath<String>) -> Response {
    if !is_safe_name(&name) {
        debug!(name = %name, "Rejected asset name");
        return StatusCode::NOT_FOUND.into_response();
    }
    serve_file(&state.static_dir, &name).await
}

async fn serve_file(dir: &Path, name: &str) -> Response {
    let path = dir.join(name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(name))], bytes).into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read static file");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Only plain file names are served: no separators, no parent or hidden entries.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(&['/', '\\'][..])
}

fn content_type(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_name() {
        assert!(is_safe_name("script.js"));
        assert!(is_safe_name("index.html"));
        assert!(!is_safe_name(""));
        assert!(!is_safe_name(".."));
        assert!(!is_safe_name(".env"));
        assert!(!is_safe_name("../Cargo.toml"));
        assert!(!is_safe_name("..\\Cargo.toml"));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("script.js"), "text/javascript; charset=utf-8");
        assert_eq!(content_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type("README"), "application/octet-stream");
    }
}
