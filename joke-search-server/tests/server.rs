use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use joke_search_repository::{SearchEngineClient, SearchError, SetupOutcome};
use joke_search_server::{router, AppState};
use joke_search_shared::{JokeDocument, JokeHit, SearchQuery};
use serde_json::{json, Value};

/// In-memory stand-in for the engine: case-insensitive substring match,
/// scored by how much of the joke the query covers.
struct SubstringSearchClient {
    jokes: Vec<String>,
    fail: bool,
}

#[async_trait]
impl SearchEngineClient for SubstringSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JokeHit>, SearchError> {
        if self.fail {
            return Err(SearchError::connection("connection refused"));
        }
        let needle = query.text.to_lowercase();
        let mut hits: Vec<JokeHit> = self
            .jokes
            .iter()
            .filter(|j| j.to_lowercase().contains(&needle))
            .map(|j| JokeHit::new(j.clone(), needle.len() as f64 / j.len() as f64))
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(query.size);
        Ok(hits)
    }

    async fn index_document(&self, _doc: &JokeDocument) -> Result<(), SearchError> {
        Ok(())
    }

    async fn ensure_pipeline_exists(&self) -> Result<SetupOutcome, SearchError> {
        Ok(SetupOutcome::AlreadyExists)
    }

    async fn ensure_index_exists(&self) -> Result<SetupOutcome, SearchError> {
        Ok(SetupOutcome::AlreadyExists)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        Ok(!self.fail)
    }
}

async fn spawn_server(client: SubstringSearchClient) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(Arc::new(client)));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn many_atom_jokes() -> Vec<String> {
    let mut jokes = vec![
        "Why don't scientists trust atoms? Because they make up everything.".to_string(),
        "I told my wife she was drawing her eyebrows too high. She looked surprised.".to_string(),
    ];
    for i in 0..8 {
        jokes.push(format!("Atoms joke number {}", i));
    }
    jokes
}

#[tokio::test]
async fn search_returns_at_most_five_ranked_hits() {
    let addr = spawn_server(SubstringSearchClient {
        jokes: many_atom_jokes(),
        fail: false,
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/search", addr))
        .json(&json!({ "searchText": "atoms" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let hits: Vec<Value> = response.json().await.unwrap();

    assert_eq!(hits.len(), 5);
    for hit in &hits {
        assert!(hit["joke"].is_string());
        assert!(hit["score"].is_number());
    }
    let scores: Vec<f64> = hits.iter().map(|h| h["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn search_finds_ingested_joke() {
    let addr = spawn_server(SubstringSearchClient {
        jokes: many_atom_jokes(),
        fail: false,
    })
    .await;

    let hits: Vec<JokeHit> = reqwest::Client::new()
        .post(format!("http://{}/api/search", addr))
        .json(&json!({ "searchText": "trust atoms" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].joke,
        "Why don't scientists trust atoms? Because they make up everything."
    );
    assert!(hits[0].score > 0.0);
}

#[tokio::test]
async fn engine_failure_yields_fixed_error() {
    let addr = spawn_server(SubstringSearchClient {
        jokes: Vec::new(),
        fail: true,
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/search", addr))
        .json(&json!({ "searchText": "Why did the chicken cross the road?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Search failed" }));
}

#[tokio::test]
async fn malformed_body_yields_fixed_error() {
    let addr = spawn_server(SubstringSearchClient {
        jokes: many_atom_jokes(),
        fail: false,
    })
    .await;
    let client = reqwest::Client::new();

    for body in ["{}", "not json", r#"{"searchText": 42}"#] {
        let response = client
            .post(format!("http://{}/api/search", addr))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Search failed" }));
    }
}

#[tokio::test]
async fn serves_search_page_and_script() {
    let addr = spawn_server(SubstringSearchClient {
        jokes: Vec::new(),
        fail: false,
    })
    .await;
    let client = reqwest::Client::new();

    let page = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(page.status(), 200);
    assert!(page.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(page.text().await.unwrap().contains("searchInput"));

    let script = client
        .get(format!("http://{}/script.js", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(script.status(), 200);
    assert!(script.text().await.unwrap().contains("escapeHtml"));

    let missing = client
        .get(format!("http://{}/missing.css", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

/// Read the `HTML_ESCAPES` table out of the served script.
fn escape_table(script: &str) -> Vec<(char, String)> {
    let start = script.find("const HTML_ESCAPES = {").unwrap();
    let end = start + script[start..].find("};").unwrap();

    script[start..end]
        .lines()
        .skip(1)
        .filter_map(|line| {
            let (key, value) = line.trim().trim_end_matches(',').split_once(": ")?;
            // Keys and values are quoted string literals.
            let key = key.get(1..key.len() - 1)?;
            let value = value.get(1..value.len() - 1)?;
            Some((key.chars().next()?, value.to_string()))
        })
        .collect()
}

#[tokio::test]
async fn served_script_escapes_markup_and_ignores_blank_input() {
    let addr = spawn_server(SubstringSearchClient {
        jokes: Vec::new(),
        fail: false,
    })
    .await;

    let script = reqwest::get(format!("http://{}/script.js", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let table = escape_table(&script);
    let escaped: String = r#"<script>alert("x" & 'y')</script>"#
        .chars()
        .map(|c| match table.iter().find(|(k, _)| *k == c) {
            Some((_, entity)) => entity.clone(),
            None => c.to_string(),
        })
        .collect();
    assert_eq!(
        escaped,
        "&lt;script&gt;alert(&quot;x&quot; &amp; &#039;y&#039;)&lt;/script&gt;"
    );
    assert!(script.contains(r#"replace(/[&<>"']/g"#));

    // Blank input returns before any request is made.
    let guard = script.find("if (!searchText.trim())").unwrap();
    let fetch = script.find("fetch('/api/search'").unwrap();
    assert!(guard < fetch);
    assert!(script[guard..fetch].contains("return;"));
}
