//! Load cycle against a real HTTP server (local Axum listener).
//!
//! Covered:
//! - cache-busting `cache=<millis>` query on both documents
//! - config 404 / malformed → no repo path, feed still loads
//! - feed 500 → error propagates, state keeps previous snapshot

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use idea_dashboard::loader::{load_feed, load_site_config, load_snapshot};
use idea_dashboard::source::HttpSource;
use idea_dashboard::{AppState, ServiceConfig};

#[derive(Clone, Default)]
struct Fake {
    docs: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    seen: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl Fake {
    fn put(&self, name: &str, status: StatusCode, body: &str) {
        self.docs
            .lock()
            .unwrap()
            .insert(name.to_string(), (status, body.to_string()));
    }
}

async fn serve_doc(
    State(fake): State<Fake>,
    Path(name): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    fake.seen
        .lock()
        .unwrap()
        .push((name.clone(), q.get("cache").cloned()));
    match fake.docs.lock().unwrap().get(&name).cloned() {
        Some((status, body)) => (status, body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Spawn the fake site; returns its base URL.
async fn spawn(fake: Fake) -> String {
    let app = Router::new()
        .route("/site/{name}", get(serve_doc))
        .with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/site/")
}

const FEED: &str = r#"{"generated_at":"2025-06-01","ideas":[{"title":"A","category":"x"},{"title":"B"}]}"#;

#[tokio::test]
async fn both_documents_are_cache_busted() {
    let fake = Fake::default();
    fake.put("ideas.json", StatusCode::OK, FEED);
    fake.put("config.json", StatusCode::OK, r#"{"repo_path":"o/r"}"#);
    let base = spawn(fake.clone()).await;
    let src = HttpSource::new(&base, Duration::from_secs(5));

    let snap = load_snapshot(&src, load_site_config(&src).await).await.expect("load over http");
    assert_eq!(snap.feed.ideas.len(), 2);
    assert_eq!(snap.categories, vec!["x", "generic"]);
    assert_eq!(snap.site.repo_path.as_deref(), Some("o/r"));

    let seen = fake.seen.lock().unwrap().clone();
    let names: Vec<&str> = seen.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["config.json", "ideas.json"], "config is fetched first");
    for (name, cache) in &seen {
        let cache = cache.as_deref().unwrap_or_else(|| panic!("{name} without cache param"));
        assert!(cache.parse::<i64>().is_ok(), "cache param must be millis, got {cache}");
    }
}

#[tokio::test]
async fn config_failures_degrade_silently() {
    let fake = Fake::default();
    fake.put("ideas.json", StatusCode::OK, FEED);
    let base = spawn(fake.clone()).await;
    let src = HttpSource::new(&base, Duration::from_secs(5));

    // 404
    assert_eq!(load_site_config(&src).await.repo_path, None);
    // malformed
    fake.put("config.json", StatusCode::OK, "<html>oops</html>");
    assert_eq!(load_site_config(&src).await.repo_path, None);
    // feed still loads
    assert!(load_snapshot(&src, load_site_config(&src).await).await.is_ok());
}

#[tokio::test]
async fn feed_server_error_propagates() {
    let fake = Fake::default();
    fake.put("ideas.json", StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let base = spawn(fake.clone()).await;
    let src = HttpSource::new(&base, Duration::from_secs(5));

    let err = load_feed(&src).await.unwrap_err();
    assert!(format!("{err:#}").contains("ideas.json"));
}

#[tokio::test]
async fn state_reload_over_http_keeps_last_good_feed() {
    let fake = Fake::default();
    fake.put("ideas.json", StatusCode::OK, FEED);
    let base = spawn(fake.clone()).await;

    let settings = ServiceConfig {
        feed_base: base,
        ..ServiceConfig::default()
    };
    let state = AppState::from_settings(settings);
    state.reload().await.unwrap();

    fake.put("ideas.json", StatusCode::SERVICE_UNAVAILABLE, "down");
    assert!(state.reload().await.is_err());
    assert_eq!(state.snapshot().unwrap().feed.ideas.len(), 2);
    assert!(state.last_error().is_some());
}
