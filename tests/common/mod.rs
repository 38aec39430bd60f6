// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use sharing_debugger::{
    debugger::{SharingDebugger, DEFAULT_FETCH_TIMEOUT},
    handlers,
    state::AppState,
};

pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Fish &amp; Chips</title>
<meta property="og:title" content="Fish &amp; Chips" />
<link rel="canonical" href="https://example.com/fish?a=1&amp;b=2">
</head>
<body><h1>Fish &amp; Chips</h1></body>
</html>"#;

pub fn test_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn test_debugger() -> SharingDebugger {
    SharingDebugger::new(DEFAULT_FETCH_TIMEOUT).expect("Failed to build HTTP client")
}

/// Build the application router the way `main` does, minus metrics.
pub fn create_test_app() -> Router {
    let state = AppState {
        debugger: test_debugger(),
    };
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::page::index))
        .route("/api/debug", get(handlers::debug::debug_json))
        .fallback_service(ServeDir::new(test_static_dir()))
        .with_state(state)
}

// ── Upstream site ────────────────────────────────────────────────────────────

/// A small site for the debugger to scrape.
fn upstream_router() -> Router {
    Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route(
            "/plain",
            get(|| async { Html("<html><body><p>no head here</p></body></html>") }),
        )
        .route(
            "/entities",
            get(|| async {
                Html(
                    "<html><HEAD>\n<meta property=\"og:description\" content=\"It&#8217;s &quot;here&quot;\">\n</head></html>",
                )
            }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "gone").into_response() }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response() }),
        )
        .route(
            "/ordered",
            get(|| async {
                Html(concat!(
                    "<html><head>",
                    r#"<meta property="og:url" content="https://example.com/">"#,
                    r#"<meta property="og:type" content="website">"#,
                    r#"<meta property="og:title" content="T">"#,
                    "</head></html>",
                ))
            }),
        )
        .route("/moved", get(|| async { Redirect::permanent("/article") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Html("late")
            }),
        )
}

/// Serve the upstream site on an ephemeral port and return its address.
pub async fn spawn_upstream() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream_router()).await.unwrap();
    });
    addr
}

/// A bare TCP server that answers every request with `HTTP/1.1 {status_line}`
/// and an empty body, for responses a framework would not produce.
pub async fn spawn_raw_upstream(status_line: &'static str) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind raw upstream listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// `/path?q=<url>` with the URL percent-encoded.
pub fn with_query(path: &str, url: &str) -> String {
    format!("{path}?q={}", urlencoding::encode(url))
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = get_raw(app, uri).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let (status, content_type, bytes) = get_raw(app, uri).await;
    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get_raw(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, bytes.to_vec())
}
