//! Integration tests for the Dinegate server.
//!
//! These tests require a running `dinegate-server` at `localhost:3000`
//! started with static AWS credentials (any syntactically valid pair; URLs
//! are signed locally, never sent). They are marked `#[ignore]` so they
//! don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! AWS_ACCESS_KEY_ID=test AWS_SECRET_ACCESS_KEY=test cargo run -p dinegate-server &
//! cargo test -p dinegate-integration -- --ignored
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
#[must_use]
pub fn endpoint_url() -> String {
    std::env::var("DINEGATE_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Absolute URL for `path` on the server under test.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{}{path}", endpoint_url())
}

/// HTTP client for talking to the server.
#[must_use]
pub fn http_client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// A fresh object key for a test.
#[must_use]
pub fn test_file_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}.png")
}

/// Send a request and decode the JSON envelope.
pub async fn send_json(request: reqwest::RequestBuilder) -> (reqwest::StatusCode, serde_json::Value) {
    let resp = request.send().await.expect("request should reach the server");
    let status = resp.status();
    let body = resp.json().await.expect("response should be JSON");
    (status, body)
}

mod test_admin;
mod test_health;
mod test_presign;
