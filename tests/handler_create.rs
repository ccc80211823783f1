mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_create_tinyurl_success() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/tinyurl")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json,
        json!({
            "longUrl": "https://example.com/a",
            "shortUrl": "http://localhost:9090/c",
            "message": "success",
            "httpStatusCode": 200
        })
    );
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_same_url_twice_gets_distinct_codes() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let first = server
        .post("/tinyurl")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/tinyurl")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["shortUrl"], "http://localhost:9090/c");
    assert_eq!(second["shortUrl"], "http://localhost:9090/d");
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn test_create_ignores_extra_fields() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/tinyurl")
        .json(&json!({
            "longUrl": "https://example.com/a",
            "shortUrl": "http://elsewhere/zzz",
            "message": "ignored",
            "httpStatusCode": 418
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortUrl"], "http://localhost:9090/c");
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/tinyurl")
        .json(&json!({ "longUrl": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json,
        json!({
            "longUrl": "not a url",
            "message": "Supplied longUrl (not a url) is not a valid URL. Ensure it has valid Scheme, Authority, Path, Query, Fragment.",
            "httpStatusCode": 400
        })
    );
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_unsupported_scheme() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/tinyurl")
        .json(&json!({ "longUrl": "javascript:alert(1)" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_missing_long_url() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/tinyurl").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert!(json.get("longUrl").is_none());
    assert_eq!(json["httpStatusCode"], 400);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Supplied longUrl (null)")
    );
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_malformed_body() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/tinyurl")
        .add_header("Content-Type", "application/json")
        .bytes("{\"longUrl\": ".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["httpStatusCode"], 400);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_malformed_body_logs_entry() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    server
        .post("/tinyurl")
        .add_header("Content-Type", "application/json")
        .add_header("X-Correlation-Id", "trace-789")
        .bytes("{\"longUrl\": ".into())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let output = logs.contents();
    assert!(output.contains("Create request received"));
    assert!(output.contains("Unreadable request body"));
    assert!(output.contains("trace-789"));
}

#[tokio::test]
async fn test_create_store_failure_quotes_correlation_id() {
    let server = common::create_test_server(common::create_failing_state());

    let response = server
        .post("/tinyurl")
        .add_header("X-Correlation-Id", "trace-123")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["longUrl"], "https://example.com/a");
    assert_eq!(json["httpStatusCode"], 500);
    assert_eq!(
        json["message"],
        "An unexpected error occurred. If problem persists, please contact support. Provide correlation id: trace-123"
    );
}

#[tokio::test]
async fn test_create_generates_correlation_id_when_absent() {
    let server = common::create_test_server(common::create_failing_state());

    let response = server
        .post("/tinyurl")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    let message = json["message"].as_str().unwrap();
    let id = message
        .rsplit("Provide correlation id: ")
        .next()
        .unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_create_panicking_store_is_contained() {
    let server = common::create_test_server(common::create_panicking_state());

    let response = server
        .post("/tinyurl")
        .add_header("X-Correlation-Id", "boom-1")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert!(json["message"].as_str().unwrap().ends_with("boom-1"));

    // The server keeps answering after the panic.
    let response = server.get("/health").await;
    response.assert_status_ok();
}
