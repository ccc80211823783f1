mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = common::create_test_server(common::create_failing_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert!(json["checks"]["store"]["message"].is_string());
}
