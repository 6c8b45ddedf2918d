//! Index quote endpoint tests.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use indices_check::checks::check_indices;
use indices_check::config::RangeConfig;
use indices_check::error::{CheckError, CheckErrorKind};
use indices_check::report::Reporter;
use indices_check::validate::SchemaError;
use indices_client::IndicesClient;
use indices_tests::{MockServer, respond, respond_json, unreachable_url};
use serde_json::json;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

async fn backend(body: serde_json::Value) -> MockServer {
    MockServer::start(Router::new().route("/api/indices", respond_json(body))).await
}

async fn rendered(client: &IndicesClient) -> (bool, String) {
    let check = check_indices(client, &RangeConfig::default()).await;
    let mut report = Reporter::new(Vec::new());
    let ok = report
        .indices_result(client.base_url(), &check)
        .expect("Failed to render");
    (ok, String::from_utf8(report.into_inner()).expect("utf-8"))
}

#[tokio::test]
async fn test_scenario_a_valid_payload_passes() {
    let server = backend(json!({
        "nifty": 19500,
        "banknifty": 44000,
        "marketOpen": true,
        "lastUpdated": "2024-01-01T10:00:00"
    }))
    .await;
    let client = server.indices_client(TIMEOUT);

    let check = check_indices(&client, &RangeConfig::default()).await;
    let head = check.head.expect("Response expected");
    assert_eq!(head.status, 200);
    assert!(
        head.headers
            .iter()
            .any(|(k, v)| k == "content-type" && v == "application/json")
    );
    let outcome = check.result.expect("Indices check failed");
    assert_eq!(outcome.validated.warnings().count(), 0);

    let (ok, text) = rendered(&client).await;
    assert!(ok);
    assert!(text.contains("✅ All required fields present"));
    assert!(text.contains("✅ All data types are correct"));
    assert!(text.contains("✅ Nifty price (19500) looks reasonable"));
    assert!(text.contains("✅ Bank Nifty price (44000) looks reasonable"));
}

#[tokio::test]
async fn test_scenario_b_missing_last_updated_fails() {
    let server = backend(json!({"nifty": 19500, "banknifty": 44000, "marketOpen": true})).await;
    let client = server.indices_client(TIMEOUT);

    let check = check_indices(&client, &RangeConfig::default()).await;
    assert_eq!(check.head.as_ref().map(|h| h.status), Some(200));
    match &check.result {
        Err(CheckError::Schema { source, .. }) => assert_eq!(
            source,
            &SchemaError::MissingFields(vec!["lastUpdated".to_string()])
        ),
        other => panic!("unexpected result: {:?}", other),
    }

    let (ok, text) = rendered(&client).await;
    assert!(!ok);
    assert!(text.starts_with("Status Code: 200\nResponse Headers: {"));
    assert!(text.contains("'content-type': 'application/json'"));
    assert!(text.contains("Missing required fields: ['lastUpdated']"));
}

#[tokio::test]
async fn test_scenario_c_unreachable_backend() {
    let client = IndicesClient::with_base_url(&unreachable_url()).expect("Failed to create client");

    let err = check_indices(&client, &RangeConfig::default())
        .await
        .result
        .unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::Connection);

    let (ok, text) = rendered(&client).await;
    assert!(!ok);
    assert!(text.contains("is the backend server running?"));
    assert!(text.contains("Make sure to start the backend application"));
}

#[tokio::test]
async fn test_out_of_range_prices_still_pass() {
    let server = backend(json!({
        "nifty": 123456.78,
        "banknifty": 1,
        "marketOpen": false,
        "lastUpdated": "2024-01-01T10:00:00"
    }))
    .await;
    let client = server.indices_client(TIMEOUT);

    let (ok, text) = rendered(&client).await;
    assert!(ok);
    assert!(text.contains("⚠️  Nifty price (123456.78) seems unusual"));
    assert!(text.contains("⚠️  Bank Nifty price (1) seems unusual"));
}

#[tokio::test]
async fn test_string_price_fails() {
    let server = backend(json!({
        "nifty": "19500",
        "banknifty": 44000,
        "marketOpen": true,
        "lastUpdated": "2024-01-01T10:00:00"
    }))
    .await;
    let client = server.indices_client(TIMEOUT);

    let (ok, text) = rendered(&client).await;
    assert!(!ok);
    assert!(text.contains("❌ Nifty price should be a number"));
}

#[tokio::test]
async fn test_non_boolean_market_open_fails() {
    let server = backend(json!({
        "nifty": 19500,
        "banknifty": 44000,
        "marketOpen": "true",
        "lastUpdated": "2024-01-01T10:00:00"
    }))
    .await;
    let client = server.indices_client(TIMEOUT);

    let (ok, text) = rendered(&client).await;
    assert!(!ok);
    assert!(text.contains("❌ Market open status should be a boolean"));
}

#[tokio::test]
async fn test_non_200_reports_status_and_body() {
    let server = MockServer::start(Router::new().route(
        "/api/indices",
        respond(StatusCode::SERVICE_UNAVAILABLE, "{\"error\":\"feed down\"}"),
    ))
    .await;
    let client = server.indices_client(TIMEOUT);

    let err = check_indices(&client, &RangeConfig::default())
        .await
        .result
        .unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::HttpStatus);

    let (ok, text) = rendered(&client).await;
    assert!(!ok);
    assert!(text.contains("Status Code: 503"));
    assert!(text.contains("Response Headers: {"));
    assert!(text.contains("❌ API request failed with status 503"));
    assert!(text.contains("Response: {\"error\":\"feed down\"}"));
}

#[tokio::test]
async fn test_malformed_json_is_unexpected_error() {
    let server = MockServer::start(
        Router::new().route("/api/indices", respond(StatusCode::OK, "<html>oops</html>")),
    )
    .await;
    let client = server.indices_client(TIMEOUT);

    let err = check_indices(&client, &RangeConfig::default())
        .await
        .result
        .unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::Parse);

    let (ok, text) = rendered(&client).await;
    assert!(!ok);
    assert!(text.contains("Status Code: 200"));
    assert!(text.contains("Response Headers: {"));
    assert!(text.contains("❌ Unexpected error:"));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start(Router::new().route(
        "/api/indices",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "{}"
        }),
    ))
    .await;
    let client = server.indices_client(Duration::from_millis(200));

    let err = check_indices(&client, &RangeConfig::default())
        .await
        .result
        .unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::Timeout);
}

#[tokio::test]
async fn test_repeated_runs_give_same_verdict() {
    let server = backend(json!({
        "nifty": 19500,
        "banknifty": 44000,
        "marketOpen": true,
        "lastUpdated": "2024-01-01T10:00:00"
    }))
    .await;
    let client = server.indices_client(TIMEOUT);

    let (first, _) = rendered(&client).await;
    let (second, _) = rendered(&client).await;
    assert_eq!(first, second);
    assert!(first);
}
