//! Market status endpoint tests.

use axum::Router;
use axum::http::StatusCode;
use indices_check::checks::check_market_status;
use indices_check::error::CheckErrorKind;
use indices_check::report::Reporter;
use indices_client::IndicesClient;
use indices_tests::{MockServer, respond, respond_json, unreachable_url};
use serde_json::json;
use std::time::Duration;

const PATH: &str = "/api/indices/market-status";

async fn status_server(router: Router) -> (MockServer, IndicesClient) {
    let server = MockServer::start(router).await;
    let client = server.indices_client(Duration::from_secs(5));
    (server, client)
}

#[tokio::test]
async fn test_scenario_d_market_open() {
    let router = Router::new().route(PATH, respond_json(json!(true)));
    let (_server, client) = status_server(router).await;

    let status = check_market_status(&client).await.expect("Status check failed");
    assert!(status.open);

    let mut report = Reporter::new(Vec::new());
    let ok = report.market_status_result(&Ok(status)).unwrap();
    let text = String::from_utf8(report.into_inner()).unwrap();
    assert!(ok);
    assert!(text.contains("Market Status: OPEN"));
}

#[tokio::test]
async fn test_market_closed_is_a_pass() {
    let router = Router::new().route(PATH, respond_json(json!(false)));
    let (_server, client) = status_server(router).await;

    let status = check_market_status(&client).await.expect("Status check failed");
    assert!(!status.open);
    assert_eq!(status.to_string(), "CLOSED");
}

#[tokio::test]
async fn test_non_boolean_body_fails() {
    let (_server, client) =
        status_server(Router::new().route(PATH, respond_json(json!({"open": true})))).await;

    let err = check_market_status(&client).await.unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::Parse);
}

#[tokio::test]
async fn test_server_error_fails() {
    let (_server, client) = status_server(
        Router::new().route(PATH, respond(StatusCode::INTERNAL_SERVER_ERROR, "oops")),
    )
    .await;

    let result = check_market_status(&client).await;
    assert_eq!(result.as_ref().unwrap_err().kind(), CheckErrorKind::HttpStatus);

    let mut report = Reporter::new(Vec::new());
    let ok = report.market_status_result(&result).unwrap();
    let text = String::from_utf8(report.into_inner()).unwrap();
    assert!(!ok);
    assert!(text.contains("❌ Market status API failed with status 500"));
}

#[tokio::test]
async fn test_unreachable_backend_fails() {
    let client = IndicesClient::with_base_url(&unreachable_url()).unwrap();

    let err = check_market_status(&client).await.unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::Connection);
}
