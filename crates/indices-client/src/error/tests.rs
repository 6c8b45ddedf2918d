//! Unit tests for error module.

use super::*;

#[test]
fn test_http_status_error_display() {
    let error = Error::HttpStatus {
        status: 503,
        body: "Service Unavailable".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("Service Unavailable"));
}

#[test]
fn test_connection_error_display() {
    let error = Error::Connection("tcp connect error".to_string());

    let display = format!("{}", error);
    assert!(display.contains("Connection failed"));
    assert!(display.contains("tcp connect error"));
}

#[test]
fn test_timeout_error_display() {
    assert_eq!(format!("{}", Error::Timeout), "Request timed out");
}

#[test]
fn test_parse_error_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = serde_err.into();

    assert!(matches!(error, Error::Parse(_)));
    assert!(format!("{}", error).starts_with("JSON error"));
}

#[test]
fn test_invalid_url_from_parse_error() {
    let parse_err = url::Url::parse("not a url").unwrap_err();
    let error: Error = parse_err.into();

    assert!(matches!(error, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_connect_failure_is_classified() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = reqwest::get(format!("http://{}/", addr)).await.unwrap_err();
    let error: Error = err.into();

    assert!(matches!(error, Error::Connection(_)));
}

#[test]
fn test_error_debug() {
    let error = Error::HttpStatus {
        status: 500,
        body: "Internal server error".to_string(),
    };

    let debug = format!("{:?}", error);
    assert!(debug.contains("HttpStatus"));
    assert!(debug.contains("500"));
}
