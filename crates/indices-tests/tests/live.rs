//! Checks against a running backend.
//!
//! Ignored by default; run with `cargo test -p indices-tests -- --ignored`.

use indices_check::checks::{check_indices, check_market_status};
use indices_check::config::RangeConfig;
use indices_tests::create_test_client;

#[tokio::test]
#[ignore = "requires a running backend at API_BASE_URL"]
async fn test_live_indices() {
    let client = create_test_client().expect("Failed to create client");

    let outcome = check_indices(&client, &RangeConfig::default())
        .await
        .result
        .expect("Indices check failed");

    assert!(outcome.validated.quote.nifty > 0.0);
    assert!(outcome.validated.quote.banknifty > 0.0);
    assert!(!outcome.validated.quote.last_updated.is_empty());
}

#[tokio::test]
#[ignore = "requires a running backend at API_BASE_URL"]
async fn test_live_market_status() {
    let client = create_test_client().expect("Failed to create client");

    check_market_status(&client)
        .await
        .expect("Market status check failed");
}
