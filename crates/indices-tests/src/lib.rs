//! Integration test support for the market indices smoke checks.
//!
//! Most tests run against a [`MockServer`] bound to an ephemeral local port.
//! The `live` tests need a running backend; configure it via the
//! `API_BASE_URL` environment variable (default: `http://localhost:8082`)
//! and run them with `cargo test -- --ignored`.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::{MethodRouter, get};
use indices_client::{ClientConfig, IndicesClient, ProviderConfig, QuoteProviderClient};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8082".to_string())
}

/// Creates a client for the live backend.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<IndicesClient, indices_client::Error> {
    IndicesClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}

/// An HTTP server on `127.0.0.1` serving canned routes, stopped on drop.
pub struct MockServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Binds an ephemeral port and serves `router` in the background.
    ///
    /// # Panics
    /// Panics if the listener cannot be bound.
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, handle }
    }

    /// Base URL of the server, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Backend client pointed at this server.
    ///
    /// # Panics
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn indices_client(&self, timeout: Duration) -> IndicesClient {
        IndicesClient::new(ClientConfig {
            base_url: self.base_url(),
            timeout,
        })
        .expect("Failed to create client")
    }

    /// Provider client pointed at this server.
    ///
    /// # Panics
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn provider_client(&self, timeout: Duration) -> QuoteProviderClient {
        QuoteProviderClient::new(ProviderConfig {
            base_url: self.base_url(),
            timeout,
            ..Default::default()
        })
        .expect("Failed to create provider client")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A GET route answering with a fixed status and JSON body.
pub fn respond(status: StatusCode, body: impl Into<String>) -> MethodRouter {
    let body = body.into();
    get(move || {
        let body = body.clone();
        async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
    })
}

/// A GET route answering 200 with a JSON body.
pub fn respond_json(body: serde_json::Value) -> MethodRouter {
    respond(StatusCode::OK, body.to_string())
}

/// Base URL on which nothing is listening.
///
/// # Panics
/// Panics if no ephemeral port can be bound.
#[must_use]
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}", addr)
}
