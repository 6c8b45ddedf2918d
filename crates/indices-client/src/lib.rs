//! HTTP client library for the market indices backend.
//!
//! This crate provides typed clients for the two services the smoke checks
//! talk to: the local indices backend (index prices and market status) and
//! the third-party chart provider used as a price cross-check.
//!
//! # Example
//!
//! ```no_run
//! use indices_client::{ClientConfig, IndicesClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), indices_client::Error> {
//!     let client = IndicesClient::new(ClientConfig {
//!         base_url: "http://localhost:8082".into(),
//!         timeout: Duration::from_secs(10),
//!     })?;
//!
//!     let status = client.market_status().await?;
//!     println!("Market Status: {}", status);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::{ClientConfig, IndicesClient, IndicesResponse};
pub use error::Error;
pub use provider::{DEFAULT_USER_AGENT, ProviderConfig, QuoteProviderClient};
pub use types::*;
