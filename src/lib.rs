//! # Market Indices Smoke Checks
//!
//! Client-side verification of the market indices backend and of the
//! third-party chart provider it sources prices from. Each check issues a
//! single timed GET, validates the response, and reports PASS/FAIL on the
//! console.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration with built-in defaults |
//! | [`validate`] | Required-field, type and soft range checks on the indices payload |
//! | [`checks`] | Check routines returning tagged results |
//! | [`report`] | Console rendering of outcomes and summaries |
//! | [`error`] | Check error taxonomy |
//! | [`cli`] | Command-line arguments and exit status |
//!
//! ## Checks
//!
//! | Program | Method | Endpoint |
//! |---------|--------|----------|
//! | `check-indices` | GET | `{base_url}/api/indices` |
//! | `check-indices` | GET | `{base_url}/api/indices/market-status` |
//! | `check-quotes` | GET | `{provider_url}/v8/finance/chart/{symbol}` |
//!
//! ## Example Usage
//!
//! ```bash
//! # Local backend on the default port
//! cargo run --bin check-indices
//!
//! # Another backend, failing the process when a check fails
//! API_BASE_URL=http://127.0.0.1:9000 cargo run --bin check-indices -- --strict
//!
//! # Provider quotes for the configured symbols
//! cargo run --bin check-quotes
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod validate;
