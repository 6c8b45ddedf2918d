//! Market indices backend checks.
//!
//! Verifies the index quote and market status endpoints of the local backend.

use chrono::Local;
use clap::Parser;
use indices_check::checks::{check_indices, check_market_status};
use indices_check::cli::{Cli, exit_status};
use indices_check::config::CheckTarget;
use indices_check::logging::init_tracing;
use indices_check::report::Reporter;
use indices_client::IndicesClient;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.resolve(CheckTarget::Backend)?;
    let client = IndicesClient::new(config.backend.client_config())?;
    info!(base_url = client.base_url(), "checking indices backend");

    let mut report = Reporter::new(std::io::stdout().lock());

    report.run_header()?;
    let test_time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    report.indices_banner(&client.indices_url(), &test_time)?;

    let indices = check_indices(&client, &config.ranges).await;
    let indices_ok = report.indices_result(client.base_url(), &indices)?;

    report.market_status_banner(&client.market_status_url())?;
    let status = check_market_status(&client).await;
    let status_ok = report.market_status_result(&status)?;

    let all_ok = report.summary(client.base_url(), indices_ok, status_ok)?;
    report.into_inner().flush()?;

    Ok(exit_status(config.strict, all_ok))
}
