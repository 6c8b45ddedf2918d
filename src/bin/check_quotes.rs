//! Chart provider quote checks.
//!
//! Queries the provider for every configured index symbol, in order.

use clap::Parser;
use indices_check::checks::check_quotes;
use indices_check::cli::{Cli, exit_status};
use indices_check::config::CheckTarget;
use indices_check::logging::init_tracing;
use indices_check::report::Reporter;
use indices_client::QuoteProviderClient;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.resolve(CheckTarget::Provider)?;
    let client = QuoteProviderClient::new(config.provider.client_config())?;
    info!(
        provider = %config.provider.base_url,
        symbols = config.provider.symbols.len(),
        "checking quote provider"
    );

    let mut report = Reporter::new(std::io::stdout().lock());
    report.quotes_header(&config.provider.base_url)?;

    let checks = check_quotes(&client, &config.provider.symbols).await;
    for check in &checks {
        report.quote_result(check, &client.chart_url(&check.symbol.symbol))?;
    }

    let all_ok = report.quotes_summary(&checks)?;
    report.into_inner().flush()?;

    Ok(exit_status(config.strict, all_ok))
}
