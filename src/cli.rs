//! Command-line arguments shared by both check programs.

use crate::config::{CheckTarget, Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Smoke checks for the market indices backend and quote provider.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "INDICES_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the indices backend
    #[arg(long, env = "API_BASE_URL")]
    pub base_url: Option<String>,

    /// Base URL of the chart quote provider
    #[arg(long, env = "QUOTE_PROVIDER_URL")]
    pub provider_url: Option<String>,

    /// Per-request timeout in seconds, for both services
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Builds the effective configuration: defaults, then the file, then flags.
    ///
    /// Only the sections `target` reads are validated.
    ///
    /// # Errors
    /// Returns error if the file cannot be loaded or the result is invalid.
    pub fn resolve(&self, target: CheckTarget) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(url) = &self.base_url {
            config.backend.base_url = url.clone();
        }
        if let Some(url) = &self.provider_url {
            config.provider.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.backend.timeout_secs = secs;
            config.provider.timeout_secs = secs;
        }
        config.strict |= self.strict;

        config.validate_for(target)?;
        Ok(config)
    }
}

/// Process exit status for a finished run.
///
/// Failed checks only change the status in strict mode.
#[must_use]
pub fn exit_status(strict: bool, all_passed: bool) -> ExitCode {
    if strict && !all_passed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
