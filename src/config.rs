//! Configuration module for loading and parsing TOML configuration files.

use indices_client::{ClientConfig, DEFAULT_USER_AGENT, ProviderConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// The service a run talks to.
///
/// Each program validates only the sections its target reads, so a bad
/// provider URL never blocks a backend run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTarget {
    /// The local indices backend (`backend` and `ranges`).
    Backend,
    /// The chart provider (`provider`).
    Provider,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local backend configuration.
    pub backend: BackendConfig,
    /// Chart provider configuration.
    pub provider: ProviderSection,
    /// Plausible price ranges for the soft range check.
    pub ranges: RangeConfig,
    /// Exit non-zero when any hard check fails.
    pub strict: bool,
}

/// Local backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    /// Builds the client configuration for the backend.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Chart provider configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Base URL of the provider.
    pub base_url: String,
    /// `User-Agent` header sent to the provider.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Instruments to check, in this order.
    pub symbols: Vec<SymbolConfig>,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            symbols: vec![
                SymbolConfig::new("NIFTY", "^NSEI"),
                SymbolConfig::new("BANKNIFTY", "^NSEBANK"),
            ],
        }
    }
}

impl ProviderSection {
    /// Builds the client configuration for the provider.
    #[must_use]
    pub fn client_config(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// A named instrument and its provider symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolConfig {
    /// Display name (e.g., "NIFTY").
    pub name: String,
    /// Provider symbol (e.g., "^NSEI").
    pub symbol: String,
}

impl SymbolConfig {
    /// Creates a symbol entry.
    #[must_use]
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

/// Inclusive plausibility range for a price.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceRange {
    /// Lowest plausible value.
    pub min: f64,
    /// Highest plausible value.
    pub max: f64,
}

impl PriceRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Plausible ranges for the soft range check.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Broad-market index range.
    pub nifty: PriceRange,
    /// Banking index range.
    pub banknifty: PriceRange,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            nifty: PriceRange::new(10_000.0, 50_000.0),
            banknifty: PriceRange::new(20_000.0, 100_000.0),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// Values are checked later, per run, with [`Config::validate_for`].
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for(CheckTarget::Backend)?;
        self.validate_for(CheckTarget::Provider)
    }

    /// Validates only the sections `target` reads.
    ///
    /// # Errors
    /// Returns the first invalid value found.
    pub fn validate_for(&self, target: CheckTarget) -> Result<(), ConfigError> {
        match target {
            CheckTarget::Backend => self.validate_backend(),
            CheckTarget::Provider => self.validate_provider(),
        }
    }

    fn validate_backend(&self) -> Result<(), ConfigError> {
        validate_url("backend.base_url", &self.backend.base_url)?;

        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "backend.timeout_secs must be positive".to_string(),
            ));
        }

        for (label, range) in [
            ("ranges.nifty", self.ranges.nifty),
            ("ranges.banknifty", self.ranges.banknifty),
        ] {
            // NaN bounds fail too
            if !(range.min <= range.max) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} min must not exceed max",
                    label
                )));
            }
        }

        Ok(())
    }

    fn validate_provider(&self) -> Result<(), ConfigError> {
        validate_url("provider.base_url", &self.provider.base_url)?;

        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "provider.timeout_secs must be positive".to_string(),
            ));
        }
        if self.provider.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "provider.user_agent cannot be empty".to_string(),
            ));
        }
        if self.provider.symbols.is_empty() {
            return Err(ConfigError::InvalidValue(
                "at least one provider symbol must be configured".to_string(),
            ));
        }

        for entry in &self.provider.symbols {
            if entry.name.is_empty() || entry.symbol.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "symbol name and code cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_url(label: &str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidValue(format!("{} is not a valid URL: {}", label, e)))
}
