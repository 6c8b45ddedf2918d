//! Console rendering of check outcomes.
//!
//! The reporter never decides a verdict on its own: it renders what the
//! check routines returned and hands back the boolean each section stands for.

use crate::checks::{IndicesCheck, QuoteCheck, QuoteOutcome};
use crate::error::CheckError;
use crate::validate::SchemaError;
use indices_client::MarketStatus;
use std::io::{self, Write};


const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 50;

/// Writes human-readable check reports to `W`.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    // ========================================================================
    // Backend checks
    // ========================================================================

    /// Opening lines of the backend run.
    pub fn run_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "🚀 Starting Market Indices API Tests")?;
        writeln!(self.out, "{}", "=".repeat(WIDE_RULE))
    }

    /// Banner printed before the indices request.
    pub fn indices_banner(&mut self, url: &str, test_time: &str) -> io::Result<()> {
        writeln!(self.out, "🧪 Testing Market Indices API")?;
        writeln!(self.out, "{}", "=".repeat(NARROW_RULE))?;
        writeln!(self.out, "API Endpoint: {}", url)?;
        writeln!(self.out, "Test Time: {}", test_time)?;
        writeln!(self.out)?;
        writeln!(self.out, "📡 Making API request...")
    }

    /// Renders the indices check. Returns whether it passed.
    ///
    /// The status line and headers are echoed for every response that
    /// arrived, before any verdict.
    pub fn indices_result(&mut self, base_url: &str, check: &IndicesCheck) -> io::Result<bool> {
        if let Some(head) = &check.head {
            writeln!(self.out, "Status Code: {}", head.status)?;
            writeln!(self.out, "Response Headers: {}", fmt_headers(&head.headers))?;
            writeln!(self.out)?;
        }

        match &check.result {
            Ok(outcome) => {
                self.echo_body(&outcome.body)?;
                writeln!(self.out, "✅ All required fields present")?;
                writeln!(self.out, "✅ All data types are correct")?;

                for range in &outcome.validated.range_checks {
                    let value = fmt_number(range.value);
                    if range.is_reasonable() {
                        writeln!(
                            self.out,
                            "✅ {} price ({}) looks reasonable",
                            range.label, value
                        )?;
                    } else {
                        writeln!(self.out, "⚠️  {} price ({}) seems unusual", range.label, value)?;
                    }
                }

                let changes = &outcome.validated.quote.changes;
                if !changes.is_empty() {
                    if let Some(line) =
                        fmt_change(changes.nifty_change, changes.nifty_change_percent)
                    {
                        writeln!(self.out, "📈 Nifty change: {}", line)?;
                    }
                    if let Some(line) =
                        fmt_change(changes.banknifty_change, changes.banknifty_change_percent)
                    {
                        writeln!(self.out, "📈 Bank Nifty change: {}", line)?;
                    }
                }

                writeln!(self.out)?;
                writeln!(self.out, "🎉 API test completed successfully!")?;
            }
            Err(CheckError::Schema { source, body }) => {
                self.echo_body(body)?;
                // Key presence is checked before types.
                if matches!(source, SchemaError::WrongType { .. }) {
                    writeln!(self.out, "✅ All required fields present")?;
                }
                writeln!(self.out, "❌ {}", source)?;
            }
            Err(CheckError::Connection(_)) => {
                writeln!(self.out, "❌ Connection failed - is the backend server running?")?;
                writeln!(
                    self.out,
                    "   Make sure to start the backend application at {}",
                    base_url
                )?;
            }
            Err(CheckError::Timeout) => {
                writeln!(self.out, "❌ Request timed out")?;
            }
            Err(CheckError::HttpStatus { status, body }) => {
                writeln!(self.out, "❌ API request failed with status {}", status)?;
                writeln!(self.out, "Response: {}", body)?;
            }
            Err(err @ (CheckError::Parse(_) | CheckError::Unexpected(_))) => {
                writeln!(self.out, "❌ Unexpected error: {}", err)?;
            }
        }

        Ok(check.is_success())
    }

    fn echo_body(&mut self, body: &serde_json::Value) -> io::Result<()> {
        writeln!(self.out, "✅ API Response:")?;
        let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        writeln!(self.out, "{}", pretty)?;
        writeln!(self.out)
    }

    /// Banner printed before the market status request.
    pub fn market_status_banner(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "🧪 Testing Market Status API")?;
        writeln!(self.out, "{}", "=".repeat(NARROW_RULE))?;
        writeln!(self.out, "API Endpoint: {}", url)?;
        writeln!(self.out)
    }

    /// Renders the market status check. Returns whether it passed.
    pub fn market_status_result(
        &mut self,
        result: &Result<MarketStatus, CheckError>,
    ) -> io::Result<bool> {
        match result {
            Ok(status) => {
                writeln!(self.out, "✅ Market Status: {}", status)?;
                Ok(true)
            }
            Err(CheckError::HttpStatus { status, .. }) => {
                writeln!(self.out, "❌ Market status API failed with status {}", status)?;
                Ok(false)
            }
            Err(err) => {
                writeln!(self.out, "❌ Market status API error: {}", err)?;
                Ok(false)
            }
        }
    }

    /// Final summary of the backend run. Returns whether every check passed.
    pub fn summary(
        &mut self,
        base_url: &str,
        indices_ok: bool,
        status_ok: bool,
    ) -> io::Result<bool> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(WIDE_RULE))?;
        writeln!(self.out, "📊 Test Results Summary:")?;
        writeln!(self.out, "Market Indices API: {}", verdict(indices_ok))?;
        writeln!(self.out, "Market Status API: {}", verdict(status_ok))?;

        let all_ok = indices_ok && status_ok;
        if all_ok {
            writeln!(self.out)?;
            writeln!(self.out, "🎉 All tests passed! The API is working correctly.")?;
            writeln!(self.out)?;
            writeln!(self.out, "💡 Next steps:")?;
            writeln!(self.out, "   1. Start the frontend application")?;
            writeln!(self.out, "   2. Verify that Nifty and Bank Nifty prices are displayed")?;
            writeln!(self.out, "   3. Check that market status shows correctly")?;
        } else {
            writeln!(self.out)?;
            writeln!(self.out, "❌ Some tests failed. Please check the backend server.")?;
            writeln!(self.out)?;
            writeln!(self.out, "🔧 Troubleshooting:")?;
            writeln!(self.out, "   1. Make sure the backend application is running")?;
            writeln!(self.out, "   2. Check that {} is reachable and not blocked", base_url)?;
            writeln!(self.out, "   3. Verify the API endpoints are accessible")?;
        }
        Ok(all_ok)
    }

    // ========================================================================
    // Provider checks
    // ========================================================================

    /// Opening line of the provider run.
    pub fn quotes_header(&mut self, provider_url: &str) -> io::Result<()> {
        writeln!(self.out, "Testing quote provider {} for index quotes...", provider_url)
    }

    /// Renders one provider check. Returns whether usable prices came back.
    pub fn quote_result(&mut self, check: &QuoteCheck, url: &str) -> io::Result<bool> {
        let name = &check.symbol.name;
        writeln!(self.out)?;
        writeln!(self.out, "Testing {} ({})...", name, check.symbol.symbol)?;
        writeln!(self.out, "URL: {}", url)?;

        match &check.result {
            Ok(QuoteOutcome::Prices {
                regular_market_price,
                previous_close,
                currency,
                change,
                change_percent,
            }) => {
                let suffix = currency.as_deref().map(|c| format!(" {}", c)).unwrap_or_default();
                writeln!(
                    self.out,
                    "✅ {} - Regular Market Price: {}{}",
                    name,
                    fmt_opt(*regular_market_price),
                    suffix
                )?;
                writeln!(
                    self.out,
                    "✅ {} - Previous Close: {}{}",
                    name,
                    fmt_opt(*previous_close),
                    suffix
                )?;
                if let Some(line) = fmt_change(*change, *change_percent) {
                    writeln!(self.out, "📈 {} - Change: {}", name, line)?;
                }
            }
            Ok(QuoteOutcome::NoData) => writeln!(self.out, "❌ {} - No result data", name)?,
            Err(CheckError::HttpStatus { status, .. }) => {
                writeln!(self.out, "❌ {} - HTTP {}", name, status)?;
            }
            Err(err) => writeln!(self.out, "❌ {} - Error: {}", name, err)?,
        }

        Ok(check.is_success())
    }

    /// Closing line of the provider run. Returns whether every quote succeeded.
    pub fn quotes_summary(&mut self, checks: &[QuoteCheck]) -> io::Result<bool> {
        let passed = checks.iter().filter(|c| c.is_success()).count();
        writeln!(self.out)?;
        writeln!(self.out, "📊 {}/{} quotes retrieved", passed, checks.len())?;
        Ok(passed == checks.len())
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok { "✅ PASS" } else { "❌ FAIL" }
}

fn fmt_number(value: f64) -> String {
    format!("{}", value)
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(fmt_number).unwrap_or_else(|| "n/a".to_string())
}

fn fmt_change(change: Option<f64>, percent: Option<f64>) -> Option<String> {
    match (change, percent) {
        (Some(c), Some(p)) => Some(format!("{:+.2} ({:+.2}%)", c, p)),
        (Some(c), None) => Some(format!("{:+.2}", c)),
        (None, Some(p)) => Some(format!("{:+.2}%", p)),
        (None, None) => None,
    }
}

fn fmt_headers(headers: &[(String, String)]) -> String {
    let pairs: Vec<String> = headers
        .iter()
        .map(|(k, v)| format!("'{}': '{}'", k, v))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
