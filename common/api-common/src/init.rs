//! Server initialization utilities
//!
//! Provides standardized tracing setup for the service binaries.

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line (for log aggregation)
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` in the environment always selects JSON output
    fn resolve(self) -> Self {
        let env_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if env_json {
            LogFormat::Json
        } else {
            self
        }
    }
}

/// Map a `-v` count to a level directive
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing/logging
///
/// Logs go to stderr so that commands printing JSON on stdout stay pipeable.
/// `RUST_LOG` directives are honoured; on top of those `crate_name` is set to
/// `info`, `debug` or `trace` depending on `verbosity`.
///
/// # Example
///
/// ```rust,ignore
/// api_common::init_tracing("hostmetrics", LogFormat::Text, 0)?;
/// ```
pub fn init_tracing(crate_name: &str, format: LogFormat, verbosity: u8) -> anyhow::Result<()> {
    let directive = format!("{}={}", crate_name, level_for(verbosity));
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    match format.resolve() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}
