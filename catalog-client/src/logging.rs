//! Logging Bootstrap
//!
//! Configures `tracing-subscriber` for hosts that want the client's
//! diagnostics on stdout without wiring their own subscriber: pretty for
//! development, JSON or compact for production pipelines. Hosts with an
//! existing subscriber should skip this module entirely; the client only
//! ever emits through `tracing`.

use crate::error::{CatalogError, Result};
use std::io;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level for the catalog crates
    pub level: tracing::Level,
    /// Custom filter string (e.g., "catalog_client=debug")
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: tracing::Level::INFO,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set minimum log level
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// Set custom filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Initialize the logging system
///
/// Call once during application startup; a second call returns an error.
///
/// # Example
///
/// ```ignore
/// use catalog_client::logging::{init_logging, LoggingConfig};
///
/// init_logging(LoggingConfig::default())?;
/// tracing::info!("catalog client ready");
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stdout),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(io::stdout),
            )
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stdout),
            )
            .try_init(),
    }
    .map_err(|e| CatalogError::Config(format!("Failed to initialize logging: {}", e)))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let base_level = config.level.to_string().to_lowercase();

    let filter_string = if let Some(custom_filter) = &config.filter {
        custom_filter.clone()
    } else {
        // Our crates at the configured level, noisy HTTP internals at warn
        format!(
            "catalog_client={0},catalog_bridge={0},bridge_reqwest={0},\
             h2=warn,hyper=warn,reqwest=warn",
            base_level
        )
    };

    EnvFilter::try_new(filter_string)
        .map_err(|e| CatalogError::Config(format!("Invalid log filter: {}", e)))
}
