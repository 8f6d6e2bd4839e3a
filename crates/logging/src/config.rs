//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{
    fmt::{
        self,
        format::{Format, Json, JsonFields},
    },
    prelude::*,
    EnvFilter,
    Registry,
};

/// JSON layer writing to the daily rolling log file
type FileLayer<S> = fmt::Layer<S, JsonFields, Format<Json>, RollingFileAppender>;

/// Logging configuration structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,

    /// Output format (json, pretty, compact)
    pub format: String,

    /// Optional log file path, written as JSON whatever the console format
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      default_format(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// `RUST_LOG`, `HNTB_LOG_FORMAT` and `HNTB_LOG_FILE` win over the
    /// arguments; `HNTB_ENV` sets the environment label.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level:       std::env::var("RUST_LOG")
                .ok()
                .unwrap_or_else(|| level.to_string()),
            format:      std::env::var("HNTB_LOG_FORMAT")
                .ok()
                .unwrap_or_else(|| format.to_string()),
            log_file:    std::env::var("HNTB_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("HNTB_ENV").unwrap_or_else(|_| default_environment()),
        }
    }

    /// Build the tracing subscriber from this configuration.
    ///
    /// Console output goes to stderr; stdout is reserved for command output.
    ///
    /// `level` accepts full filter directives (`info,sqlx=warn`); anything
    /// unparseable falls back to `info`.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let level = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));

        match self.format.as_str() {
            "pretty" => self.build_pretty_subscriber(level),
            "compact" => self.build_compact_subscriber(level),
            _ => self.build_json_subscriber(level),
        }
    }

    /// Daily rolling JSON file layer, when a log file is configured.
    fn file_layer<S>(&self) -> Option<FileLayer<S>> {
        let path = Path::new(self.log_file.as_deref()?);
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "hntb.log".to_string());

        // Blocking writer, flushed per event.
        let file_appender = rolling::daily(directory, file_name);
        Some(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(file_appender),
        )
    }

    /// Build a JSON subscriber for production logging.
    fn build_json_subscriber(&self, level: EnvFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let console_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(
            Registry::default()
                .with(level)
                .with(console_layer)
                .with(self.file_layer()),
        )
    }

    /// Build a pretty subscriber for development logging.
    fn build_pretty_subscriber(&self, level: EnvFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let console_layer = fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(
            Registry::default()
                .with(level)
                .with(console_layer)
                .with(self.file_layer()),
        )
    }

    /// Build a compact subscriber for testing.
    fn build_compact_subscriber(&self, level: EnvFilter) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let console_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(
            Registry::default()
                .with(level)
                .with(console_layer)
                .with(self.file_layer()),
        )
    }
}
