use std::io::IsTerminal;

use anyhow::Result;
use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{LogFormat, LoggingConfig, SettingsConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// CLI level wins over the config level; format always comes from config.
pub fn resolve_logging_config(settings: Option<&SettingsConfig>, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let configured = settings
        .and_then(|s| s.logging.clone())
        .unwrap_or_default();

    match arg_log_level {
        Some(level) => LoggingConfig::new(level.as_str().to_owned(), configured.format),
        None => configured,
    }
}

pub fn run(settings: Option<&SettingsConfig>, arg_log_level: Option<LogLevel>) -> Result<()> {
    init_logging(&resolve_logging_config(settings, arg_log_level));
    Ok(())
}

/// Color only compact output that lands on a terminal.
fn ansi_enabled(format: LogFormat, stderr_is_terminal: bool) -> bool {
    format == LogFormat::Compact && stderr_is_terminal
}

/// Initialize tracing with the desired config.
///
/// Logs go to stderr; stdout is reserved for the token.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let ansi = ansi_enabled(cfg.format, std::io::stderr().is_terminal());

    // Base layer: filter + writer
    let registry = tracing_subscriber::registry().with(env_filter);

    // Choose format layer
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_writer(std::io::stderr)
                .with_ansi(ansi);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(std::io::stderr)
                .with_ansi(ansi);

            let _ = registry.with(layer).try_init();
        }
    };
}
