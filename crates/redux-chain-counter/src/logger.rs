//! Logging setup using simplelog
//!
//! Logs always go to stderr. With `log_to_file = true` they are also written
//! to a timestamped file in the cache directory (~/.cache/redux-chain/ on Linux).

use anyhow::Context;
use redux_chain_config::AppConfig;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path in the cache directory
fn log_file_path() -> anyhow::Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    Ok(redux_chain_config::cache_dir()?.join(format!("debug-{}.log", timestamp)))
}

/// Map a level name to a filter, defaulting to Info for anything unrecognised
fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logging
///
/// RUST_LOG wins over the configured level. Returns the log file path when
/// file logging is enabled.
pub fn init(config: &AppConfig) -> anyhow::Result<Option<PathBuf>> {
    let level = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or_else(|_| parse_level(&config.log_level));

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));

    let log_file = if config.log_to_file {
        let path = log_file_path()?;
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(level, log_config, file));
        Some(path)
    } else {
        None
    };

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    Ok(log_file)
}
