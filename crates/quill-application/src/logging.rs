//! Tracing subscriber setup.

use std::path::Path;

use anyhow::{Context, Result};
use quill_core::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "quill.log";

/// Builds the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// With `log_to_file` set, a daily rolling file under `logs_dir` is written
/// too; keep the returned guard alive until shutdown so buffered lines are
/// flushed.
pub fn init(config: &AppConfig, logs_dir: &Path) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = if config.log_to_file {
        std::fs::create_dir_all(logs_dir)
            .with_context(|| format!("Failed to create log directory {:?}", logs_dir))?;
        let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging initialized (file: {})", config.log_to_file);
    Ok(guard)
}
