// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),
}

/// Builds the filter for a configured level.
///
/// The `http` level keeps everything at `info` and enables the per-request
/// logs of the `http` target.
pub fn resolve_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = if level == "http" {
        "info,http=debug"
    } else {
        level
    };

    EnvFilter::try_new(directives).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing for the whole process.
///
/// Logs always go to stdout. With `write` enabled they are also written to
/// `<write_path>/logs.log`, rotated once the file reaches `write_max_file_size`
/// bytes, keeping at most `write_max_files` files including the current one.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = resolve_filter(&config.level)?;

    let file_writer = if config.write {
        std::fs::create_dir_all(&config.write_path)?;

        let log_file_path = PathBuf::from(&config.write_path).join("logs.log");
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            config.write_max_files.saturating_sub(1),
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Dropping the guard stops the writer thread.
        std::mem::forget(guard);
        Some(non_blocking)
    } else {
        None
    };

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        let file_layer = file_writer.map(|writer| fmt::layer().json().with_writer(writer));
        registry
            .with(fmt::layer().json())
            .with(file_layer)
            .init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer)
        });

        registry.with(console_layer).with(file_layer).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_level_enables_http_target() {
        let filter = resolve_filter("http").unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("http=debug"));
        assert!(rendered.contains("info"));
    }

    #[test]
    fn test_standard_levels_are_accepted() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(resolve_filter(level).is_ok(), "level {level} should be accepted");
        }
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = resolve_filter("server=[").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLogLevel { level, .. } if level == "server=["));
    }
}
