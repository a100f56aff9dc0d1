//! Logging setup.
//!
//! The TUI owns the terminal, so in TUI mode log lines go to a per-session
//! file under `<data>/logs/`; CLI commands log to stderr. A `RUST_LOG` value
//! in the environment overrides the configured level.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Keeps the non-blocking writer alive and remembers where logs went.
///
/// Dropping the handle flushes buffered log lines, so it must live for the
/// whole program.
pub struct LoggingHandle {
    pub _guard: Option<WorkerGuard>,

    /// Set only when logging to a session file.
    pub log_file_path: Option<PathBuf>,
}

impl LoggingHandle {
    fn stderr_only() -> Self {
        Self {
            _guard: None,
            log_file_path: None,
        }
    }
}

/// Level directive from config and the `--debug` flag. `RUST_LOG` is layered
/// on top by [`init_logging`].
fn configured_level(config: &Config, debug_override: bool) -> &str {
    if debug_override {
        "debug"
    } else {
        &config.logging.level
    }
}

/// Timestamped file name for this session's log.
fn session_log_name() -> String {
    format!(
        "campdeck-{}.log",
        chrono::Utc::now().format("%Y%m%dT%H%M%SZ")
    )
}

pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| configured_level(config, debug_override).to_string());
    let filter = EnvFilter::new(level);

    if !(is_tui_mode && config.logging.to_file) {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
        return Ok(LoggingHandle::stderr_only());
    }

    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;

    let log_filename = session_log_name();
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false) // No ANSI codes in log files
                .with_writer(writer),
        )
        .init();

    Ok(LoggingHandle {
        _guard: Some(guard),
        log_file_path: Some(logs_dir.join(log_filename)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_debug_flag_overrides_configured_level() {
        let mut config = Config::default();
        config.logging.level = "warn".to_string();

        assert_eq!(configured_level(&config, false), "warn");
        assert_eq!(configured_level(&config, true), "debug");
    }

    #[test]
    fn test_session_log_name_shape() {
        let name = session_log_name();
        assert!(name.starts_with("campdeck-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_cli_mode_logs_to_stderr_without_file() {
        // Installs the global subscriber, so only this test may call
        // init_logging within the test binary
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();

        let handle = init_logging(&config, false, false).unwrap();
        assert!(handle.log_file_path.is_none());
        assert!(handle._guard.is_none());
    }

    #[test]
    fn test_logs_path_under_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();

        let logs_dir = config.logs_path();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(temp_dir.path()));
    }
}
