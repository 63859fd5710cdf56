//! Logging configuration using tracing
//!
//! The TUI owns the terminal, so log output goes to a daily-rolling file.
//!
//! | Variable | Effect | Default |
//! |---|---|---|
//! | `FORMVIEW_LOG` | `EnvFilter` directives | `formview=info,warn` |
//! | `FORMVIEW_LOG_DIR` | directory for `formview.log.*` | `<data_local_dir>/formview/logs` |

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const FILTER_ENV: &str = "FORMVIEW_LOG";
const DIR_ENV: &str = "FORMVIEW_LOG_DIR";
const DEFAULT_FILTER: &str = "formview=info,warn";
const FILE_PREFIX: &str = "formview.log";

/// Initialize the logging subsystem
///
/// # Examples
/// ```bash
/// FORMVIEW_LOG=debug FORMVIEW_LOG_DIR=/tmp/fv formview record.json --view view.toml
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory(std::env::var_os(DIR_ENV).map(PathBuf::from));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Logging to {}", log_dir.join(FILE_PREFIX).display());

    Ok(())
}

/// Where log files go: the override if set and non-empty, else the
/// per-user data directory.
fn log_directory(dir_override: Option<PathBuf>) -> PathBuf {
    match dir_override {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("formview")
            .join("logs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directory() {
        assert!(log_directory(None).ends_with("formview/logs"));
    }

    #[test]
    fn test_log_directory_override() {
        let dir = log_directory(Some(PathBuf::from("/tmp/formview-logs")));
        assert_eq!(dir, PathBuf::from("/tmp/formview-logs"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        assert!(log_directory(Some(PathBuf::new())).ends_with("formview/logs"));
    }
}
