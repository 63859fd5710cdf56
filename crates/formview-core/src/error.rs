//! Application error types with rich context
//!
//! The render path itself never fails: missing keys, unknown descriptor tags
//! and falsy records all degrade to placeholders. Everything in here comes
//! from the edges around it (files, parsing, the terminal).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Input File Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Record file not found: {path}")]
    RecordNotFound { path: PathBuf },

    #[error("View config file not found: {path}")]
    ViewNotFound { path: PathBuf },

    #[error("Unsupported file format {extension:?}: {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Invalid view config in {path}: {message}")]
    ViewInvalid { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn record_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RecordNotFound { path: path.into() }
    }

    pub fn view_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ViewNotFound { path: path.into() }
    }

    pub fn unsupported_format(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }

    pub fn view_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ViewInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The viewer can keep running with what it already shows.
    ///
    /// True for record contents that may be mid-edit on disk; a later
    /// reload can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Json(_) | Error::RecordNotFound { .. } | Error::Config { .. }
        )
    }

    /// The terminal itself failed; nothing more can be drawn.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::TerminalInit(_) | Error::TerminalRestore(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("bad label width");
        assert_eq!(err.to_string(), "Configuration error: bad label width");

        let err = Error::view_not_found("/tmp/view.toml");
        assert!(err.to_string().contains("/tmp/view.toml"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_terminal_errors_are_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::TerminalRestore("raw mode".into()).is_fatal());
        assert!(Error::terminal("draw failed").is_fatal());
        assert!(!Error::view_invalid("/v.toml", "expected table").is_fatal());
        assert!(!Error::record_not_found("/r.json").is_fatal());
    }

    #[test]
    fn test_record_problems_are_recoverable() {
        assert!(Error::record_not_found("/r.json").is_recoverable());
        assert!(Error::config("x").is_recoverable());
        assert!(!Error::TerminalInit("x".into()).is_recoverable());
        assert!(!Error::view_not_found("/v.toml").is_recoverable());

        let unreadable = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::from(unreadable).is_recoverable());
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = Error::unsupported_format("/data/view.yaml", "yaml");
        let msg = err.to_string();
        assert!(msg.contains("\"yaml\""));
        assert!(msg.contains("/data/view.yaml"));
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading record").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
