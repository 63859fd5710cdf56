//! # formview - Configuration-driven detail form viewer
//!
//! Thin binary crate over the workspace libraries:
//!
//! - [`formview_core`] builds the render tree from a record and a view config
//! - [`formview_app`] owns settings, file loading and view state
//! - [`formview_tui`] draws the form in the terminal
//!
//! The [`headless`] module prints the form as a plain-text outline instead of
//! starting the TUI.

pub mod headless;

use std::path::Path;

use formview_core::prelude::*;

pub use formview_app::{AppState, Message};
pub use formview_core::{render, to_outline, FieldMap, FormItem};

/// Run the TUI viewer
pub fn run(record_path: &Path, view_path: &Path, project_path: &Path) -> Result<()> {
    init()?;
    log_start(record_path, view_path);

    let result = formview_tui::run(record_path, view_path, project_path);
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("formview exiting");
    result
}

/// Print the rendered form to stdout instead of starting the TUI
pub fn run_headless(record_path: &Path, view_path: &Path, project_path: &Path) -> Result<()> {
    init()?;
    log_start(record_path, view_path);
    info!("Mode: headless");

    let result = headless::run(record_path, view_path, project_path);
    if let Err(ref e) = result {
        error!("Headless error: {:?}", e);
    }
    result
}

/// One-line stderr message for errors about the input files.
///
/// Terminal failures return `None` and keep the full color-eyre report.
pub fn short_message(err: &Error) -> Option<String> {
    if err.is_fatal() {
        None
    } else {
        Some(format!("formview: {}", err))
    }
}

fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // To file, the TUI owns stdout
    formview_core::logging::init()
}

fn log_start(record_path: &Path, view_path: &Path) {
    info!("═══════════════════════════════════════════════════════");
    info!("formview starting");
    info!("Record: {}", record_path.display());
    info!("View: {}", view_path.display());
    info!("═══════════════════════════════════════════════════════");
}
