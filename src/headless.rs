//! Headless mode - print the rendered form to stdout
//!
//! Renders the record exactly as the TUI would, then writes the outline
//! (every group expanded, every paragraph in full) instead of drawing it.
//! Handy for scripts and for checking a view config without a terminal.

use std::io::{self, Write};
use std::path::Path;

use formview_app::config::load_settings;
use formview_app::AppState;
use formview_core::prelude::*;
use formview_core::to_outline;

/// Load settings, record and view config and return the outline text.
pub fn render_outline(record_path: &Path, view_path: &Path, project_path: &Path) -> Result<String> {
    let settings = load_settings(project_path);
    let state = AppState::load(record_path, view_path, settings)
        .with_context(|| format!("Failed to open {}", record_path.display()))?;
    debug!("Headless render produced {} top-level items", state.items.len());
    Ok(to_outline(&state.items))
}

/// Print the outline to stdout.
pub fn run(record_path: &Path, view_path: &Path, project_path: &Path) -> Result<()> {
    let outline = render_outline(record_path, view_path, project_path)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", outline).context("Failed to write outline")?;
    stdout.flush().context("Failed to flush stdout")
}
