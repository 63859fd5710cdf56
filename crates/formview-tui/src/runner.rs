//! Main TUI runner - entry point and event loop

use std::path::Path;

use formview_app::config::load_settings;
use formview_app::{process_message, AppState};
use formview_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Load the record and view config, then run the viewer until the user quits.
pub fn run(record_path: &Path, view_path: &Path, project_path: &Path) -> Result<()> {
    let settings = load_settings(project_path);
    let mut state = AppState::load(record_path, view_path, settings)
        .with_context(|| format!("Failed to open {}", record_path.display()))?;

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let result = run_loop(&mut term, &mut state);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));
    result?;
    restored
}

fn run_loop(term: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll().context("Failed to read terminal events")? {
            process_message(state, message);
        }

        for event in state.view.drain_events() {
            debug!(path = %event.path, expanded = event.expanded, "Leaf expand state changed");
        }
    }

    if let Some(e) = state.exit_error.take() {
        return Err(e);
    }

    info!("Viewer closed");
    Ok(())
}
