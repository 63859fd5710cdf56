//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title + file names)
    pub header: Rect,

    /// The form itself
    pub form: Rect,

    /// Key hints and status
    pub footer: Rect,
}

/// Split the screen into header, form and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        footer: chunks[2],
    }
}
