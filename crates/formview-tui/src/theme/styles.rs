//! Styles for the screen chrome: header, footer and the form frame.
//!
//! Form cell styles live next to the widget in `widgets::detail_form::styles`.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

pub fn primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// App name and icon in the header
pub fn brand(bold: bool) -> Style {
    let style = Style::default().fg(palette::ACCENT);
    if bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Key inside a footer hint, e.g. the `q` of `[q] Quit`
pub fn hint_key() -> Style {
    Style::default().fg(palette::HINT_KEY)
}

/// Footer status after a reload
pub fn status(is_error: bool) -> Style {
    if is_error {
        Style::default().fg(palette::STATUS_ERROR)
    } else {
        Style::default().fg(palette::STATUS_OK)
    }
}

/// Rounded frame; cyan when it holds the focus
pub fn panel(focused: bool) -> Block<'static> {
    let color = if focused {
        palette::FRAME_FOCUSED
    } else {
        palette::FRAME_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}
