//! Styling helpers for detail form rendering

use ratatui::style::{Modifier, Style};

use crate::theme::palette;

/// Selection bar plus one space
pub const INDICATOR_WIDTH: u16 = 2;

/// Children of a caret group are shifted right by this many columns
pub const CARET_INDENT: usize = 2;

/// Style for field labels
pub fn label_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}

/// Style for plain values
pub fn value_style() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

/// Style for the `--` placeholder
pub fn placeholder_style() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Style for custom content that has no text form
pub fn opaque_style() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC)
}

/// Style for a tag pill
pub fn pill_style() -> Style {
    Style::default().fg(palette::PILL_FG).bg(palette::PILL_BG)
}

/// Style for Expand/Collapse affordances
pub fn toggle_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(palette::ACCENT)
    }
}

/// Style for group titles
pub fn group_title_style(is_selected: bool) -> Style {
    let base = Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD);
    if is_selected {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    }
}

/// Style for separator lines and carets
pub fn separator_style() -> Style {
    Style::default().fg(palette::ACCENT_DIM)
}

/// Background of the focused item's rows
pub fn selected_row_bg() -> Style {
    Style::default().bg(palette::SELECTED_ROW_BG)
}

/// Style for the accent bar on selected rows
pub fn accent_bar_style() -> Style {
    Style::default().fg(palette::ACCENT)
}

/// Style for the empty-form message
pub fn empty_state_style() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC)
}
