//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use std::path::Path;

use formview_app::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only widget bookkeeping (the form's scroll offset) is written back to
/// `state`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::SCREEN_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let record_name = file_name(&state.record_path);
    let view_name = file_name(&state.view_path);
    frame.render_widget(
        widgets::MainHeader::new(&record_name, &view_name, icons),
        areas.header,
    );

    let form = widgets::DetailForm::new(&state.items, &state.settings.labels, icons)
        .label_width(state.settings.ui.label_width);
    frame.render_stateful_widget(form, areas.form, &mut state.view);

    frame.render_widget(
        widgets::Footer::new(state.status.as_ref(), icons),
        areas.footer,
    );
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
