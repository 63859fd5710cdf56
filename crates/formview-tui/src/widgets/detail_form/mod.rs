//! Detail form widget
//!
//! Draws a rendered form as a two-column list of labels and values, with
//! group headers, an accent bar on the focused item and a scrollbar when the
//! form is taller than the viewport.

mod group;
mod layout;
mod primitives;
mod styles;


pub use layout::{build_rows, FormRow, FormRows, RowContext};

use formview_app::{FocusTarget, FormViewState};
use formview_core::{FormItem, Translate};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    widgets::{
        Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::theme::{icons::IconSet, styles as theme_styles};
use styles::INDICATOR_WIDTH;

const DEFAULT_LABEL_WIDTH: u16 = 18;

/// Read-only form over a render tree.
pub struct DetailForm<'a> {
    items: &'a [FormItem],
    translator: &'a dyn Translate,
    icons: IconSet,
    label_width: u16,
    title: Option<&'a str>,
}

impl<'a> DetailForm<'a> {
    pub fn new(items: &'a [FormItem], translator: &'a dyn Translate, icons: IconSet) -> Self {
        Self {
            items,
            translator,
            icons,
            label_width: DEFAULT_LABEL_WIDTH,
            title: None,
        }
    }

    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl StatefulWidget for DetailForm<'_> {
    type State = FormViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut block = theme_styles::panel(true);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width <= INDICATOR_WIDTH || inner.height == 0 {
            return;
        }

        if self.items.is_empty() {
            buf.set_string(
                inner.x + INDICATOR_WIDTH,
                inner.y,
                "No fields to display",
                styles::empty_state_style(),
            );
            return;
        }

        let width = (inner.width - INDICATOR_WIDTH) as usize;
        let selected = state.selected_target(self.items);
        let ctx = RowContext {
            state: &*state,
            translator: self.translator,
            icons: self.icons,
            width,
            label_width: (self.label_width as usize).min(width / 2),
            selected: selected.as_ref().map(FocusTarget::path),
        };
        let rows = build_rows(self.items, &ctx);

        let visible = inner.height as usize;
        state.scroll_offset =
            scroll_into_view(state.scroll_offset, rows.selected_row, visible, rows.len());

        for (i, row) in rows
            .rows
            .iter()
            .skip(state.scroll_offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + i as u16;
            if row.selected {
                render_selection(inner.x, y, inner.width, buf);
            }
            buf.set_line(
                inner.x + INDICATOR_WIDTH,
                y,
                &row.line,
                inner.width - INDICATOR_WIDTH,
            );
        }

        if rows.len() > visible {
            let mut scrollbar_state = ScrollbarState::new(rows.len() - visible)
                .position(state.scroll_offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .render(
                    area.inner(Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    buf,
                    &mut scrollbar_state,
                );
        }
    }
}

/// Background plus left accent bar
fn render_selection(x: u16, y: u16, width: u16, buf: &mut Buffer) {
    for col in x..x + width {
        if let Some(cell) = buf.cell_mut((col, y)) {
            cell.set_style(styles::selected_row_bg());
        }
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol("▎");
        cell.set_style(styles::accent_bar_style());
    }
}

/// New scroll offset that keeps `selected_row` on screen.
fn scroll_into_view(
    offset: usize,
    selected_row: Option<usize>,
    visible: usize,
    total: usize,
) -> usize {
    let mut offset = offset;
    if let Some(row) = selected_row {
        if row < offset {
            offset = row;
        } else if row >= offset + visible {
            offset = row + 1 - visible;
        }
    }
    offset.min(total.saturating_sub(visible))
}
