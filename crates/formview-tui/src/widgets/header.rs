//! Header bar widget
//!
//! Shows the app title and the record / view files being displayed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

/// Header showing the app title, record name and view config name
pub struct MainHeader<'a> {
    record_name: &'a str,
    view_name: &'a str,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(record_name: &'a str, view_name: &'a str, icons: IconSet) -> Self {
        Self {
            record_name,
            view_name,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(false).style(Style::default().bg(palette::HEADER_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.document(), styles::brand(false)),
            Span::raw(" "),
            Span::styled("formview", styles::brand(true)),
            Span::raw(" "),
            Span::styled("/", styles::muted()),
            Span::raw(" "),
            Span::styled(self.record_name, styles::primary()),
            Span::styled("  view: ", styles::muted()),
            Span::styled(self.view_name, styles::secondary()),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use formview_app::config::IconMode;

    #[test]
    fn test_header_shows_file_names() {
        let mut term = TestTerminal::with_size(60, 3);
        let header = MainHeader::new("user.json", "user.toml", IconSet::new(IconMode::Unicode));
        term.render_widget(header, term.area());

        assert!(term.line_contains(1, "formview"));
        assert!(term.line_contains(1, "user.json"));
        assert!(term.line_contains(1, "view: user.toml"));
    }

    #[test]
    fn test_header_zero_height() {
        let mut term = TestTerminal::with_size(60, 3);
        let header = MainHeader::new("a", "b", IconSet::new(IconMode::Unicode));
        term.render_widget(header, Rect::new(0, 0, 60, 0));
        assert!(!term.buffer_contains("formview"));
    }
}
