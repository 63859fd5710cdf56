//! Footer with key hints and the last status message

use formview_app::StatusMessage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

const HINTS: &[(&str, &str)] = &[
    ("j/k", "Move"),
    ("Enter", "Toggle"),
    ("e", "Expand all"),
    ("r", "Reload"),
    ("q", "Quit"),
];

pub struct Footer<'a> {
    status: Option<&'a StatusMessage>,
    icons: IconSet,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a StatusMessage>, icons: IconSet) -> Self {
        Self { status, icons }
    }

    fn hints_line() -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::muted()));
            spans.push(Span::styled(*key, styles::hint_key()));
            spans.push(Span::styled(format!("] {}", label), styles::muted()));
        }
        Line::from(spans)
    }

    fn status_line(&self) -> Option<Line<'a>> {
        let status = self.status?;
        let icon = if status.is_error() {
            self.icons.alert()
        } else {
            self.icons.refresh()
        };
        let style = styles::status(status.is_error());
        Some(Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(status.text(), style),
            Span::raw(" "),
        ]))
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let hints = Self::hints_line();
        let hints_width = hints.width() as u16;

        match self.status_line() {
            // Right-align the status beside the hints
            Some(status) if hints_width + (status.width() as u16) < area.width => {
                let status_width = status.width() as u16;
                buf.set_line(area.x, area.y, &hints, area.width);
                buf.set_line(
                    area.x + area.width - status_width,
                    area.y,
                    &status,
                    status_width,
                );
            }
            Some(status) => {
                buf.set_line(area.x, area.y, &status, area.width);
            }
            None => {
                buf.set_line(area.x, area.y, &hints, area.width);
            }
        }
    }
}
