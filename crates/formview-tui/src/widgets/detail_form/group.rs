//! Header rows of the two group containers.
//!
//! - Separator: `── Title ─────── [Collapse]`, toggle only when the group offers one
//! - Caret: `▾ Title`, always toggleable, children indented

use formview_core::{GroupNode, GroupVariant, LabelKey, Translate};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::primitives::Toggle;
use super::styles;
use crate::theme::icons::IconSet;

const SEPARATOR_LEAD: &str = "── ";

pub fn header_line(
    group: &GroupNode,
    expanded: bool,
    indent: usize,
    width: usize,
    selected: bool,
    translator: &dyn Translate,
    icons: IconSet,
) -> Line<'static> {
    match group.variant {
        GroupVariant::Separator => {
            let toggle = group
                .toggleable
                .then(|| Toggle::new(toggle_label(expanded, translator), selected));
            separator_header(&group.title, toggle, indent, width, selected)
        }
        GroupVariant::Caret => caret_header(&group.title, expanded, indent, selected, icons),
    }
}

fn toggle_label(expanded: bool, translator: &dyn Translate) -> String {
    translator.translate(if expanded {
        LabelKey::Collapse
    } else {
        LabelKey::Expand
    })
}

fn separator_header(
    title: &str,
    toggle: Option<Toggle>,
    indent: usize,
    width: usize,
    selected: bool,
) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(SEPARATOR_LEAD, styles::separator_style()),
        Span::styled(title.to_string(), styles::group_title_style(selected)),
        Span::raw(" "),
    ];

    let used = indent + SEPARATOR_LEAD.width() + title.width() + 1;
    let reserved = toggle.as_ref().map_or(0, |t| t.width() + 1);
    let fill = width.saturating_sub(used + reserved);
    if fill > 0 {
        spans.push(Span::styled("─".repeat(fill), styles::separator_style()));
    }

    if let Some(toggle) = toggle {
        spans.push(Span::raw(" "));
        spans.push(toggle.span());
    }
    Line::from(spans)
}

fn caret_header(
    title: &str,
    expanded: bool,
    indent: usize,
    selected: bool,
    icons: IconSet,
) -> Line<'static> {
    let caret = if expanded {
        icons.caret_down()
    } else {
        icons.caret_right()
    };
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(caret, styles::separator_style()),
        Span::raw(" "),
        Span::styled(title.to_string(), styles::group_title_style(selected)),
    ])
}
