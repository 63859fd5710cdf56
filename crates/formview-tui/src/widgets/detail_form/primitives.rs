//! Terminal rendering of the presentation primitives.
//!
//! Each builder returns the lines of the value column for one form item.

use formview_core::{CustomContent, ExpandPlacement, ParagraphNode, TagsNode, PLACEHOLDER};
use ratatui::text::{Line, Span, Text};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

const ELLIPSIS: &str = "…";

/// An Expand/Collapse affordance.
#[derive(Debug, Clone)]
pub struct Toggle {
    label: String,
    selected: bool,
}

impl Toggle {
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected,
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.label),
            styles::toggle_style(self.selected),
        )
    }

    pub fn width(&self) -> usize {
        self.label.width() + 2
    }
}

/// Longest prefix of `s` that fits in `width` columns.
fn take_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Cut `s` to `width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    format!("{}{}", take_width(s, width - 1), ELLIPSIS)
}

pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Word-wrap `text` to `width` columns, keeping explicit line breaks.
///
/// Words wider than a line are split by character.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let raw = raw.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0;

        for word in raw.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

/// The label column of an item's first row.
pub fn label_cell(label: &str, indent: usize, width: usize, selected: bool) -> Span<'static> {
    let text = format!("{}{}", " ".repeat(indent), label);
    Span::styled(
        pad_to_width(&truncate_to_width(&text, width), width),
        styles::label_style(selected),
    )
}

/// Text, BooleanText and SelectText output.
pub fn text_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    let style = if text == PLACEHOLDER {
        styles::placeholder_style()
    } else {
        styles::value_style()
    };
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

pub fn custom_lines(content: &CustomContent, width: usize) -> Vec<Line<'static>> {
    if let Some(text) = content.as_str() {
        return text_lines(text, width);
    }
    // Pre-styled content is drawn as-is; the row clips it
    if let Some(text) = content.downcast_ref::<Text<'static>>() {
        return text.lines.clone();
    }
    vec![Line::from(Span::styled("<custom>", styles::opaque_style()))]
}

/// AreaText output: `rows` lines until expanded.
///
/// The affordance appears only when there is something to expand, or to
/// collapse again.
pub fn paragraph_lines(
    node: &ParagraphNode,
    expanded: bool,
    width: usize,
    toggle: &Toggle,
) -> Vec<Line<'static>> {
    let mut visible = wrap_text(&node.text, width);
    let rows = node.rows.max(1);
    let overflows = visible.len() > rows;

    if overflows && !expanded {
        visible.truncate(rows);
        if let Some(last) = visible.last_mut() {
            *last = format!("{}{}", take_width(last, width.saturating_sub(1)), ELLIPSIS);
        }
    }

    let mut lines: Vec<Line<'static>> = visible
        .into_iter()
        .map(|line| Line::from(Span::styled(line, styles::value_style())))
        .collect();

    if overflows || expanded {
        match node.placement {
            ExpandPlacement::Bottom => lines.push(Line::from(toggle.span())),
            ExpandPlacement::End => append_inline(&mut lines, toggle, width),
        }
    }
    lines
}

/// TagText output: pills flowed into rows, `min_row` rows until expanded.
pub fn tag_lines(
    node: &TagsNode,
    expanded: bool,
    width: usize,
    toggle: &Toggle,
) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for tag in &node.tags {
        let pill = truncate_to_width(&format!(" {} ", tag), width);
        let pill_width = pill.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + pill_width > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            current_width += 1;
        }
        current.push(Span::styled(pill, styles::pill_style()));
        current_width += pill_width;
    }
    if !current.is_empty() {
        rows.push(current);
    }

    let min_row = node.min_row.max(1);
    let overflows = rows.len() > min_row;
    if overflows && !expanded {
        rows.truncate(min_row);
    }

    let mut lines: Vec<Line<'static>> = rows.into_iter().map(Line::from).collect();
    if overflows || expanded {
        append_inline(&mut lines, toggle, width);
    }
    lines
}

/// Put the affordance after the last line, or on its own line when it does not fit.
fn append_inline(lines: &mut Vec<Line<'static>>, toggle: &Toggle, width: usize) {
    match lines.last_mut() {
        Some(last) if last.width() + 1 + toggle.width() <= width => {
            last.spans.push(Span::raw(" "));
            last.spans.push(toggle.span());
        }
        _ => lines.push(Line::from(toggle.span())),
    }
}
