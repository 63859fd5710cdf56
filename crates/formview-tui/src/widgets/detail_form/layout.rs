//! Flattening a render tree into screen rows.

use formview_app::FormViewState;
use formview_core::{FormItem, GroupVariant, LabelKey, RenderNode, Translate};
use ratatui::text::{Line, Span};

use super::primitives::{self, Toggle};
use super::{group, styles};
use crate::theme::icons::IconSet;

/// Everything row building needs besides the items themselves.
pub struct RowContext<'a> {
    pub state: &'a FormViewState,
    pub translator: &'a dyn Translate,
    pub icons: IconSet,
    /// Usable columns, excluding the selection indicator
    pub width: usize,
    pub label_width: usize,
    /// Path of the focused target, if any
    pub selected: Option<&'a str>,
}

impl RowContext<'_> {
    fn value_width(&self) -> usize {
        self.width.saturating_sub(self.label_width + 1).max(1)
    }

    fn toggle(&self, expanded: bool, selected: bool) -> Toggle {
        let key = if expanded {
            LabelKey::Collapse
        } else {
            LabelKey::Expand
        };
        Toggle::new(self.translator.translate(key), selected)
    }
}

/// One screen row.
#[derive(Debug, Clone)]
pub struct FormRow {
    pub line: Line<'static>,
    /// Part of the focused item
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct FormRows {
    pub rows: Vec<FormRow>,
    /// First row of the focused item
    pub selected_row: Option<usize>,
}

impl FormRows {
    fn push(&mut self, line: Line<'static>, selected: bool) {
        self.rows.push(FormRow { line, selected });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lay out `items`. Children of collapsed groups produce no rows.
pub fn build_rows(items: &[FormItem], ctx: &RowContext<'_>) -> FormRows {
    let mut rows = FormRows::default();
    push_items(&mut rows, items, 0, ctx);
    rows
}

fn push_items(rows: &mut FormRows, items: &[FormItem], indent: usize, ctx: &RowContext<'_>) {
    for item in items {
        push_item(rows, item, indent, ctx);
    }
}

fn push_item(rows: &mut FormRows, item: &FormItem, indent: usize, ctx: &RowContext<'_>) {
    let selected = ctx.selected == Some(item.path.as_str());
    if selected {
        rows.selected_row = Some(rows.len());
    }

    if let RenderNode::Group(node) = &item.body {
        let expanded = ctx.state.is_group_expanded(&item.path);
        let header = group::header_line(
            node,
            expanded,
            indent,
            ctx.width,
            selected,
            ctx.translator,
            ctx.icons,
        );
        rows.push(header, selected);

        if expanded {
            let child_indent = match node.variant {
                GroupVariant::Separator => indent,
                GroupVariant::Caret => indent + styles::CARET_INDENT,
            };
            push_items(rows, &node.children, child_indent, ctx);
        }
        return;
    }

    let width = ctx.value_width();
    let expanded = ctx.state.is_leaf_expanded(&item.path);
    let mut values = match &item.body {
        RenderNode::Text(text) => primitives::text_lines(text, width),
        RenderNode::Paragraph(node) => {
            primitives::paragraph_lines(node, expanded, width, &ctx.toggle(expanded, selected))
        }
        RenderNode::Tags(node) => {
            primitives::tag_lines(node, expanded, width, &ctx.toggle(expanded, selected))
        }
        RenderNode::Custom(content) => primitives::custom_lines(content, width),
        RenderNode::Empty | RenderNode::Group(_) => Vec::new(),
    };
    // an empty item still shows its label
    if values.is_empty() {
        values.push(Line::default());
    }

    for (i, value) in values.into_iter().enumerate() {
        let label = if i == 0 {
            primitives::label_cell(&item.label, indent, ctx.label_width, selected)
        } else {
            Span::raw(" ".repeat(ctx.label_width))
        };
        let mut spans = vec![label, Span::raw(" ")];
        spans.extend(value.spans);
        rows.push(Line::from(spans), selected);
    }
}
