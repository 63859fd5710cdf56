//! Plain-text outline of a rendered form.
//!
//! Every group is shown expanded and every paragraph in full. Used by the
//! headless viewer mode and handy in tests.

use crate::field::GroupVariant;
use crate::view::{FormItem, RenderNode};

const INDENT: &str = "  ";

/// Render items as indented `label: value` lines.
pub fn to_outline(items: &[FormItem]) -> String {
    let mut lines = Vec::new();
    push_items(&mut lines, items, 0);
    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_items(lines: &mut Vec<String>, items: &[FormItem], depth: usize) {
    for item in items {
        push_item(lines, item, depth);
    }
}

fn push_item(lines: &mut Vec<String>, item: &FormItem, depth: usize) {
    let indent = INDENT.repeat(depth);
    let prefix = if item.label.is_empty() {
        indent.clone()
    } else {
        format!("{}{}: ", indent, item.label)
    };

    match &item.body {
        RenderNode::Empty => lines.push(prefix),
        RenderNode::Text(text) => lines.push(format!("{}{}", prefix, text)),
        RenderNode::Paragraph(paragraph) => {
            let mut text_lines = paragraph.text.lines();
            lines.push(format!("{}{}", prefix, text_lines.next().unwrap_or_default()));
            for rest in text_lines {
                lines.push(format!("{}{}{}", indent, INDENT, rest));
            }
        }
        RenderNode::Tags(tags) => {
            let pills: Vec<String> = tags.tags.iter().map(|t| format!("[{}]", t)).collect();
            lines.push(format!("{}{}", prefix, pills.join(" ")));
        }
        RenderNode::Custom(content) => {
            lines.push(format!("{}{}", prefix, content.as_str().unwrap_or("<custom>")));
        }
        RenderNode::Group(group) => match group.variant {
            GroupVariant::Separator => {
                lines.push(format!("{}── {} ──", indent, group.title));
                push_items(lines, &group.children, depth);
            }
            GroupVariant::Caret => {
                lines.push(format!("{}▾ {}", indent, group.title));
                push_items(lines, &group.children, depth + 1);
            }
        },
    }
}
