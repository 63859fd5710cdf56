//! # Tree Walker / Dispatcher
//!
//! Turns a record plus a [`FieldMap`] into a [`FormItem`] tree that a front end
//! can draw. The walk is a pure function of its inputs: no state survives
//! between passes, and nothing in here can fail.
//!
//! For every `(key, descriptor)` in config order:
//! - group descriptors with children recurse into a [`GroupNode`], resolving
//!   children against the *same* top-level record;
//! - leaves bind `data[key]` to their primitive;
//! - group descriptors without children and unknown tags render
//!   [`RenderNode::Empty`], still inside their labelled [`FormItem`].

use serde_json::Value;
use tracing::{trace, warn};

use crate::field::{
    CustomContent, ExpandPlacement, FieldDefaults, FieldDescriptor, FieldKind, FieldMap,
    GroupVariant,
};
use crate::i18n::Translate;
use crate::primitives;
use crate::value::{self, PLACEHOLDER};

/// Everything the walk needs besides the record and the config.
pub struct RenderContext<'a> {
    pub translator: &'a dyn Translate,
    pub defaults: FieldDefaults,
}

impl<'a> RenderContext<'a> {
    pub fn new(translator: &'a dyn Translate) -> Self {
        Self {
            translator,
            defaults: FieldDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// One labelled slot of the rendered form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormItem {
    /// Config key, also the record key the node is bound to
    pub key: String,
    /// Dot-joined config keys from the root; identifies the node's UI state
    pub path: String,
    pub label: String,
    pub body: RenderNode,
    /// Hash of the bound `data[key]`
    pub fingerprint: u64,
}

/// What a slot shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Nothing; only the label remains
    Empty,
    /// Text, BooleanText and SelectText output, or a placeholder
    Text(String),
    Paragraph(ParagraphNode),
    Tags(TagsNode),
    Group(GroupNode),
    Custom(CustomContent),
}

/// `AreaText` output: text shown truncated to `rows` lines until expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphNode {
    pub text: String,
    pub rows: usize,
    pub placement: ExpandPlacement,
}

/// `TagText` output: one pill per entry, `min_row` rows until expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct TagsNode {
    pub tags: Vec<String>,
    pub min_row: usize,
}

/// A titled, collapsible container.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub title: String,
    pub variant: GroupVariant,
    /// Whether the container offers a toggle at all
    pub toggleable: bool,
    pub children: Vec<FormItem>,
}

impl RenderNode {
    /// Leaves that carry their own expand/collapse state.
    pub fn is_expandable(&self) -> bool {
        matches!(self, RenderNode::Paragraph(_) | RenderNode::Tags(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderNode::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            RenderNode::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl FormItem {
    /// Depth-first walk over this item and every nested child.
    pub fn walk<'s>(&'s self, f: &mut impl FnMut(&'s FormItem)) {
        f(self);
        if let RenderNode::Group(group) = &self.body {
            for child in &group.children {
                child.walk(f);
            }
        }
    }
}

/// Render `config` against `data`.
pub fn render(data: &Value, config: &FieldMap, ctx: &RenderContext<'_>) -> Vec<FormItem> {
    let items = render_level(data, config, "", ctx);
    trace!("rendered {} top-level form items", items.len());
    items
}

fn render_level(
    data: &Value,
    config: &FieldMap,
    parent_path: &str,
    ctx: &RenderContext<'_>,
) -> Vec<FormItem> {
    config
        .iter()
        .map(|(key, descriptor)| render_item(data, key, descriptor, parent_path, ctx))
        .collect()
}

fn render_item(
    data: &Value,
    key: &str,
    descriptor: &FieldDescriptor,
    parent_path: &str,
    ctx: &RenderContext<'_>,
) -> FormItem {
    let path = if parent_path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent_path, key)
    };
    let bound = value::lookup(data, key);
    let body = render_body(data, bound, descriptor, &path, ctx);

    FormItem {
        key: key.to_string(),
        path,
        label: descriptor.label.clone(),
        body,
        fingerprint: value::fingerprint(bound),
    }
}

fn render_body(
    data: &Value,
    bound: Option<&Value>,
    descriptor: &FieldDescriptor,
    path: &str,
    ctx: &RenderContext<'_>,
) -> RenderNode {
    let defaults = &ctx.defaults;

    match &descriptor.kind {
        FieldKind::Group {
            variant,
            expand,
            children,
        } if !children.is_empty() => RenderNode::Group(GroupNode {
            title: descriptor.label.clone(),
            variant: *variant,
            toggleable: match variant {
                GroupVariant::Separator => *expand,
                GroupVariant::Caret => true,
            },
            children: render_level(data, children, path, ctx),
        }),
        FieldKind::Group { .. } => RenderNode::Empty,
        FieldKind::Unknown(tag) => {
            warn!("unknown field type {:?} at {}, rendering nothing", tag, path);
            RenderNode::Empty
        }

        // Leaves render only against a truthy record
        _ if !value::is_truthy(data) => RenderNode::Empty,

        FieldKind::Text => RenderNode::Text(primitives::text(bound)),
        FieldKind::BooleanText => {
            RenderNode::Text(primitives::boolean_text(bound, ctx.translator))
        }
        FieldKind::SelectText { options } => {
            RenderNode::Text(primitives::select_text(bound, options))
        }
        FieldKind::AreaText { rows, placement } => {
            if value::is_present(bound) {
                RenderNode::Paragraph(ParagraphNode {
                    text: primitives::area_text(bound),
                    rows: rows.unwrap_or(defaults.area_rows),
                    placement: *placement,
                })
            } else {
                RenderNode::Text(PLACEHOLDER.to_string())
            }
        }
        FieldKind::TagText {
            value_key,
            min_row,
            max_text_length,
        } => {
            let tags = primitives::tag_texts(
                bound,
                value_key.as_deref(),
                max_text_length.unwrap_or(defaults.tag_max_text_length),
            );
            if tags.is_empty() {
                RenderNode::Text(PLACEHOLDER.to_string())
            } else {
                RenderNode::Tags(TagsNode {
                    tags,
                    min_row: min_row.unwrap_or(defaults.tag_min_row),
                })
            }
        }
        FieldKind::Custom(Some(content)) => RenderNode::Custom(content.clone()),
        FieldKind::Custom(None) => RenderNode::Empty,
    }
}
