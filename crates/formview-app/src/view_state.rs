//! Expansion and focus state for a rendered form.
//!
//! The render tree from `formview_core::render` is stateless. Everything that
//! survives a re-render lives here, keyed by each node's `path`:
//! - group containers, expanded unless explicitly collapsed
//! - paragraph/tag leaves, collapsed until toggled, reset when their value changes
//! - the focus cursor and scroll offset used by the TUI

use std::collections::{HashMap, HashSet};

use formview_core::prelude::*;
use formview_core::{FormItem, RenderNode};

/// Something the user can toggle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// A group header with a toggle affordance
    Group(String),
    /// A paragraph or tag leaf
    Leaf(String),
}

impl FocusTarget {
    pub fn path(&self) -> &str {
        match self {
            FocusTarget::Group(path) | FocusTarget::Leaf(path) => path,
        }
    }
}

/// A leaf changed its expand state.
///
/// Queued by [`FormViewState`] and drained by the host after each update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    pub path: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeafState {
    expanded: bool,
    /// Set by `sync_leaves`; `None` until a render has bound the leaf
    fingerprint: Option<u64>,
}

/// Parent-owned UI state of a form view.
#[derive(Debug, Clone, Default)]
pub struct FormViewState {
    collapsed_groups: HashSet<String>,
    leaves: HashMap<String, LeafState>,
    events: Vec<ExpandEvent>,

    /// Index into [`FormViewState::focus_targets`]
    pub selected: usize,

    /// First visible row, maintained by the renderer
    pub scroll_offset: usize,
}

impl FormViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Groups
    // ─────────────────────────────────────────────────────────

    pub fn is_group_expanded(&self, path: &str) -> bool {
        !self.collapsed_groups.contains(path)
    }

    pub fn set_group_expanded(&mut self, path: &str, expanded: bool) {
        if expanded {
            self.collapsed_groups.remove(path);
        } else {
            self.collapsed_groups.insert(path.to_string());
        }
    }

    /// Flip a group and return its new state.
    pub fn toggle_group(&mut self, path: &str) -> bool {
        let expanded = !self.is_group_expanded(path);
        self.set_group_expanded(path, expanded);
        debug!(path, expanded, "Toggled group");
        expanded
    }

    /// Force every group back to expanded.
    pub fn expand_all_groups(&mut self) {
        if !self.collapsed_groups.is_empty() {
            debug!(count = self.collapsed_groups.len(), "Expanding all groups");
        }
        self.collapsed_groups.clear();
    }

    // ─────────────────────────────────────────────────────────
    // Leaves
    // ─────────────────────────────────────────────────────────

    pub fn is_leaf_expanded(&self, path: &str) -> bool {
        self.leaves.get(path).is_some_and(|leaf| leaf.expanded)
    }

    /// Set a leaf's state, queueing an [`ExpandEvent`] when it changes.
    pub fn set_leaf_expanded(&mut self, path: &str, expanded: bool) {
        let leaf = self.leaves.entry(path.to_string()).or_insert(LeafState {
            expanded: false,
            fingerprint: None,
        });
        if leaf.expanded != expanded {
            leaf.expanded = expanded;
            self.events.push(ExpandEvent {
                path: path.to_string(),
                expanded,
            });
        }
    }

    /// Flip a leaf and return its new state.
    pub fn toggle_leaf(&mut self, path: &str) -> bool {
        let expanded = !self.is_leaf_expanded(path);
        self.set_leaf_expanded(path, expanded);
        expanded
    }

    /// Reconcile leaf state with a fresh render.
    ///
    /// A leaf whose bound value changed goes back to collapsed.
    pub fn sync_leaves(&mut self, items: &[FormItem]) {
        let mut reset = Vec::new();
        for item in items {
            item.walk(&mut |node| {
                if matches!(node.body, RenderNode::Group(_)) {
                    return;
                }
                match self.leaves.get_mut(&node.path) {
                    Some(leaf) => match leaf.fingerprint {
                        Some(seen) if seen != node.fingerprint => {
                            if leaf.expanded {
                                reset.push(node.path.clone());
                            }
                            leaf.fingerprint = Some(node.fingerprint);
                            leaf.expanded = false;
                        }
                        Some(_) => {}
                        None => leaf.fingerprint = Some(node.fingerprint),
                    },
                    None if node.body.is_expandable() => {
                        self.leaves.insert(
                            node.path.clone(),
                            LeafState {
                                expanded: false,
                                fingerprint: Some(node.fingerprint),
                            },
                        );
                    }
                    None => {}
                }
            });
        }

        for path in reset {
            trace!(path, "Value changed, collapsing leaf");
            self.events.push(ExpandEvent {
                path,
                expanded: false,
            });
        }
    }

    /// Take queued leaf events.
    pub fn drain_events(&mut self) -> Vec<ExpandEvent> {
        std::mem::take(&mut self.events)
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    /// Toggleable nodes currently visible, in display order.
    pub fn focus_targets(&self, items: &[FormItem]) -> Vec<FocusTarget> {
        let mut targets = Vec::new();
        self.collect_targets(items, &mut targets);
        targets
    }

    fn collect_targets(&self, items: &[FormItem], targets: &mut Vec<FocusTarget>) {
        for item in items {
            match &item.body {
                RenderNode::Group(group) => {
                    if group.toggleable {
                        targets.push(FocusTarget::Group(item.path.clone()));
                    }
                    if self.is_group_expanded(&item.path) {
                        self.collect_targets(&group.children, targets);
                    }
                }
                body if body.is_expandable() => {
                    targets.push(FocusTarget::Leaf(item.path.clone()))
                }
                _ => {}
            }
        }
    }

    pub fn selected_target(&self, items: &[FormItem]) -> Option<FocusTarget> {
        self.focus_targets(items).into_iter().nth(self.selected)
    }

    pub fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self, count: usize) {
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Keep the cursor inside `0..count` after the target list shrinks.
    pub fn clamp_selection(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Toggle whatever the cursor is on.
    pub fn toggle_selected(&mut self, items: &[FormItem]) -> Option<FocusTarget> {
        let target = self.selected_target(items)?;
        match &target {
            FocusTarget::Group(path) => {
                self.toggle_group(path);
            }
            FocusTarget::Leaf(path) => {
                self.toggle_leaf(path);
            }
        }
        let count = self.focus_targets(items).len();
        self.clamp_selection(count);
        Some(target)
    }
}
