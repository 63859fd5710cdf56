//! Application state (Model in TEA pattern)

use std::path::{Path, PathBuf};

use formview_core::prelude::*;
use formview_core::{render, FieldMap, FormItem, RenderContext};
use serde_json::Value;

use crate::config::Settings;
use crate::loader;
use crate::view_state::{FocusTarget, FormViewState};

/// One-line message shown in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Where the record was loaded from; re-read on reload
    pub record_path: PathBuf,
    pub view_path: PathBuf,

    pub settings: Settings,
    pub config: FieldMap,
    pub record: Value,

    /// Render tree of `record` under `config`
    pub items: Vec<FormItem>,

    /// Expansion, focus and scroll state of the form
    pub view: FormViewState,

    /// Result of the last reload
    pub status: Option<StatusMessage>,

    pub should_quit: bool,

    /// Error that ended the session; handed back to the caller on exit
    pub exit_error: Option<Error>,
}

impl AppState {
    pub fn new(
        record_path: impl Into<PathBuf>,
        view_path: impl Into<PathBuf>,
        settings: Settings,
        config: FieldMap,
        record: Value,
    ) -> Self {
        let mut state = Self {
            record_path: record_path.into(),
            view_path: view_path.into(),
            settings,
            config,
            record,
            items: Vec::new(),
            view: FormViewState::new(),
            status: None,
            should_quit: false,
            exit_error: None,
        };
        state.rerender();
        state
    }

    /// Load the view config and record from disk.
    pub fn load(record_path: &Path, view_path: &Path, settings: Settings) -> Result<Self> {
        let config = loader::load_view_config(view_path)?;
        let record = loader::load_record(record_path)?;
        info!(
            "Viewing {} with {}",
            record_path.display(),
            view_path.display()
        );
        Ok(Self::new(record_path, view_path, settings, config, record))
    }

    /// Rebuild the render tree and reconcile view state with it.
    pub fn rerender(&mut self) {
        let ctx = RenderContext::new(&self.settings.labels).with_defaults(self.settings.defaults);
        self.items = render(&self.record, &self.config, &ctx);
        self.view.sync_leaves(&self.items);
        let count = self.focus_targets().len();
        self.view.clamp_selection(count);
    }

    /// Swap in a new record, then re-render and re-expand every group.
    pub fn replace_record(&mut self, record: Value) {
        self.record = record;
        self.rerender();
        self.view.expand_all_groups();
    }

    /// Re-read the record from `record_path`.
    pub fn reload(&mut self) -> Result<()> {
        let record = loader::load_record(&self.record_path)?;
        self.replace_record(record);
        Ok(())
    }

    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        self.view.focus_targets(&self.items)
    }

    pub fn selected_target(&self) -> Option<FocusTarget> {
        self.view.selected_target(&self.items)
    }
}
