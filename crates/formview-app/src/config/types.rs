//! Configuration types for formview
//!
//! Defines:
//! - `Settings` - Global application settings (.formview/config.toml)
//! - `UiSettings` - Terminal presentation knobs
//! - `IconMode` - Glyph set selection

use formview_core::prelude::*;
use formview_core::{FieldDefaults, Labels};
use serde::{Deserialize, Serialize};

/// Application settings (.formview/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    /// Translation table for the renderer's fixed labels
    #[serde(default)]
    pub labels: Labels,

    /// Fallback parameters for descriptors that leave them unset
    #[serde(default)]
    pub defaults: FieldDefaults,
}

impl Settings {
    /// Reject values the form cannot be laid out with.
    pub fn validate(&self) -> Result<()> {
        if self.ui.label_width == 0 {
            return Err(Error::config("ui.label_width must be at least 1"));
        }
        if self.defaults.area_rows == 0 {
            return Err(Error::config("defaults.area_rows must be at least 1"));
        }
        if self.defaults.tag_min_row == 0 {
            return Err(Error::config("defaults.tag_min_row must be at least 1"));
        }
        Ok(())
    }
}

/// Icon rendering mode
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Glyph set for carets and toggles
    #[serde(default)]
    pub icons: IconMode,

    /// Width of the label column in the form
    #[serde(default = "default_label_width")]
    pub label_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            label_width: default_label_width(),
        }
    }
}

fn default_label_width() -> u16 {
    18
}
