//! Label translation seam.
//!
//! The renderer never reaches for a global lookup table. Every user-facing
//! fixed label goes through a [`Translate`] implementation handed in by the
//! caller; [`Labels`] is the config-backed default.

use serde::{Deserialize, Serialize};

/// Fixed labels the renderer itself produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Truthy `BooleanText`
    Yes,
    /// Falsy `BooleanText`
    No,
    /// Affordance on collapsed content
    Expand,
    /// Affordance on expanded content
    Collapse,
}

/// Resolves a [`LabelKey`] to display text.
#[cfg_attr(test, mockall::automock)]
pub trait Translate {
    fn translate(&self, key: LabelKey) -> String;
}

/// Label table loaded from the `[labels]` settings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_yes")]
    pub yes: String,

    #[serde(default = "default_no")]
    pub no: String,

    #[serde(default = "default_expand")]
    pub expand: String,

    #[serde(default = "default_collapse")]
    pub collapse: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            yes: default_yes(),
            no: default_no(),
            expand: default_expand(),
            collapse: default_collapse(),
        }
    }
}

fn default_yes() -> String {
    "Yes".to_string()
}

fn default_no() -> String {
    "No".to_string()
}

fn default_expand() -> String {
    "Expand".to_string()
}

fn default_collapse() -> String {
    "Collapse".to_string()
}

impl Translate for Labels {
    fn translate(&self, key: LabelKey) -> String {
        match key {
            LabelKey::Yes => self.yes.clone(),
            LabelKey::No => self.no.clone(),
            LabelKey::Expand => self.expand.clone(),
            LabelKey::Collapse => self.collapse.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = Labels::default();
        assert_eq!(labels.translate(LabelKey::Yes), "Yes");
        assert_eq!(labels.translate(LabelKey::No), "No");
        assert_eq!(labels.translate(LabelKey::Expand), "Expand");
        assert_eq!(labels.translate(LabelKey::Collapse), "Collapse");
    }

    #[test]
    fn test_partial_label_table() {
        let labels: Labels = toml::from_str(r#"yes = "是""#).unwrap();
        assert_eq!(labels.translate(LabelKey::Yes), "是");
        assert_eq!(labels.translate(LabelKey::No), "No");
    }
}
