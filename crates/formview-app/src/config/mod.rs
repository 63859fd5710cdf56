//! Configuration file parsing for formview
//!
//! Supports:
//! - `.formview/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{load_settings, settings_path};
pub use types::*;
