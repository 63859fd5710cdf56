//! formview-app - Application state and orchestration for formview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the form
//! viewer: settings and file loading, the parent-owned expansion state of the
//! form, and the message/update loop driven by the TUI.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod loader;
pub mod message;
pub mod state;
pub mod view_state;

// Re-export primary types
pub use handler::{process_message, update};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, StatusMessage};
pub use view_state::{ExpandEvent, FocusTarget, FormViewState};
