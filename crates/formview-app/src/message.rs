//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Everything that can change [`crate::AppState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Raw key press, mapped to a follow-up message by the handler
    Key(InputKey),
    /// Periodic wake-up from the event loop
    Tick,
    Quit,

    // Focus
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    /// Expand or collapse the focused group or leaf
    ToggleSelected,
    /// Re-expand every collapsed group
    ExpandAllGroups,
    /// Re-read the record from disk and re-render
    Reload,
}
