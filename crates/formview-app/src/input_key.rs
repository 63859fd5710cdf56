//! Terminal-independent key events.
//!
//! The TUI converts crossterm events into `InputKey` so that state handling
//! and its tests never depend on a terminal library.

/// A key press as seen by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Plain character
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_differs_from_plain() {
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
