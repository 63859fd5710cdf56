//! Key bindings for the form view

use crate::input_key::InputKey;
use crate::message::Message;

/// Map a key press to a message
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down | InputKey::Tab => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up | InputKey::BackTab => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home | InputKey::PageUp => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End | InputKey::PageDown => Some(Message::SelectLast),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelected),
        InputKey::Char('e') => Some(Message::ExpandAllGroups),
        InputKey::Char('r') => Some(Message::Reload),

        _ => None,
    }
}
