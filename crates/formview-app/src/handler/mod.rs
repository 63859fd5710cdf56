//! Main update function and handler dispatch

mod keys;


pub use keys::handle_key;

use formview_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, StatusMessage};

/// Process a message and optionally return a follow-up message
pub fn update(state: &mut AppState, message: Message) -> Option<Message> {
    match message {
        Message::Key(key) => handle_key(key),

        Message::Tick => None,

        Message::Quit => {
            state.should_quit = true;
            None
        }

        Message::SelectNext => {
            let count = state.focus_targets().len();
            state.view.select_next(count);
            None
        }

        Message::SelectPrevious => {
            let count = state.focus_targets().len();
            state.view.select_previous(count);
            None
        }

        Message::SelectFirst => {
            state.view.selected = 0;
            None
        }

        Message::SelectLast => {
            let count = state.focus_targets().len();
            state.view.selected = count.saturating_sub(1);
            None
        }

        Message::ToggleSelected => {
            if let Some(target) = state.view.toggle_selected(&state.items) {
                trace!("Toggled {:?}", target);
            }
            None
        }

        Message::ExpandAllGroups => {
            state.view.expand_all_groups();
            None
        }

        Message::Reload => {
            match state.reload() {
                Ok(()) => {
                    info!("Reloaded {}", state.record_path.display());
                    state.status = Some(StatusMessage::Info("Reloaded".to_string()));
                }
                Err(e) if e.is_recoverable() => {
                    warn!("Reload failed: {}", e);
                    state.status = Some(StatusMessage::Error(format!("Reload failed: {}", e)));
                }
                Err(e) => {
                    error!("Record is no longer readable: {:?}", e);
                    state.exit_error = Some(e);
                    return Some(Message::Quit);
                }
            }
            None
        }
    }
}

/// Apply a message and every follow-up it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(message) = next {
        next = update(state, message);
    }
}
