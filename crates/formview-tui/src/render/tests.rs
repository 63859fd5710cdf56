//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use formview_app::config::Settings;
use formview_app::{process_message, AppState, Message};
use formview_core::{FieldDescriptor as D, FieldMap};
use serde_json::json;

fn create_base_state() -> AppState {
    let config = FieldMap::new()
        .with("name", D::text("Name"))
        .with(
            "basic",
            D::group(
                "Basic Info",
                FieldMap::new()
                    .with("email", D::text("Email"))
                    .with("bio", D::area("Bio").rows(1)),
            )
            .expand(true),
        );
    AppState::new(
        "/data/user.json",
        "/views/user.toml",
        Settings::default(),
        config,
        json!({"name": "Alice", "email": "alice@example.com", "bio": "line one\nline two"}),
    )
}

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_full_screen_layout() {
    let mut state = create_base_state();
    let term = render_screen(&mut state);

    assert!(term.line_contains(1, "user.json"));
    assert!(term.line_contains(1, "view: user.toml"));
    assert!(term.buffer_contains("Alice"));
    assert!(term.buffer_contains("Basic Info"));
    assert!(term.buffer_contains("alice@example.com"));
    assert!(term.line_contains(23, "[q] Quit"));
}

#[test]
fn test_collapse_through_messages() {
    let mut state = create_base_state();

    // first focus target is the "Basic Info" header
    process_message(&mut state, Message::ToggleSelected);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Basic Info"));
    assert!(term.buffer_contains("[Expand]"));
    assert!(!term.buffer_contains("alice@example.com"));
}

#[test]
fn test_expand_paragraph_through_messages() {
    let mut state = create_base_state();

    process_message(&mut state, Message::SelectNext);
    process_message(&mut state, Message::ToggleSelected);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("line two"));
    assert!(term.buffer_contains("[Collapse]"));
}

#[test]
fn test_reload_error_in_footer() {
    let mut state = create_base_state();
    process_message(&mut state, Message::Reload);

    let term = render_screen(&mut state);
    assert!(term.line_contains(23, "Reload failed"));
}
