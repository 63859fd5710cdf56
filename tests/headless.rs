//! Integration tests for headless rendering
//!
//! Drive the full load -> render -> outline path from files on disk.

use std::fs;
use std::path::Path;

use formview::headless::render_outline;
use formview::short_message;
use formview_core::Error;
use insta::assert_snapshot;
use tempfile::tempdir;

const RECORD: &str = r#"{
    "name": "Orders",
    "active": 1,
    "level": "H",
    "owner": "",
    "tags": [{"name": "finance"}, {"name": "governance"}],
    "about": "Daily order facts.\nRefreshed nightly."
}"#;

const VIEW_TOML: &str = r#"
[name]
type = "Text"
label = "Name"

[active]
type = "BooleanText"
label = "Active"

[basic]
type = "GroupType"
label = "Basic"
expand = true

[basic.children.level]
type = "SelectText"
label = "Level"
options = [{ label = "Low", value = "L" }, { label = "High", value = "H" }]

[basic.children.owner]
type = "Text"
label = "Owner"

[more]
type = "GroupType2"
label = "More"

[more.children.tags]
type = "TagText"
label = "Tags"
valueKey = "name"
maxTextLength = 6

[more.children.about]
type = "AreaText"
label = "About"
rows = 1
"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_headless_outline_from_toml_view() {
    let temp = tempdir().unwrap();
    let record = write(temp.path(), "record.json", RECORD);
    let view = write(temp.path(), "view.toml", VIEW_TOML);

    let outline = render_outline(&record, &view, temp.path()).unwrap();

    assert_snapshot!(outline, @r"
    Name: Orders
    Active: Yes
    ── Basic ──
    Level: High
    Owner: --
    ▾ More
      Tags: [financ...] [govern...]
      About: Daily order facts.
        Refreshed nightly.
    ");
}

#[test]
fn test_headless_outline_from_json_view_keeps_order() {
    let temp = tempdir().unwrap();
    let record = write(temp.path(), "record.json", r#"{"b": "second", "a": "first"}"#);
    let view = write(
        temp.path(),
        "view.json",
        r#"{"b": {"type": "Text", "label": "B"}, "a": {"type": "Text", "label": "A"}}"#,
    );

    let outline = render_outline(&record, &view, temp.path()).unwrap();
    assert_eq!(outline, "B: second\nA: first");
}

#[test]
fn test_headless_uses_project_labels() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join(".formview")).unwrap();
    write(
        &temp.path().join(".formview"),
        "config.toml",
        "[labels]\nyes = \"Ja\"\nno = \"Nein\"\n",
    );
    let record = write(temp.path(), "record.json", r#"{"on": true, "off": false}"#);
    let view = write(
        temp.path(),
        "view.json",
        r#"{"on": {"type": "BooleanText", "label": "On"}, "off": {"type": "BooleanText", "label": "Off"}}"#,
    );

    let outline = render_outline(&record, &view, temp.path()).unwrap();
    assert_eq!(outline, "On: Ja\nOff: Nein");
}

#[test]
fn test_headless_falsy_record_keeps_labels() {
    let temp = tempdir().unwrap();
    let record = write(temp.path(), "record.json", "null");
    let view = write(temp.path(), "view.toml", VIEW_TOML);

    let outline = render_outline(&record, &view, temp.path()).unwrap();
    assert!(outline.starts_with("Name:\nActive:\n── Basic ──\nLevel:\nOwner:"));
    assert!(!outline.contains("--"));
}

#[test]
fn test_headless_missing_view_is_error() {
    let temp = tempdir().unwrap();
    let record = write(temp.path(), "record.json", "{}");

    let err = render_outline(&record, &temp.path().join("nope.toml"), temp.path()).unwrap_err();
    assert!(matches!(err, Error::ViewNotFound { .. }));

    let message = short_message(&err).unwrap();
    assert!(message.starts_with("formview: View config file not found"));
}

#[test]
fn test_terminal_failures_keep_full_report() {
    assert_eq!(short_message(&Error::TerminalInit("no tty".into())), None);
}

#[test]
fn test_headless_unsupported_view_format() {
    let temp = tempdir().unwrap();
    let record = write(temp.path(), "record.json", "{}");
    let view = write(temp.path(), "view.yaml", "name: {}");

    let err = render_outline(&record, &view, temp.path()).unwrap_err();
    assert!(err.to_string().contains("yaml"));
}
