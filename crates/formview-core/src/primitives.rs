//! Presentation primitives as pure value -> text functions.
//!
//! Each function takes the bound `data[key]` (absent is `None`) plus its own
//! parameters and never fails; degenerate input falls back to
//! [`PLACEHOLDER`] or the "no" label.

use serde_json::Value;

use crate::field::SelectOption;
use crate::i18n::{LabelKey, Translate};
use crate::value::{display_value, is_present, values_equal, PLACEHOLDER};

/// `Text`: the value as a plain string, `--` when falsy.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_present(Some(v)) => display_value(v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `BooleanText`: the "yes" label for truthy values, "no" otherwise.
pub fn boolean_text(value: Option<&Value>, translator: &dyn Translate) -> String {
    if is_present(value) {
        translator.translate(LabelKey::Yes)
    } else {
        translator.translate(LabelKey::No)
    }
}

/// `SelectText`: label of the first option whose value equals the bound
/// value, `--` when nothing matches.
pub fn select_text(value: Option<&Value>, options: &[SelectOption]) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };
    options
        .iter()
        .find(|opt| values_equal(&opt.value, value))
        .map(|opt| opt.label.as_str())
        .filter(|label| !label.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// `AreaText` body text, `--` when falsy.
pub fn area_text(value: Option<&Value>) -> String {
    text(value)
}

/// `TagText`: one display string per array element.
///
/// Object elements are read through `value_key` when given. Each string is
/// cut with [`truncate_tag`]. Anything but a non-empty array yields no tags.
pub fn tag_texts(
    value: Option<&Value>,
    value_key: Option<&str>,
    max_text_length: usize,
) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let extracted = match (value_key, item) {
                (Some(key), Value::Object(obj)) => obj.get(key).map(display_value),
                _ => Some(display_value(item)),
            };
            truncate_tag(&extracted.unwrap_or_default(), max_text_length)
        })
        .collect()
}

/// Hard character cut followed by a literal `...`. Not word-aware.
pub fn truncate_tag(s: &str, max_text_length: usize) -> String {
    if s.chars().count() > max_text_length {
        let cut: String = s.chars().take(max_text_length).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Labels, MockTranslate};
    use serde_json::json;

    #[test]
    fn test_text_fallbacks() {
        assert_eq!(text(Some(&json!("Alice"))), "Alice");
        assert_eq!(text(Some(&json!(7))), "7");
        assert_eq!(text(None), "--");
        assert_eq!(text(Some(&json!(null))), "--");
        assert_eq!(text(Some(&json!(""))), "--");
        assert_eq!(text(Some(&json!(0))), "--");
    }

    #[test]
    fn test_boolean_text_uses_injected_translator() {
        let mut tr = MockTranslate::new();
        tr.expect_translate()
            .withf(|key| *key == LabelKey::Yes)
            .times(1)
            .returning(|_| "oui".to_string());
        tr.expect_translate()
            .withf(|key| *key == LabelKey::No)
            .times(2)
            .returning(|_| "non".to_string());

        assert_eq!(boolean_text(Some(&json!(1)), &tr), "oui");
        assert_eq!(boolean_text(Some(&json!(0)), &tr), "non");
        assert_eq!(boolean_text(None, &tr), "non");
    }

    #[test]
    fn test_boolean_text_defaults() {
        let labels = Labels::default();
        assert_eq!(boolean_text(Some(&json!(true)), &labels), "Yes");
        assert_eq!(boolean_text(Some(&json!(false)), &labels), "No");
    }

    #[test]
    fn test_select_text_matches_option() {
        let options = vec![
            SelectOption::new("Draft", 0),
            SelectOption::new("Published", 1),
        ];
        assert_eq!(select_text(Some(&json!(1)), &options), "Published");
        assert_eq!(select_text(Some(&json!(0)), &options), "Draft");
        assert_eq!(select_text(Some(&json!(2)), &options), "--");
        assert_eq!(select_text(None, &options), "--");
        assert_eq!(select_text(Some(&json!(1)), &[]), "--");
    }

    #[test]
    fn test_select_text_is_strict() {
        let options = vec![SelectOption::new("One", "1")];
        assert_eq!(select_text(Some(&json!(1)), &options), "--");
        assert_eq!(select_text(Some(&json!("1")), &options), "One");
    }

    #[test]
    fn test_select_text_float_matches_integer_option() {
        let options = vec![SelectOption::new("One", 1), SelectOption::new("Half", 0.5)];
        assert_eq!(select_text(Some(&json!(1.0)), &options), "One");
        assert_eq!(select_text(Some(&json!(0.5)), &options), "Half");
        assert_eq!(text(Some(&json!(1.0))), "1");
    }

    #[test]
    fn test_select_text_first_match_wins() {
        let options = vec![SelectOption::new("A", "x"), SelectOption::new("B", "x")];
        assert_eq!(select_text(Some(&json!("x")), &options), "A");
    }

    #[test]
    fn test_truncate_tag() {
        assert_eq!(truncate_tag("Engineering", 3), "Eng...");
        assert_eq!(truncate_tag("Eng", 3), "Eng");
        assert_eq!(truncate_tag("", 3), "");
        assert_eq!(truncate_tag("数据治理平台", 4), "数据治理...");
    }

    #[test]
    fn test_tag_texts_scalars() {
        let value = json!(["alpha", 2, true]);
        assert_eq!(tag_texts(Some(&value), None, 15), vec!["alpha", "2", "true"]);
    }

    #[test]
    fn test_tag_texts_objects_with_value_key() {
        let value = json!([{"name": "Engineering"}, {"name": "Ops"}, {"other": 1}]);
        assert_eq!(
            tag_texts(Some(&value), Some("name"), 3),
            vec!["Eng...", "Ops", ""]
        );
    }

    #[test]
    fn test_tag_texts_degenerate_input() {
        assert!(tag_texts(None, None, 15).is_empty());
        assert!(tag_texts(Some(&json!([])), None, 15).is_empty());
        assert!(tag_texts(Some(&json!("a,b")), None, 15).is_empty());
    }
}
