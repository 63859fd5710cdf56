//! Helpers for reading loosely-typed record values.
//!
//! Records come from REST payloads where "missing", `null`, `0` and `""` are
//! all used to mean "nothing to show". The primitives treat them uniformly
//! through [`is_truthy`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::{Number, Value};

/// Shown for values that are absent or falsy.
pub const PLACEHOLDER: &str = "--";

/// JavaScript-style truthiness.
///
/// `null`, `false`, `0` and `""` are falsy; arrays and objects are truthy
/// even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Truthiness of an optional value; absent is falsy.
pub fn is_present(value: Option<&Value>) -> bool {
    value.map(is_truthy).unwrap_or(false)
}

/// Plain-string form of a value.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Numbers print the way a JS number does: `1.0` is `1`.
fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.is_finite() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Strict equality with JS number semantics: `1`, `1.0` and `1e0` are the
/// same value. Everything else compares structurally.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// `data[key]` for object records. Non-object records have no keys.
pub fn lookup<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.as_object().and_then(|obj| obj.get(key))
}

/// Stable hash of a bound value, used to notice that a leaf's value changed
/// between two render passes.
pub fn fingerprint(value: Option<&Value>) -> u64 {
    let mut hasher = DefaultHasher::new();
    match value {
        Some(v) => {
            1u8.hash(&mut hasher);
            v.to_string().hash(&mut hasher);
        }
        None => 0u8.hash(&mut hasher),
    }
    hasher.finish()
}
