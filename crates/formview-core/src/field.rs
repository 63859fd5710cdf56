//! # Field Descriptors
//!
//! The declarative view config: an ordered tree of [`FieldDescriptor`]s keyed
//! by field name. Leaves name one presentation primitive; group nodes carry
//! their own [`FieldMap`] of children.
//!
//! The tree is presentation-only. Children of a group look up their key in
//! the same top-level record as their parent, so one flat record can be shown
//! under any grouping.
//!
//! Config files use the tag names of [`FieldType`]:
//!
//! ```toml
//! [name]
//! type = "Text"
//! label = "Name"
//!
//! [owner]
//! type = "GroupType2"
//! label = "Owner"
//!
//! [owner.children.email]
//! type = "Text"
//! label = "Email"
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// FieldType
// ============================================================================

/// Closed set of presentation primitives and containers the dispatcher knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    BooleanText,
    AreaText,
    SelectText,
    TagText,
    GroupType,
    GroupType2,
    Custom,
}

impl FieldType {
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::BooleanText,
        FieldType::AreaText,
        FieldType::SelectText,
        FieldType::TagText,
        FieldType::GroupType,
        FieldType::GroupType2,
        FieldType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::BooleanText => "BooleanText",
            FieldType::AreaText => "AreaText",
            FieldType::SelectText => "SelectText",
            FieldType::TagText => "TagText",
            FieldType::GroupType => "GroupType",
            FieldType::GroupType2 => "GroupType2",
            FieldType::Custom => "Custom",
        }
    }

    /// Resolve a config tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    pub fn is_group(&self) -> bool {
        matches!(self, FieldType::GroupType | FieldType::GroupType2)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Descriptor parameters
// ============================================================================

/// A `{label, value}` pair used by `SelectText` lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Where the expand/collapse affordance of a truncated paragraph sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandPlacement {
    /// On its own row below the text
    #[default]
    Bottom,
    /// Inline, after the last visible line
    End,
}

/// Group container layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupVariant {
    /// `GroupType`: title with a line separator. The toggle is shown only
    /// when the descriptor's `expand` flag is set.
    Separator,
    /// `GroupType2`: caret + title with padded children. Always toggles.
    Caret,
}

impl GroupVariant {
    pub fn field_type(&self) -> FieldType {
        match self {
            GroupVariant::Separator => FieldType::GroupType,
            GroupVariant::Caret => FieldType::GroupType2,
        }
    }
}

/// Caller-supplied content for `Custom` descriptors.
///
/// The core never looks inside. Front ends downcast to the concrete types
/// they can draw; content loaded from config files is always a `String`.
#[derive(Clone)]
pub struct CustomContent(Arc<dyn Any + Send + Sync>);

impl CustomContent {
    pub fn new<T: Any + Send + Sync>(content: T) -> Self {
        Self(Arc::new(content))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Shortcut for string content
    pub fn as_str(&self) -> Option<&str> {
        self.downcast_ref::<String>().map(String::as_str)
    }
}

impl fmt::Debug for CustomContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.debug_tuple("CustomContent").field(&s).finish(),
            None => f.write_str("CustomContent(<opaque>)"),
        }
    }
}

/// Identity comparison: two handles are equal when they share content.
impl PartialEq for CustomContent {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// ============================================================================
// FieldDefaults
// ============================================================================

/// Fallbacks for primitive parameters a descriptor leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefaults {
    /// Visible lines of a collapsed `AreaText`
    #[serde(default = "default_area_rows")]
    pub area_rows: usize,

    /// Visible pill rows of a collapsed `TagText`
    #[serde(default = "default_tag_min_row")]
    pub tag_min_row: usize,

    /// Character cut for a single `TagText` pill
    #[serde(default = "default_tag_max_text_length")]
    pub tag_max_text_length: usize,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            area_rows: default_area_rows(),
            tag_min_row: default_tag_min_row(),
            tag_max_text_length: default_tag_max_text_length(),
        }
    }
}

fn default_area_rows() -> usize {
    3
}

fn default_tag_min_row() -> usize {
    3
}

fn default_tag_max_text_length() -> usize {
    15
}

// ============================================================================
// FieldKind / FieldDescriptor
// ============================================================================

/// Variant-specific payload of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    BooleanText,
    AreaText {
        rows: Option<usize>,
        placement: ExpandPlacement,
    },
    SelectText {
        options: Vec<SelectOption>,
    },
    TagText {
        value_key: Option<String>,
        min_row: Option<usize>,
        max_text_length: Option<usize>,
    },
    Group {
        variant: GroupVariant,
        /// Gates the toggle of [`GroupVariant::Separator`]; ignored by
        /// [`GroupVariant::Caret`]. Groups always start expanded.
        expand: bool,
        children: FieldMap,
    },
    Custom(Option<CustomContent>),
    /// A config tag outside the closed set. Renders nothing.
    Unknown(String),
}

/// A node of the view config tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label, FieldKind::Text)
    }

    pub fn boolean(label: impl Into<String>) -> Self {
        Self::new(label, FieldKind::BooleanText)
    }

    pub fn area(label: impl Into<String>) -> Self {
        Self::new(
            label,
            FieldKind::AreaText {
                rows: None,
                placement: ExpandPlacement::default(),
            },
        )
    }

    pub fn select(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(label, FieldKind::SelectText { options })
    }

    pub fn tags(label: impl Into<String>) -> Self {
        Self::new(
            label,
            FieldKind::TagText {
                value_key: None,
                min_row: None,
                max_text_length: None,
            },
        )
    }

    /// `GroupType` container
    pub fn group(label: impl Into<String>, children: FieldMap) -> Self {
        Self::new(
            label,
            FieldKind::Group {
                variant: GroupVariant::Separator,
                expand: false,
                children,
            },
        )
    }

    /// `GroupType2` container
    pub fn group2(label: impl Into<String>, children: FieldMap) -> Self {
        Self::new(
            label,
            FieldKind::Group {
                variant: GroupVariant::Caret,
                expand: false,
                children,
            },
        )
    }

    pub fn custom(label: impl Into<String>, content: CustomContent) -> Self {
        Self::new(label, FieldKind::Custom(Some(content)))
    }

    // ─────────────────────────────────────────────────────────────
    // Parameter builders (ignored for kinds that don't take them)
    // ─────────────────────────────────────────────────────────────

    pub fn rows(mut self, value: usize) -> Self {
        if let FieldKind::AreaText { rows, .. } = &mut self.kind {
            *rows = Some(value);
        }
        self
    }

    pub fn placement(mut self, value: ExpandPlacement) -> Self {
        if let FieldKind::AreaText { placement, .. } = &mut self.kind {
            *placement = value;
        }
        self
    }

    pub fn value_key(mut self, key: impl Into<String>) -> Self {
        if let FieldKind::TagText { value_key, .. } = &mut self.kind {
            *value_key = Some(key.into());
        }
        self
    }

    pub fn min_row(mut self, value: usize) -> Self {
        if let FieldKind::TagText { min_row, .. } = &mut self.kind {
            *min_row = Some(value);
        }
        self
    }

    pub fn max_text_length(mut self, value: usize) -> Self {
        if let FieldKind::TagText {
            max_text_length, ..
        } = &mut self.kind
        {
            *max_text_length = Some(value);
        }
        self
    }

    pub fn expand(mut self, value: bool) -> Self {
        if let FieldKind::Group { expand, .. } = &mut self.kind {
            *expand = value;
        }
        self
    }

    /// Declared type tag, `None` for unknown tags.
    pub fn field_type(&self) -> Option<FieldType> {
        Some(match &self.kind {
            FieldKind::Text => FieldType::Text,
            FieldKind::BooleanText => FieldType::BooleanText,
            FieldKind::AreaText { .. } => FieldType::AreaText,
            FieldKind::SelectText { .. } => FieldType::SelectText,
            FieldKind::TagText { .. } => FieldType::TagText,
            FieldKind::Group { variant, .. } => variant.field_type(),
            FieldKind::Custom(_) => FieldType::Custom,
            FieldKind::Unknown(_) => return None,
        })
    }
}

// ============================================================================
// FieldMap
// ============================================================================

/// Ordered `field name -> descriptor` mapping. Iteration order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, FieldDescriptor)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, descriptor: FieldDescriptor) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = descriptor,
            None => self.entries.push((key, descriptor)),
        }
    }

    /// Builder form of [`FieldMap::insert`]
    pub fn with(mut self, key: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.insert(key, descriptor);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldDescriptor)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, FieldDescriptor)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (key, descriptor) in iter {
            map.insert(key, descriptor);
        }
        map
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of field descriptors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldMap, A::Error> {
                let mut map = FieldMap::new();
                while let Some((key, descriptor)) =
                    access.next_entry::<String, FieldDescriptor>()?
                {
                    map.insert(key, descriptor);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

/// Wire form of a descriptor, before the tag is resolved.
#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    expand: bool,
    #[serde(default)]
    children: Option<FieldMap>,
    #[serde(default)]
    options: Vec<SelectOption>,
    #[serde(default, alias = "valueKey")]
    value_key: Option<String>,
    #[serde(default)]
    rows: Option<usize>,
    #[serde(default)]
    placement: ExpandPlacement,
    #[serde(default, alias = "minRow")]
    min_row: Option<usize>,
    #[serde(default, alias = "maxTextLength")]
    max_text_length: Option<usize>,
    #[serde(default)]
    content: Option<String>,
}

impl From<RawDescriptor> for FieldDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        let kind = match FieldType::from_tag(&raw.field_type) {
            Some(FieldType::Text) => FieldKind::Text,
            Some(FieldType::BooleanText) => FieldKind::BooleanText,
            Some(FieldType::AreaText) => FieldKind::AreaText {
                rows: raw.rows,
                placement: raw.placement,
            },
            Some(FieldType::SelectText) => FieldKind::SelectText {
                options: raw.options,
            },
            Some(FieldType::TagText) => FieldKind::TagText {
                value_key: raw.value_key,
                min_row: raw.min_row,
                max_text_length: raw.max_text_length,
            },
            Some(FieldType::GroupType) => FieldKind::Group {
                variant: GroupVariant::Separator,
                expand: raw.expand,
                children: raw.children.unwrap_or_default(),
            },
            Some(FieldType::GroupType2) => FieldKind::Group {
                variant: GroupVariant::Caret,
                expand: raw.expand,
                children: raw.children.unwrap_or_default(),
            },
            Some(FieldType::Custom) => FieldKind::Custom(raw.content.map(CustomContent::new)),
            None => FieldKind::Unknown(raw.field_type),
        };
        FieldDescriptor {
            label: raw.label,
            kind,
        }
    }
}

impl<'de> Deserialize<'de> for FieldDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawDescriptor::deserialize(deserializer).map(FieldDescriptor::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_value() {
        let map: FieldMap = serde_json::from_value(serde_json::json!({
            "about": {"type": "AreaText", "label": "About", "rows": 2, "placement": "end"}
        }))
        .unwrap();
        assert_eq!(
            map.get("about").unwrap().kind,
            FieldKind::AreaText {
                rows: Some(2),
                placement: ExpandPlacement::End
            }
        );
    }

    #[test]
    fn test_field_type_tags_round_trip() {
        for ty in FieldType::ALL {
            assert_eq!(FieldType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(FieldType::from_tag("text"), None);
        assert_eq!(FieldType::from_tag("Table"), None);
    }

    #[test]
    fn test_group_types() {
        assert!(FieldType::GroupType.is_group());
        assert!(FieldType::GroupType2.is_group());
        assert!(!FieldType::TagText.is_group());
    }

    #[test]
    fn test_field_map_keeps_insertion_order() {
        let map = FieldMap::new()
            .with("zeta", FieldDescriptor::text("Z"))
            .with("alpha", FieldDescriptor::text("A"))
            .with("mid", FieldDescriptor::text("M"));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_field_map_replace_keeps_position() {
        let mut map = FieldMap::new()
            .with("a", FieldDescriptor::text("A"))
            .with("b", FieldDescriptor::text("B"));
        map.insert("a", FieldDescriptor::boolean("A2"));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a").unwrap().label, "A2");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_builders_ignore_foreign_params() {
        let d = FieldDescriptor::text("Name").rows(5).value_key("x").expand(true);
        assert_eq!(d.kind, FieldKind::Text);

        let d = FieldDescriptor::area("Notes")
            .rows(5)
            .placement(ExpandPlacement::End);
        assert_eq!(
            d.kind,
            FieldKind::AreaText {
                rows: Some(5),
                placement: ExpandPlacement::End
            }
        );
    }

    #[test]
    fn test_deserialize_json_preserves_document_order() {
        let map: FieldMap = serde_json::from_str(
            r#"{"z": {"type": "Text"}, "a": {"type": "Text"}, "m": {"type": "Text"}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let map: FieldMap = serde_json::from_str(
            r#"{"tags": {"type": "TagText", "label": "Tags", "valueKey": "name", "minRow": 2, "maxTextLength": 3}}"#,
        )
        .unwrap();
        assert_eq!(
            map.get("tags").unwrap().kind,
            FieldKind::TagText {
                value_key: Some("name".to_string()),
                min_row: Some(2),
                max_text_length: Some(3),
            }
        );
    }

    #[test]
    fn test_deserialize_toml_nested_groups() {
        let src = r#"
            [owner]
            type = "GroupType2"
            label = "Owner"

            [owner.children.email]
            type = "Text"
            label = "Email"

            [owner.children.phone]
            type = "Text"
            label = "Phone"

            [flag]
            type = "SelectText"
            label = "Flag"
            options = [{ label = "Yes", value = "Y" }]
        "#;
        let map: FieldMap = toml::from_str(src).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["owner", "flag"]);

        match &map.get("owner").unwrap().kind {
            FieldKind::Group {
                variant, children, ..
            } => {
                assert_eq!(*variant, GroupVariant::Caret);
                let child_keys: Vec<&str> = children.keys().collect();
                assert_eq!(child_keys, vec!["email", "phone"]);
            }
            other => panic!("expected group, got {:?}", other),
        }

        match &map.get("flag").unwrap().kind {
            FieldKind::SelectText { options } => {
                assert_eq!(options, &vec![SelectOption::new("Yes", "Y")]);
            }
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_is_kept_not_rejected() {
        let map: FieldMap =
            serde_json::from_str(r#"{"x": {"type": "Table", "label": "X"}}"#).unwrap();
        let d = map.get("x").unwrap();
        assert_eq!(d.kind, FieldKind::Unknown("Table".to_string()));
        assert_eq!(d.field_type(), None);
    }

    #[test]
    fn test_custom_content_from_config() {
        let map: FieldMap =
            serde_json::from_str(r#"{"c": {"type": "Custom", "content": "hello"}}"#).unwrap();
        match &map.get("c").unwrap().kind {
            FieldKind::Custom(Some(content)) => assert_eq!(content.as_str(), Some("hello")),
            other => panic!("expected custom, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_content_identity_eq() {
        let a = CustomContent::new(42u32);
        let b = a.clone();
        let c = CustomContent::new(42u32);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.downcast_ref::<u32>(), Some(&42));
        assert_eq!(a.as_str(), None);
    }

    #[test]
    fn test_field_defaults() {
        let d = FieldDefaults::default();
        assert_eq!(d.area_rows, 3);
        assert_eq!(d.tag_min_row, 3);
        assert_eq!(d.tag_max_text_length, 15);

        let d: FieldDefaults = toml::from_str("area_rows = 5").unwrap();
        assert_eq!(d.area_rows, 5);
        assert_eq!(d.tag_max_text_length, 15);
    }
}
