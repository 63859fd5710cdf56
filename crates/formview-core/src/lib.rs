//! # formview-core - Descriptor Types and Render Tree
//!
//! Foundation crate for formview. Turns a loosely-typed record plus a
//! declarative tree of field descriptors into a labelled render tree. It has
//! no UI dependencies; front ends draw the resulting [`FormItem`]s.
//!
//! ## Public API
//!
//! ### Descriptors (`field`)
//! - [`FieldType`] - Closed set of primitive/container tags
//! - [`FieldDescriptor`], [`FieldKind`] - One node of the view config
//! - [`FieldMap`] - Ordered `key -> descriptor` mapping
//! - [`FieldDefaults`] - Fallback primitive parameters
//!
//! ### Rendering (`view`, `primitives`, `outline`)
//! - [`render()`] - Tree walker / dispatcher
//! - [`FormItem`], [`RenderNode`] - Render tree
//! - [`to_outline()`] - Plain-text form of a render tree
//!
//! ### Labels (`i18n`)
//! - [`Translate`] - Injected label lookup
//! - [`Labels`] - Config-backed default table
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use formview_core::prelude::*;
//! ```

pub mod error;
pub mod field;
pub mod i18n;
pub mod logging;
pub mod outline;
pub mod primitives;
pub mod value;
pub mod view;

/// Prelude for common imports used throughout all formview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use field::{
    CustomContent, ExpandPlacement, FieldDefaults, FieldDescriptor, FieldKind, FieldMap,
    FieldType, GroupVariant, SelectOption,
};
pub use i18n::{LabelKey, Labels, Translate};
pub use outline::to_outline;
pub use value::PLACEHOLDER;
pub use view::{render, FormItem, GroupNode, ParagraphNode, RenderContext, RenderNode, TagsNode};
