//! Auto-forms
//!
//! Metadata-driven form rendering: the [`FieldSpec`] vocabulary, the
//! [`FieldValue`]/[`FormValue`] contract replacing runtime reflection with
//! tagged variants, the type-erased [`FieldContext`], the order-significant
//! renderer chain and the [`auto`] entry point assembling all of it into a
//! bound, editable view.

pub mod auto;
pub mod context;
pub mod renderers;
pub mod spec;
pub mod value;

pub use auto::{AutoOptions, auto};
pub use context::{FieldContext, SourceLoader};
pub use renderers::{Renderer, default_renderers};
pub use spec::{FieldSpec, WidgetStyle, parse_values_json};
pub use value::{FieldKind, FieldValue, FormValue};
