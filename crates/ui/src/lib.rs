//! # NAGO UI
//!
//! Presentation components for the NAGO platform.
//!
//! This crate is the generic heart of the server-driven UI stack:
//!
//! - **Pager**: the filter-and-paginate primitive, comparator-driven
//!   sorting with a cache slot, the selection `Model` and the prev/next
//!   pager widget
//! - **DataView**: table, card and list styles over one model, with a
//!   shared action bar for search, bulk selection actions and row actions
//! - **Form**: the metadata-driven auto-form renderer chain over any
//!   `FormValue`
//!
//! All components are stateless per render: they rebuild from the window's
//! keyed state slots every pass, which is what lets selection, sort and
//! widget values survive pagination and re-renders.

pub mod dataview;
pub mod form;
pub mod pager;

// Re-export commonly used items at crate root
pub use dataview::{Data, DataView, Field, Style};
pub use form::{AutoOptions, FieldSpec, FieldValue, FormValue, auto};
pub use pager::{Model, ModelOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
