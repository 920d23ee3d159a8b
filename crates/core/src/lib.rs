//! # NAGO Core
//!
//! Core contracts for the NAGO platform.
//!
//! This crate provides the foundational building blocks used throughout
//! the NAGO presentation stack, including:
//!
//! - **Identity & finders**: `Identifiable`, `EntityKey`, the `DataSource`
//!   finder pair and in-memory adapters
//! - **Pagination**: `Page`, `PageRequest`, size classes, sort direction
//! - **State**: the session-scoped, keyed, observable `StateScope` store
//! - **Ambient context**: `Window`, `Bundle` and `Settings`
//! - **Errors**: unified error handling with `NagoError` and `NagoResult`
//!

pub mod bundle;
pub mod error;
pub mod settings;
pub mod state;
pub mod traits;
pub mod types;
pub mod window;

// Re-export commonly used items at crate root
pub use bundle::Bundle;
pub use error::{NagoError, NagoResult, ResultExt};
pub use settings::Settings;
pub use state::{State, StateScope, StateValue};
pub use traits::{DataSource, EntityKey, FnSource, Identifiable, KeySeq, VecSource};
pub use types::{Page, PageRequest, SizeClass, SortDirection, page_count};
pub use window::{Trigger, Window};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
