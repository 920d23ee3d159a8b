//! # NAGO View
//!
//! Typed view-builder tree for the NAGO platform.
//!
//! Pages build a tree of typed view-builder structs; the presentation
//! runtime serializes that tree to the client renderer. This crate owns:
//!
//! - **Nodes**: the `View` enum with layout, text and decoration nodes
//! - **Widgets**: bound input controls addressing state slots by key
//! - **Composites**: tables, list items, menus and dialogs
//! - **Serialization**: the tagged-JSON wire encoding
//!

pub mod composite;
pub mod node;
pub mod serialization;
pub mod widgets;

// Re-export commonly used items at crate root
pub use composite::{Dialog, ListItem, Menu, MenuItem, Table, TableColumn, TableRow};
pub use node::{Badge, Banner, HStack, Icon, Section, Severity, Text, TextStyle, VStack, View};
pub use serialization::{from_json, to_json, to_json_pretty};
pub use widgets::{
    Button, Checkbox, ColorField, DateField, DurationField, FloatField, ImageField, ImageShape,
    IntField, MultiSelectField, SearchField, SelectField, SelectItem, TextField, TimeFrameField,
    Toggle,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
