//! Composite nodes
//!
//! Higher-order nodes the data-view styles assemble: tables with sortable
//! headers, list items with slot layout, dropdown menus and confirmation
//! dialogs.

use crate::node::View;
use crate::widgets::Button;
use serde::{Deserialize, Serialize};

// ============================================================================
// Table
// ============================================================================

/// One column header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub header: View,
}

impl TableColumn {
    /// Create a column from its header view
    pub fn new(header: impl Into<View>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<View>,
    /// Trigger key fired when the row itself is activated
    pub action: Option<String>,
}

impl TableRow {
    /// Create a row from its cells
    pub fn new(cells: Vec<View>) -> Self {
        Self {
            cells,
            action: None,
        }
    }

    /// Set the trigger key fired on row activation
    pub fn action(mut self, key: impl Into<String>) -> Self {
        self.action = Some(key.into());
        self
    }
}

/// Tabular layout with header row, body rows and an optional footer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub footer: Option<Box<View>>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a row
    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Set the footer view
    pub fn footer(mut self, footer: impl Into<View>) -> Self {
        self.footer = Some(Box::new(footer.into()));
        self
    }
}

// ============================================================================
// ListItem
// ============================================================================

/// One row of the list style: leading / headline / supporting / trailing
/// slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub leading: Option<Box<View>>,
    pub headline: Box<View>,
    pub supporting: Option<Box<View>>,
    pub trailing: Option<Box<View>>,
    /// Trigger key fired when the item is activated
    pub action: Option<String>,
    /// Visually emphasized (e.g. the current navigation target)
    pub highlighted: bool,
}

impl ListItem {
    /// Create an item from its headline view
    pub fn new(headline: impl Into<View>) -> Self {
        Self {
            leading: None,
            headline: Box::new(headline.into()),
            supporting: None,
            trailing: None,
            action: None,
            highlighted: false,
        }
    }

    /// Set the leading slot
    pub fn leading(mut self, view: impl Into<View>) -> Self {
        self.leading = Some(Box::new(view.into()));
        self
    }

    /// Set the supporting slot
    pub fn supporting(mut self, view: impl Into<View>) -> Self {
        self.supporting = Some(Box::new(view.into()));
        self
    }

    /// Set the trailing slot
    pub fn trailing(mut self, view: impl Into<View>) -> Self {
        self.trailing = Some(Box::new(view.into()));
        self
    }

    /// Set the trigger key fired on activation
    pub fn action(mut self, key: impl Into<String>) -> Self {
        self.action = Some(key.into());
        self
    }

    /// Set the highlight flag
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

// ============================================================================
// Menu
// ============================================================================

/// One entry of a dropdown menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub icon: Option<String>,
    /// Trigger key fired when the entry is chosen
    pub action: String,
    pub disabled: bool,
}

impl MenuItem {
    /// Create a menu entry
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action: action.into(),
            disabled: false,
        }
    }

    /// Set the icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Dropdown menu anchored to a labelled button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub label: Option<String>,
    pub icon: Option<String>,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Create an empty menu
    pub fn new() -> Self {
        Self {
            label: None,
            icon: None,
            items: Vec::new(),
        }
    }

    /// Set the anchor label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the anchor icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append an entry
    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Dialog
// ============================================================================

/// Modal confirmation dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub confirm: Button,
    pub cancel: Button,
}

impl Dialog {
    /// Create a dialog with its two buttons
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm: Button,
        cancel: Button,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm,
            cancel,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
