//! Message bundle for localized UI strings
//!
//! Field labels, supporting texts and the built-in pager/data-view strings
//! resolve through a [`Bundle`]. Unknown keys fall back to the key itself so
//! a missing translation degrades visibly instead of failing.

use std::collections::HashMap;

// ============================================================================
// Bundle
// ============================================================================

/// Key-to-string message table with fallback-to-key resolution
#[derive(Debug, Clone)]
pub struct Bundle {
    messages: HashMap<String, String>,
}

impl Bundle {
    /// Create a bundle pre-filled with the built-in English strings
    pub fn new() -> Self {
        let mut bundle = Self {
            messages: HashMap::new(),
        };
        for (key, message) in BUILTIN_MESSAGES {
            bundle.insert(*key, *message);
        }
        bundle
    }

    /// Create an empty bundle without the built-in strings
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Add or replace a message
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Resolve a key, falling back to the key itself
    pub fn resolve(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve a key and substitute `{count}` with a number
    pub fn resolve_count(&self, key: &str, count: usize) -> String {
        self.resolve(key).replace("{count}", &count.to_string())
    }

    /// Number of messages in the bundle
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check whether the bundle has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (key, message) in iter {
            bundle.insert(key, message);
        }
        bundle
    }
}

/// Built-in strings the pager and data view rely on
const BUILTIN_MESSAGES: &[(&str, &str)] = &[
    ("pager.of", "of"),
    ("pager.prev", "Previous page"),
    ("pager.next", "Next page"),
    ("dataview.search", "Search"),
    ("dataview.selected", "{count} selected"),
    ("dataview.clear", "Clear"),
    ("dataview.new", "New"),
    ("dataview.delete", "Delete"),
    ("dataview.delete.one", "Delete 1 item?"),
    ("dataview.delete.many", "Delete {count} items?"),
    ("dialog.confirm", "Confirm"),
    ("dialog.cancel", "Cancel"),
];

// ============================================================================
// Tests
// ============================================================================
