//! View tree serialization
//!
//! The client renderer consumes the view tree as tagged JSON. This module
//! provides the encoding helpers and the decode counterpart used by tests
//! and tooling.

use crate::node::View;
use serde_json::Error;

/// Serialize a view tree to compact JSON
pub fn to_json(view: &View) -> Result<String, Error> {
    serde_json::to_string(view)
}

/// Serialize a view tree to human-readable JSON
pub fn to_json_pretty(view: &View) -> Result<String, Error> {
    serde_json::to_string_pretty(view)
}

/// Decode a view tree from JSON
pub fn from_json(json: &str) -> Result<View, Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Banner, Text, TextStyle, VStack};
    use crate::widgets::Checkbox;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let view: View = VStack::new()
            .child(Text::new("Customers").style(TextStyle::Title))
            .child(Checkbox::new("list-checkbox-1", true))
            .child(Banner::error("boom"))
            .into();

        let json = to_json(&view).unwrap();
        let decoded = from_json(&json).unwrap();
        assert_eq!(decoded, view);
    }

    #[test]
    fn test_tagged_encoding() {
        let json = to_json(&View::text("hi")).unwrap();
        assert!(json.contains("\"type\":\"text\""));

        let json = to_json(&View::Checkbox(Checkbox::new("k", false))).unwrap();
        assert!(json.contains("\"type\":\"checkbox\""));
        assert!(json.contains("\"key\":\"k\""));
    }

    #[test]
    fn test_empty_node() {
        let json = to_json(&View::Empty).unwrap();
        assert_eq!(json, "{\"type\":\"empty\"}");
    }
}
