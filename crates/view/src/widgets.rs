//! Bound input widgets
//!
//! Every control carries the key of the state slot it binds to plus a
//! snapshot of the current value; the client runtime writes interactions
//! back into that slot. This module provides:
//! - **Checkbox / Toggle**: boolean inputs
//! - **TextField / SearchField**: free text (single or multi line, secret)
//! - **IntField / FloatField**: numeric inputs
//! - **SelectField / MultiSelectField**: choice from an option list
//! - **DateField / TimeFrameField / DurationField**: temporal inputs
//! - **ColorField / ImageField**: special-purpose inputs
//! - **Button**: trigger-backed action

use serde::{Deserialize, Serialize};

// ============================================================================
// Boolean Inputs
// ============================================================================

/// Boolean checkbox bound to a state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkbox {
    pub key: String,
    pub value: bool,
    pub disabled: bool,
}

impl Checkbox {
    /// Create a checkbox bound to `key`
    pub fn new(key: impl Into<String>, value: bool) -> Self {
        Self {
            key: key.into(),
            value,
            disabled: false,
        }
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Switch-style boolean input bound to a state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub key: String,
    pub value: bool,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl Toggle {
    /// Create a toggle bound to `key`
    pub fn new(key: impl Into<String>, value: bool) -> Self {
        Self {
            key: key.into(),
            value,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// ============================================================================
// Text Inputs
// ============================================================================

/// Free-text input bound to a state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    pub key: String,
    pub value: String,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    /// Number of visible lines; 0 or 1 renders a single-line input
    pub lines: usize,
    /// Mask the content (passwords, API keys)
    pub secret: bool,
    pub disabled: bool,
}

impl TextField {
    /// Create a text field bound to `key`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: None,
            supporting_text: None,
            error: None,
            lines: 1,
            secret: false,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the number of visible lines
    pub fn lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Mask the content
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Search box bound to a query state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchField {
    pub key: String,
    pub value: String,
    pub placeholder: String,
}

impl SearchField {
    /// Create a search field bound to `key`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            placeholder: String::new(),
        }
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

// ============================================================================
// Numeric Inputs
// ============================================================================

/// Integer input bound to a state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntField {
    pub key: String,
    pub value: i64,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl IntField {
    /// Create an integer field bound to `key`
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Floating-point input bound to a state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatField {
    pub key: String,
    pub value: f64,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl FloatField {
    /// Create a float field bound to `key`
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// ============================================================================
// Choice Inputs
// ============================================================================

/// One selectable option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
}

impl SelectItem {
    /// Create an option with distinct value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Create an option whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Single-choice dropdown bound to a state slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectField {
    pub key: String,
    pub value: String,
    pub options: Vec<SelectItem>,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl SelectField {
    /// Create a select bound to `key`
    pub fn new(key: impl Into<String>, value: impl Into<String>, options: Vec<SelectItem>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            options,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Multi-choice input bound to a state slot holding a string list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSelectField {
    pub key: String,
    pub values: Vec<String>,
    pub options: Vec<SelectItem>,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl MultiSelectField {
    /// Create a multi-select bound to `key`
    pub fn new(key: impl Into<String>, values: Vec<String>, options: Vec<SelectItem>) -> Self {
        Self {
            key: key.into(),
            values,
            options,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// ============================================================================
// Temporal Inputs
// ============================================================================

/// Calendar date input; the value is a formatted date string, empty when
/// unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateField {
    pub key: String,
    pub value: String,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl DateField {
    /// Create a date field bound to `key`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Start/end date pair input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeFrameField {
    pub key: String,
    pub start: String,
    pub end: String,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl TimeFrameField {
    /// Create a time-frame field bound to `key`
    pub fn new(key: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            start: start.into(),
            end: end.into(),
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Duration input with independently togglable granularities
///
/// `decomposed` renders one spinner per enabled granularity; clock style
/// renders a single hh:mm:ss-like control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationField {
    pub key: String,
    /// Total duration in seconds
    pub seconds: i64,
    pub show_days: bool,
    pub show_hours: bool,
    pub show_minutes: bool,
    pub show_seconds: bool,
    /// Clock display style instead of decomposed spinners
    pub clock: bool,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl DurationField {
    /// Create a duration field bound to `key`, all granularities enabled
    pub fn new(key: impl Into<String>, seconds: i64) -> Self {
        Self {
            key: key.into(),
            seconds,
            show_days: true,
            show_hours: true,
            show_minutes: true,
            show_seconds: true,
            clock: false,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Enable or disable the days granularity
    pub fn days(mut self, show: bool) -> Self {
        self.show_days = show;
        self
    }

    /// Enable or disable the hours granularity
    pub fn hours(mut self, show: bool) -> Self {
        self.show_hours = show;
        self
    }

    /// Enable or disable the minutes granularity
    pub fn minutes(mut self, show: bool) -> Self {
        self.show_minutes = show;
        self
    }

    /// Enable or disable the seconds granularity
    pub fn seconds_granularity(mut self, show: bool) -> Self {
        self.show_seconds = show;
        self
    }

    /// Switch to clock display style
    pub fn clock(mut self, clock: bool) -> Self {
        self.clock = clock;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// ============================================================================
// Special Inputs
// ============================================================================

/// Color picker; the value is a hex string like `#1f6feb`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorField {
    pub key: String,
    pub value: String,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl ColorField {
    /// Create a color field bound to `key`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Rendering shape for image inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageShape {
    #[default]
    Avatar,
    Icon,
}

/// Image reference input; the value is a URL or asset id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
    pub key: String,
    pub value: String,
    pub shape: ImageShape,
    pub label: Option<String>,
    pub supporting_text: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

impl ImageField {
    /// Create an image field bound to `key`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            shape: ImageShape::Avatar,
            label: None,
            supporting_text: None,
            error: None,
            disabled: false,
        }
    }

    /// Set the rendering shape
    pub fn shape(mut self, shape: ImageShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the supporting text
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Set the inline error text
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// ============================================================================
// Button
// ============================================================================

/// Action button firing a trigger by state key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: Option<String>,
    pub icon: Option<String>,
    /// Trigger key bumped on press; a button without an action is inert
    pub action: Option<String>,
    pub disabled: bool,
    /// Render with destructive emphasis
    pub destructive: bool,
}

impl Button {
    /// Create a labelled button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            icon: None,
            action: None,
            disabled: false,
            destructive: false,
        }
    }

    /// Create an icon-only button
    pub fn icon_only(icon: impl Into<String>) -> Self {
        Self {
            label: None,
            icon: Some(icon.into()),
            action: None,
            disabled: false,
            destructive: false,
        }
    }

    /// Set the icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the trigger key fired on press
    pub fn action(mut self, key: impl Into<String>) -> Self {
        self.action = Some(key.into());
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render with destructive emphasis
    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_builder() {
        let field = TextField::new("profile-bio", "hello")
            .label("Bio")
            .lines(4)
            .supporting_text("Tell us about yourself");
        assert_eq!(field.key, "profile-bio");
        assert_eq!(field.lines, 4);
        assert!(!field.secret);
    }

    #[test]
    fn test_secret_field() {
        let field = TextField::new("api-key", "s3cr3t").secret(true);
        assert!(field.secret);
    }

    #[test]
    fn test_select_item_plain() {
        let item = SelectItem::plain("DE");
        assert_eq!(item.value, "DE");
        assert_eq!(item.label, "DE");
    }

    #[test]
    fn test_duration_granularities() {
        let field = DurationField::new("ttl", 3600).days(false).clock(true);
        assert!(!field.show_days);
        assert!(field.show_hours);
        assert!(field.clock);
    }

    #[test]
    fn test_button() {
        let button = Button::new("Delete")
            .icon("trash")
            .action("list-delete")
            .destructive(true);
        assert_eq!(button.action.as_deref(), Some("list-delete"));
        assert!(button.destructive);
    }
}
