//! Field metadata
//!
//! A [`FieldSpec`] is the parsed, validated form of the declarative
//! metadata vocabulary a form field carries: label, default value,
//! enumerated values, source name, line count, widget style, duration
//! granularities, section, disabled/visible flags, supporting text and an
//! optional component id. Builder methods are named for the vocabulary.

use crate::form::value::FieldKind;
use nago_core::{NagoError, NagoResult};

// ============================================================================
// WidgetStyle
// ============================================================================

/// Widget style modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStyle {
    /// Mask text content (passwords, API keys)
    Secret,
    /// Duration rendered as one spinner per granularity
    Decomposed,
    /// Duration rendered as a single clock control
    Clock,
    /// Image rendered as a round avatar
    Avatar,
    /// Image rendered as a square icon
    Icon,
}

// ============================================================================
// FieldSpec
// ============================================================================

/// Declarative metadata for one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name; names prefixed `_` render as plain headings
    pub name: String,

    /// Value kind driving renderer dispatch
    pub kind: FieldKind,

    /// Label key, resolved through the bundle; falls back to a humanized
    /// field name
    pub label: Option<String>,

    /// Default literal, applied once when the live value is zero at widget
    /// creation
    pub value: Option<String>,

    /// Enumerated option literals
    pub values: Vec<String>,

    /// Name of a registered source providing the options
    pub source: Option<String>,

    /// Visible line count for text inputs
    pub lines: usize,

    /// Widget style modifier
    pub style: Option<WidgetStyle>,

    /// Duration granularities (all enabled by default)
    pub days: bool,
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,

    /// Section key grouping fields into a titled card
    pub section: Option<String>,

    /// Render read-only
    pub disabled: bool,

    /// Supporting text key, resolved through the bundle
    pub supporting_text: Option<String>,

    /// Hidden fields are skipped entirely
    pub visible: bool,

    /// Explicit component id
    pub id: Option<String>,
}

impl FieldSpec {
    fn of_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            value: None,
            values: Vec::new(),
            source: None,
            lines: 1,
            style: None,
            days: true,
            hours: true,
            minutes: true,
            seconds: true,
            section: None,
            disabled: false,
            supporting_text: None,
            visible: true,
            id: None,
        }
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Free-text field
    pub fn text(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Text)
    }

    /// Integer field
    pub fn int(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Int)
    }

    /// Floating-point field
    pub fn float(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Float)
    }

    /// Boolean field
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Bool)
    }

    /// Calendar date field
    pub fn date(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Date)
    }

    /// Start/end date pair field
    pub fn time_frame(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::TimeFrame)
    }

    /// Duration field
    pub fn duration(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Duration)
    }

    /// Color field
    pub fn color(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Color)
    }

    /// Image reference field
    pub fn image(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::Image)
    }

    /// String list field
    pub fn text_list(name: impl Into<String>) -> Self {
        Self::of_kind(name, FieldKind::TextList)
    }

    /// Plain heading; the name is prefixed with `_` when it is not already
    pub fn heading(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.starts_with('_') {
            name
        } else {
            format!("_{name}")
        };
        Self::of_kind(name, FieldKind::Text).label(text)
    }

    /// Horizontal rule
    pub fn hline() -> Self {
        Self::of_kind("---", FieldKind::Text).label("---")
    }

    // ========================================================================
    // Builder methods (named for the metadata vocabulary)
    // ========================================================================

    /// Set the label key
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the default literal
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the enumerated option literals
    pub fn values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    /// Set the source name
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the visible line count
    pub fn lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Set the widget style
    pub fn style(mut self, style: WidgetStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Enable or disable the days granularity
    pub fn days(mut self, days: bool) -> Self {
        self.days = days;
        self
    }

    /// Enable or disable the hours granularity
    pub fn hours(mut self, hours: bool) -> Self {
        self.hours = hours;
        self
    }

    /// Enable or disable the minutes granularity
    pub fn minutes(mut self, minutes: bool) -> Self {
        self.minutes = minutes;
        self
    }

    /// Enable or disable the seconds granularity
    pub fn seconds(mut self, seconds: bool) -> Self {
        self.seconds = seconds;
        self
    }

    /// Set the section key
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Render read-only
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the supporting text key
    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    /// Show or hide the field
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set an explicit component id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check for the heading marker (leading underscore)
    pub fn is_heading(&self) -> bool {
        self.name.starts_with('_')
    }

    /// Check for the horizontal-rule marker (label `---`)
    pub fn is_hline(&self) -> bool {
        self.label.as_deref() == Some("---")
    }

    /// Check whether the field carries any widget state
    pub fn is_static(&self) -> bool {
        self.is_heading() || self.is_hline()
    }

    /// Humanized fallback label derived from the field name
    pub fn display_label(&self) -> String {
        let name = self.name.trim_start_matches('_');
        let mut label = String::with_capacity(name.len());
        let mut new_word = true;
        for ch in name.chars() {
            if ch == '_' || ch == '-' {
                label.push(' ');
                new_word = true;
            } else if new_word {
                label.extend(ch.to_uppercase());
                new_word = false;
            } else {
                label.push(ch);
            }
        }
        label
    }
}

/// Parse the JSON string-array form of the `values` vocabulary
pub fn parse_values_json(json: &str) -> NagoResult<Vec<String>> {
    serde_json::from_str(json).map_err(NagoError::from)
}

// ============================================================================
// Tests
// ============================================================================
