//! Field values and the form-value contract
//!
//! Runtime reflection is replaced by a tagged variant: every form-capable
//! struct exposes its field metadata, reads any field into a [`FieldValue`]
//! and produces an updated clone with exactly one field changed. Prior
//! snapshots stay untouched, which is what undo/diffing elsewhere relies
//! on.

use chrono::{Duration, NaiveDate};

// ============================================================================
// FieldKind
// ============================================================================

/// The kind of value a form field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
    TextList,
    Date,
    TimeFrame,
    Duration,
    Color,
    Image,
}

// ============================================================================
// FieldValue
// ============================================================================

/// One field's live value, kind-tagged
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
    Date(Option<NaiveDate>),
    TimeFrame {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    Duration(Duration),
    Color(String),
    Image(String),
}

impl FieldValue {
    /// The kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::TextList(_) => FieldKind::TextList,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::TimeFrame { .. } => FieldKind::TimeFrame,
            FieldValue::Duration(_) => FieldKind::Duration,
            FieldValue::Color(_) => FieldKind::Color,
            FieldValue::Image(_) => FieldKind::Image,
        }
    }

    /// The zero value for a kind
    pub fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Bool => FieldValue::Bool(false),
            FieldKind::Int => FieldValue::Int(0),
            FieldKind::Float => FieldValue::Float(0.0),
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::TextList => FieldValue::TextList(Vec::new()),
            FieldKind::Date => FieldValue::Date(None),
            FieldKind::TimeFrame => FieldValue::TimeFrame {
                start: None,
                end: None,
            },
            FieldKind::Duration => FieldValue::Duration(Duration::zero()),
            FieldKind::Color => FieldValue::Color(String::new()),
            FieldKind::Image => FieldValue::Image(String::new()),
        }
    }

    /// Check whether this is the zero value of its kind
    ///
    /// Declared defaults apply exactly when the live value is zero at slot
    /// creation, so an explicitly-set zero is indistinguishable from
    /// "unset". That ambiguity is part of the contract, not a bug.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Bool(v) => !v,
            FieldValue::Int(v) => *v == 0,
            FieldValue::Float(v) => *v == 0.0,
            FieldValue::Text(v) => v.is_empty(),
            FieldValue::TextList(v) => v.is_empty(),
            FieldValue::Date(v) => v.is_none(),
            FieldValue::TimeFrame { start, end } => start.is_none() && end.is_none(),
            FieldValue::Duration(v) => v.is_zero(),
            FieldValue::Color(v) => v.is_empty(),
            FieldValue::Image(v) => v.is_empty(),
        }
    }

    /// Parse a declared default literal for a kind
    ///
    /// Literal formats: booleans as `true`/`false`, numbers in their usual
    /// notation, dates as `YYYY-MM-DD`, time frames as two dates joined by
    /// `..`, durations as whole seconds, lists as JSON string arrays.
    pub fn parse(kind: FieldKind, literal: &str) -> Result<Self, String> {
        match kind {
            FieldKind::Bool => literal
                .parse::<bool>()
                .map(FieldValue::Bool)
                .map_err(|_| format!("'{literal}' is not a boolean")),
            FieldKind::Int => literal
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| format!("'{literal}' is not an integer")),
            FieldKind::Float => literal
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| format!("'{literal}' is not a number")),
            FieldKind::Text => Ok(FieldValue::Text(literal.to_string())),
            FieldKind::TextList => serde_json::from_str::<Vec<String>>(literal)
                .map(FieldValue::TextList)
                .map_err(|_| format!("'{literal}' is not a JSON string array")),
            FieldKind::Date => parse_date(literal)
                .map(|d| FieldValue::Date(Some(d))),
            FieldKind::TimeFrame => {
                let (start, end) = literal
                    .split_once("..")
                    .ok_or_else(|| format!("'{literal}' is not a 'start..end' time frame"))?;
                Ok(FieldValue::TimeFrame {
                    start: Some(parse_date(start.trim())?),
                    end: Some(parse_date(end.trim())?),
                })
            }
            FieldKind::Duration => literal
                .parse::<i64>()
                .map(|secs| FieldValue::Duration(Duration::seconds(secs)))
                .map_err(|_| format!("'{literal}' is not a duration in seconds")),
            FieldKind::Color => Ok(FieldValue::Color(literal.to_string())),
            FieldKind::Image => Ok(FieldValue::Image(literal.to_string())),
        }
    }
}

fn parse_date(literal: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(literal, "%Y-%m-%d")
        .map_err(|_| format!("'{literal}' is not a YYYY-MM-DD date"))
}

// ============================================================================
// FormValue Trait
// ============================================================================

/// Contract for structs an auto-form can edit
///
/// `set` returns an updated clone with exactly one field changed; it never
/// mutates in place. Implementations ignore a value of the wrong kind and
/// return an unchanged clone - the renderer chain always writes the kind it
/// read.
pub trait FormValue: Clone + Send + 'static {
    /// Declarative metadata, one entry per field, in display order
    fn fields() -> Vec<crate::form::FieldSpec>;

    /// Read one field; `None` for unknown names
    fn get(&self, field: &str) -> Option<FieldValue>;

    /// Produce an updated clone with `field` set to `value`
    fn set(&self, field: &str, value: FieldValue) -> Self;
}

// ============================================================================
// Tests
// ============================================================================
