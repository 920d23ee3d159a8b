//! Renderer chain
//!
//! A fixed, order-significant list of `(guard, render)` pairs. The first
//! renderer whose guard matches claims the field; later renderers never see
//! it, so the specific guards (source-backed lists, source-backed text)
//! must stay ahead of the general ones (plain lists, plain text). Each
//! renderer creates a field-scoped widget state with apply-once defaults
//! and an observer writing edits back through the field context.

use crate::form::context::FieldContext;
use crate::form::spec::WidgetStyle;
use crate::form::value::{FieldKind, FieldValue};
use chrono::{Duration, NaiveDate};
use nago_core::State;
use nago_view::{
    ColorField, DateField, DurationField, FloatField, ImageField, ImageShape, IntField,
    MultiSelectField, SelectField, SelectItem, Text, TextField, TextStyle, TimeFrameField, Toggle,
    View,
};

// ============================================================================
// Renderer
// ============================================================================

/// One entry of the renderer chain
pub struct Renderer {
    pub name: &'static str,
    matches: fn(&FieldContext) -> bool,
    render: fn(&FieldContext) -> View,
}

impl Renderer {
    /// Check whether this renderer claims the field
    pub fn claims(&self, cx: &FieldContext) -> bool {
        (self.matches)(cx)
    }

    /// Render the field's widget
    pub fn render(&self, cx: &FieldContext) -> View {
        (self.render)(cx)
    }
}

/// The fixed renderer chain, in dispatch order
pub fn default_renderers() -> &'static [Renderer] {
    static RENDERERS: &[Renderer] = &[
        Renderer {
            name: "hline",
            matches: |cx| cx.spec().is_hline(),
            render: |_| View::Divider,
        },
        Renderer {
            name: "heading",
            matches: |cx| cx.spec().is_heading(),
            render: render_heading,
        },
        Renderer {
            name: "text-list-source",
            matches: |cx| cx.spec().kind == FieldKind::TextList && cx.has_source(),
            render: render_text_list_source,
        },
        Renderer {
            name: "text-source",
            matches: |cx| cx.spec().kind == FieldKind::Text && cx.has_source(),
            render: render_text_source,
        },
        Renderer {
            name: "date",
            matches: |cx| cx.spec().kind == FieldKind::Date,
            render: render_date,
        },
        Renderer {
            name: "color",
            matches: |cx| cx.spec().kind == FieldKind::Color,
            render: render_color,
        },
        Renderer {
            name: "image",
            matches: |cx| cx.spec().kind == FieldKind::Image,
            render: render_image,
        },
        Renderer {
            name: "text-list",
            matches: |cx| cx.spec().kind == FieldKind::TextList,
            render: render_text_list,
        },
        Renderer {
            name: "text",
            matches: |cx| cx.spec().kind == FieldKind::Text,
            render: render_text,
        },
        Renderer {
            name: "float",
            matches: |cx| cx.spec().kind == FieldKind::Float,
            render: render_float,
        },
        Renderer {
            name: "duration",
            matches: |cx| cx.spec().kind == FieldKind::Duration,
            render: render_duration,
        },
        Renderer {
            name: "bool",
            matches: |cx| cx.spec().kind == FieldKind::Bool,
            render: render_bool,
        },
        Renderer {
            name: "int",
            matches: |cx| cx.spec().kind == FieldKind::Int,
            render: render_int,
        },
        Renderer {
            name: "time-frame",
            matches: |cx| cx.spec().kind == FieldKind::TimeFrame,
            render: render_time_frame,
        },
    ];
    RENDERERS
}

// ============================================================================
// Widget state helpers
// ============================================================================

/// Create the field's widget state and wire the write-back observer
///
/// The state initializer runs only when the slot is first created, which
/// gives the declared default its apply-once semantics. The observer is
/// re-registered (replaced) on every render.
fn bound_state<V, F>(cx: &FieldContext, initial: impl FnOnce() -> V, to_value: F) -> State<V>
where
    V: nago_core::StateValue,
    F: Fn(&State<V>) -> FieldValue + Send + Sync + 'static,
{
    let state: State<V> = cx
        .window()
        .scope()
        .state_init(cx.state_key().to_string(), initial);
    let set_value = cx.set_value_fn();
    let reader = state.clone();
    state.observe(move || set_value(to_value(&reader)));
    state
}

fn format_date(cx: &FieldContext, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date
            .format(&cx.window().settings().date_format)
            .to_string(),
        None => String::new(),
    }
}

// ============================================================================
// Static renderers
// ============================================================================

fn render_heading(cx: &FieldContext) -> View {
    Text::new(cx.label()).style(TextStyle::Label).into()
}

// ============================================================================
// Source-backed renderers
// ============================================================================

fn render_text_list_source(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::TextList(values) => values,
        _ => Vec::new(),
    };
    let state = bound_state(cx, move || initial, |s: &State<Vec<String>>| {
        FieldValue::TextList(s.get())
    });

    let options = cx.source().unwrap_or_default().to_vec();
    let mut widget = MultiSelectField::new(cx.state_key(), state.get(), options)
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_text_source(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Text(value) => value,
        _ => String::new(),
    };
    let state = bound_state(cx, move || initial, |s: &State<String>| {
        FieldValue::Text(s.get())
    });

    let options = cx.source().unwrap_or_default().to_vec();
    let mut widget = SelectField::new(cx.state_key(), state.get(), options)
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

// ============================================================================
// Temporal renderers
// ============================================================================

fn render_date(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Date(date) => date,
        _ => None,
    };
    let state = bound_state(cx, move || initial, |s: &State<Option<NaiveDate>>| {
        FieldValue::Date(s.get())
    });

    let mut widget = DateField::new(cx.state_key(), format_date(cx, state.get()))
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_time_frame(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::TimeFrame { start, end } => (start, end),
        _ => (None, None),
    };
    let state = bound_state(
        cx,
        move || initial,
        |s: &State<(Option<NaiveDate>, Option<NaiveDate>)>| {
            let (start, end) = s.get();
            FieldValue::TimeFrame { start, end }
        },
    );

    let (start, end) = state.get();
    let mut widget = TimeFrameField::new(
        cx.state_key(),
        format_date(cx, start),
        format_date(cx, end),
    )
    .label(cx.label())
    .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_duration(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Duration(duration) => duration,
        _ => Duration::zero(),
    };
    let state = bound_state(cx, move || initial, |s: &State<Duration>| {
        FieldValue::Duration(s.get())
    });

    let spec = cx.spec();
    let mut widget = DurationField::new(cx.state_key(), state.get().num_seconds())
        .days(spec.days)
        .hours(spec.hours)
        .minutes(spec.minutes)
        .seconds_granularity(spec.seconds)
        .clock(spec.style == Some(WidgetStyle::Clock))
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

// ============================================================================
// Special renderers
// ============================================================================

fn render_color(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Color(value) => value,
        _ => String::new(),
    };
    let state = bound_state(cx, move || initial, |s: &State<String>| {
        FieldValue::Color(s.get())
    });

    let mut widget = ColorField::new(cx.state_key(), state.get())
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_image(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Image(value) => value,
        _ => String::new(),
    };
    let state = bound_state(cx, move || initial, |s: &State<String>| {
        FieldValue::Image(s.get())
    });

    let shape = match cx.spec().style {
        Some(WidgetStyle::Icon) => ImageShape::Icon,
        _ => ImageShape::Avatar,
    };
    let mut widget = ImageField::new(cx.state_key(), state.get())
        .shape(shape)
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

// ============================================================================
// Plain renderers
// ============================================================================

fn render_text_list(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::TextList(values) => values,
        _ => Vec::new(),
    };
    let state = bound_state(cx, move || initial, |s: &State<Vec<String>>| {
        FieldValue::TextList(s.get())
    });

    // Free-form list: the current entries double as the options.
    let values = state.get();
    let options: Vec<SelectItem> = values.iter().map(|v| SelectItem::plain(v.clone())).collect();
    let mut widget = MultiSelectField::new(cx.state_key(), values, options)
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_text(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Text(value) => value,
        _ => String::new(),
    };
    let state = bound_state(cx, move || initial, |s: &State<String>| {
        FieldValue::Text(s.get())
    });

    let spec = cx.spec();
    let mut widget = TextField::new(cx.state_key(), state.get())
        .label(cx.label())
        .lines(spec.lines.max(1))
        .secret(spec.style == Some(WidgetStyle::Secret))
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_float(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Float(value) => value,
        _ => 0.0,
    };
    let state = bound_state(cx, move || initial, |s: &State<f64>| {
        FieldValue::Float(s.get())
    });

    let mut widget = FloatField::new(cx.state_key(), state.get())
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_bool(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Bool(value) => value,
        _ => false,
    };
    let state = bound_state(cx, move || initial, |s: &State<bool>| {
        FieldValue::Bool(s.get())
    });

    let mut widget = Toggle::new(cx.state_key(), state.get())
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

fn render_int(cx: &FieldContext) -> View {
    let initial = match cx.initial_value() {
        FieldValue::Int(value) => value,
        _ => 0,
    };
    let state = bound_state(cx, move || initial, |s: &State<i64>| {
        FieldValue::Int(s.get())
    });

    let mut widget = IntField::new(cx.state_key(), state.get())
        .label(cx.label())
        .disabled(cx.disabled());
    if let Some(text) = cx.supporting_text() {
        widget = widget.supporting_text(text);
    }
    if let Some(error) = cx.error() {
        widget = widget.error(error);
    }
    widget.into()
}

// ============================================================================
// Tests
// ============================================================================
