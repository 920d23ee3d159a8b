//! Field context
//!
//! A [`FieldContext`] is the type-erased, per-field view the renderer chain
//! works against: resolved metadata, the live value, the field's state key,
//! the resolved option source and a write-through closure into the owning
//! typed state. Erasing the struct type here is what lets heterogeneous
//! renderers stay free of generics over the enclosing form type.

use crate::form::auto::AutoOptions;
use crate::form::spec::FieldSpec;
use crate::form::value::{FieldValue, FormValue};
use nago_core::{NagoError, NagoResult, State, Window};
use nago_view::SelectItem;
use std::sync::Arc;

/// Loader producing select options on demand (the "list use case" shape)
pub type SourceLoader = Arc<dyn Fn() -> NagoResult<Vec<SelectItem>> + Send + Sync>;

type SetValueFn = Arc<dyn Fn(FieldValue) + Send + Sync>;

// ============================================================================
// FieldContext
// ============================================================================

/// Type-erased per-field rendering context
pub struct FieldContext {
    spec: FieldSpec,
    label: String,
    supporting_text: Option<String>,
    disabled: bool,
    state_key: String,
    window: Window,
    value: FieldValue,
    default_value: Option<FieldValue>,
    source: Option<Vec<SelectItem>>,
    error: Option<String>,
    set_value: SetValueFn,
}

impl FieldContext {
    /// Build the context for one field of a form value
    pub(crate) fn build<T: FormValue>(
        window: &Window,
        options: &AutoOptions,
        spec: &FieldSpec,
        current: &T,
        state: &State<T>,
    ) -> Self {
        let bundle = window.bundle();
        let mut error = options.errors.get(&spec.name).cloned();

        let label = match &spec.label {
            Some(key) => bundle.resolve(key),
            None => spec.display_label(),
        };
        let supporting_text = spec
            .supporting_text
            .as_ref()
            .map(|key| bundle.resolve(key));

        let value = current
            .get(&spec.name)
            .unwrap_or_else(|| FieldValue::zero(spec.kind));

        let default_value = match &spec.value {
            Some(literal) => match FieldValue::parse(spec.kind, literal) {
                Ok(parsed) => Some(parsed),
                Err(message) => {
                    let e = NagoError::InvalidDefault {
                        field: spec.name.clone(),
                        message,
                    };
                    tracing::warn!(field = %spec.name, error = %e, "ignoring declared default");
                    error.get_or_insert(e.to_string());
                    None
                }
            },
            None => None,
        };

        let source = resolve_source(options, spec, &mut error);

        let state_key = format!(
            "{}-field-{}",
            options.id,
            spec.id.as_deref().unwrap_or(&spec.name)
        );

        let set_value: SetValueFn = {
            let outer = state.clone();
            let name = spec.name.clone();
            Arc::new(move |new_value: FieldValue| {
                let snapshot: T = outer.get();
                let updated = snapshot.set(&name, new_value);
                outer.set(updated);
            })
        };

        Self {
            spec: spec.clone(),
            label,
            supporting_text,
            disabled: spec.disabled || options.view_only,
            state_key,
            window: window.clone(),
            value,
            default_value,
            source,
            error,
            set_value,
        }
    }

    /// The raw field metadata
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Localized label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Localized supporting text
    pub fn supporting_text(&self) -> Option<&str> {
        self.supporting_text.as_deref()
    }

    /// Combined read-only flag (field metadata or view-only form)
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// State key the field's widget binds to
    pub fn state_key(&self) -> &str {
        &self.state_key
    }

    /// The ambient window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The live field value
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Field error text from the externally supplied error map
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Resolved select options, if the field has any
    pub fn source(&self) -> Option<&[SelectItem]> {
        self.source.as_deref()
    }

    /// Check whether options resolved for this field
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// The value a freshly created widget state starts from
    ///
    /// The declared default is consulted only when the live value is the
    /// kind's zero; widget slots persist across renders, so this runs at
    /// most once per session and never overwrites a later explicit zero.
    pub fn initial_value(&self) -> FieldValue {
        if self.value.is_zero()
            && let Some(default) = &self.default_value
        {
            return default.clone();
        }
        self.value.clone()
    }

    /// Write a new value through to the owning form state
    pub fn set_value(&self, value: FieldValue) {
        (self.set_value)(value);
    }

    /// The write-through closure, for observers that outlive the context
    pub fn set_value_fn(&self) -> SetValueFn {
        self.set_value.clone()
    }
}

/// Resolve the option source in priority order: registered source,
/// registered loader, literal `values`
fn resolve_source(
    options: &AutoOptions,
    spec: &FieldSpec,
    error: &mut Option<String>,
) -> Option<Vec<SelectItem>> {
    if let Some(name) = &spec.source {
        if let Some(items) = options.sources.get(name) {
            return Some(items.clone());
        }
        if let Some(loader) = options.loaders.get(name) {
            match loader() {
                Ok(items) => return Some(items),
                Err(e) => {
                    tracing::warn!(source = %name, error = %e, "source loader failed");
                    error.get_or_insert(e.to_string());
                    return None;
                }
            }
        }
        if spec.values.is_empty() {
            let e = NagoError::SourceMissing(name.clone());
            tracing::warn!(field = %spec.name, error = %e, "unresolved source");
            error.get_or_insert(e.to_string());
            return None;
        }
    }
    if spec.values.is_empty() {
        return None;
    }
    Some(spec.values.iter().map(|v| SelectItem::plain(v.clone())).collect())
}

impl std::fmt::Debug for FieldContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldContext")
            .field("field", &self.spec.name)
            .field("state_key", &self.state_key)
            .field("disabled", &self.disabled)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}
