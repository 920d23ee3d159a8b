//! Auto-form assembly
//!
//! [`auto`] walks a form value's declared fields, skips hidden ones, builds
//! a [`FieldContext`] per field and lets the renderer chain claim each one.
//! Fields sharing a section key are grouped into a titled card at the
//! position the section first appears; everything else renders directly in
//! the root stack.

use crate::form::context::{FieldContext, SourceLoader};
use crate::form::renderers::default_renderers;
use crate::form::value::FormValue;
use nago_core::{NagoError, NagoResult, State, Window};
use nago_view::{Section, SelectItem, VStack, View};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

// ============================================================================
// AutoOptions
// ============================================================================

/// Options for [`auto`]
pub struct AutoOptions {
    /// Form id, namespacing every widget state key
    pub id: String,

    /// Render every field read-only, overriding per-field metadata
    pub view_only: bool,

    /// Registered option sources, by name
    pub sources: HashMap<String, Vec<SelectItem>>,

    /// Registered option loaders, by name; consulted when no source of the
    /// same name is registered
    pub loaders: HashMap<String, SourceLoader>,

    /// Field error texts, keyed by field name
    pub errors: HashMap<String, String>,
}

impl Default for AutoOptions {
    fn default() -> Self {
        Self {
            id: "form".to_string(),
            view_only: false,
            sources: HashMap::new(),
            loaders: HashMap::new(),
            errors: HashMap::new(),
        }
    }
}

impl AutoOptions {
    /// Create options with the given form id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Render the whole form read-only
    pub fn view_only(mut self, view_only: bool) -> Self {
        self.view_only = view_only;
        self
    }

    /// Register an option source by name
    pub fn source(mut self, name: impl Into<String>, items: Vec<SelectItem>) -> Self {
        self.sources.insert(name.into(), items);
        self
    }

    /// Register an option loader by name
    pub fn loader(
        mut self,
        name: impl Into<String>,
        loader: impl Fn() -> NagoResult<Vec<SelectItem>> + Send + Sync + 'static,
    ) -> Self {
        self.loaders.insert(name.into(), Arc::new(loader));
        self
    }

    /// Attach an error text to one field
    pub fn field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(field.into(), message.into());
        self
    }

    /// Attach the externally supplied field error map
    pub fn field_errors(mut self, errors: HashMap<String, String>) -> Self {
        self.errors.extend(errors);
        self
    }
}

impl std::fmt::Debug for AutoOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoOptions")
            .field("id", &self.id)
            .field("view_only", &self.view_only)
            .field("sources", &self.sources.len())
            .field("loaders", &self.loaders.len())
            .field("errors", &self.errors.len())
            .finish()
    }
}

// ============================================================================
// auto
// ============================================================================

enum Entry {
    Plain(View),
    Section(usize),
}

/// Render an editable form over the given typed state
///
/// Every visible field is claimed by the first matching renderer of the
/// fixed chain; edits flow back through the field context into `state`,
/// replacing the held value with an updated clone (prior snapshots stay
/// untouched). Widget state slots persist across renders under
/// `{id}-field-{name}` keys, which is what gives declared defaults their
/// apply-once semantics.
pub fn auto<T: FormValue>(
    window: &Window,
    options: &AutoOptions,
    state: &State<T>,
) -> NagoResult<View> {
    let specs = T::fields();

    // Two stateful fields under one name would alias the same widget slot.
    let mut seen: HashSet<&str> = HashSet::new();
    for spec in &specs {
        if !spec.is_static() && !seen.insert(spec.name.as_str()) {
            return Err(NagoError::with_context(
                format!("Building form '{}'", options.id),
                format!("duplicate field name '{}'", spec.name),
            ));
        }
    }

    let current = state.get();
    let chain = default_renderers();

    let mut entries: Vec<Entry> = Vec::new();
    let mut sections: Vec<(String, Vec<View>)> = Vec::new();

    for spec in &specs {
        if !spec.visible {
            continue;
        }
        let cx = FieldContext::build(window, options, spec, &current, state);
        let Some(renderer) = chain.iter().find(|r| r.claims(&cx)) else {
            tracing::warn!(form = %options.id, field = %spec.name, "no renderer claims field");
            continue;
        };
        let widget = renderer.render(&cx);

        match spec.section.as_deref() {
            Some(section_key) if !section_key.is_empty() => {
                match sections.iter().position(|(key, _)| key == section_key) {
                    Some(idx) => sections[idx].1.push(widget),
                    None => {
                        entries.push(Entry::Section(sections.len()));
                        sections.push((section_key.to_string(), vec![widget]));
                    }
                }
            }
            _ => entries.push(Entry::Plain(widget)),
        }
    }

    let bundle = window.bundle();
    let mut root = VStack::new();
    for entry in entries {
        root = root.child(match entry {
            Entry::Plain(view) => view,
            Entry::Section(idx) => {
                let (key, children) = &mut sections[idx];
                Section::titled(bundle.resolve(key))
                    .children(std::mem::take(children))
                    .into()
            }
        });
    }
    Ok(root.into())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::spec::FieldSpec;
    use crate::form::value::FieldValue;
    use chrono::NaiveDate;
    use nago_core::SizeClass;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct ServerConfig {
        name: String,
        port: i64,
        tls: bool,
        region: String,
        motd: String,
        launched: Option<NaiveDate>,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                name: String::new(),
                port: 0,
                tls: false,
                region: String::new(),
                motd: String::new(),
                launched: None,
            }
        }
    }

    impl FormValue for ServerConfig {
        fn fields() -> Vec<FieldSpec> {
            vec![
                FieldSpec::heading("general", "General"),
                FieldSpec::text("name").section("general"),
                FieldSpec::text("motd").lines(3).section("general"),
                FieldSpec::int("port").value("8080").section("network"),
                FieldSpec::boolean("tls").section("network"),
                FieldSpec::hline(),
                FieldSpec::text("region").source("regions"),
                FieldSpec::date("launched"),
                FieldSpec::text("api_token").visible(false),
            ]
        }

        fn get(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(FieldValue::Text(self.name.clone())),
                "motd" => Some(FieldValue::Text(self.motd.clone())),
                "port" => Some(FieldValue::Int(self.port)),
                "tls" => Some(FieldValue::Bool(self.tls)),
                "region" => Some(FieldValue::Text(self.region.clone())),
                "launched" => Some(FieldValue::Date(self.launched)),
                _ => None,
            }
        }

        fn set(&self, field: &str, value: FieldValue) -> Self {
            let mut next = self.clone();
            match (field, value) {
                ("name", FieldValue::Text(v)) => next.name = v,
                ("motd", FieldValue::Text(v)) => next.motd = v,
                ("port", FieldValue::Int(v)) => next.port = v,
                ("tls", FieldValue::Bool(v)) => next.tls = v,
                ("region", FieldValue::Text(v)) => next.region = v,
                ("launched", FieldValue::Date(v)) => next.launched = v,
                _ => {}
            }
            next
        }
    }

    fn regions() -> Vec<SelectItem> {
        vec![SelectItem::plain("eu-west"), SelectItem::plain("us-east")]
    }

    fn render(window: &Window, options: &AutoOptions) -> (View, State<ServerConfig>) {
        let state: State<ServerConfig> = window.scope().state(format!("{}-value", options.id));
        let view = auto(window, options, &state).unwrap();
        (view, state)
    }

    #[test]
    fn test_sections_grouped_in_first_seen_order() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());
        let (view, _) = render(&window, &options);

        let mut titles = Vec::new();
        view.walk(&mut |node| {
            if let View::Section(s) = node {
                titles.push(s.title.clone().unwrap_or_default());
            }
        });
        // Section keys fall back to themselves through the bundle.
        assert_eq!(titles, vec!["general", "network"]);

        // name + motd in the first card, port + tls in the second.
        let mut sizes = Vec::new();
        view.walk(&mut |node| {
            if let View::Section(s) = node {
                sizes.push(s.children.len());
            }
        });
        assert_eq!(sizes, vec![2, 2]);
    }

    #[test]
    fn test_statics_and_loose_fields_in_root() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());
        let (view, _) = render(&window, &options);

        let View::VStack(root) = &view else {
            panic!("expected root stack, got {view:?}");
        };
        // heading, general card, network card, hline, region, launched.
        assert_eq!(root.children.len(), 6);
        assert!(matches!(root.children[3], View::Divider));
        assert!(matches!(root.children[4], View::SelectField(_)));
        assert!(matches!(root.children[5], View::DateField(_)));
    }

    #[test]
    fn test_hidden_field_skipped_entirely() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());
        let (view, _) = render(&window, &options);

        let mut keys = Vec::new();
        view.walk(&mut |node| {
            if let View::TextField(t) = node {
                keys.push(t.key.clone());
            }
        });
        assert!(!keys.iter().any(|k| k.contains("api_token")));
        assert!(!window.scope().contains("cfg-field-api_token"));
    }

    #[test]
    fn test_default_applied_once() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());

        // The live port is zero, so the declared default seeds the widget.
        let (view, state) = render(&window, &options);
        let mut port = None;
        view.walk(&mut |node| {
            if let View::IntField(f) = node {
                port = Some(f.value);
            }
        });
        assert_eq!(port, Some(8080));

        // The user explicitly sets the port back to zero.
        let widget: State<i64> = window.scope().state("cfg-field-port");
        widget.set(0);
        assert_eq!(state.get().port, 0);

        // A re-render finds the existing slot and never re-applies 8080.
        let (view, _) = render(&window, &options);
        let mut port = None;
        view.walk(&mut |node| {
            if let View::IntField(f) = node {
                port = Some(f.value);
            }
        });
        assert_eq!(port, Some(0));
    }

    #[test]
    fn test_default_never_overwrites_live_value() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());

        let state: State<ServerConfig> = window.scope().state("cfg-value");
        state.set_silent(ServerConfig {
            port: 9443,
            ..ServerConfig::default()
        });

        let view = auto(&window, &options, &state).unwrap();
        let mut port = None;
        view.walk(&mut |node| {
            if let View::IntField(f) = node {
                port = Some(f.value);
            }
        });
        assert_eq!(port, Some(9443));
    }

    #[test]
    fn test_edits_replace_snapshots_immutably() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());
        let (_, state) = render(&window, &options);

        let before = state.get();
        let widget: State<String> = window.scope().state("cfg-field-name");
        widget.set("atlas".to_string());

        assert_eq!(state.get().name, "atlas");
        // The earlier snapshot is a distinct value, untouched by the edit.
        assert_eq!(before.name, "");
    }

    #[test]
    fn test_source_priority_registered_over_loader() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg")
            .source("regions", regions())
            .loader("regions", || {
                panic!("loader must not run while a source is registered")
            });
        let (view, _) = render(&window, &options);

        let mut options_seen = Vec::new();
        view.walk(&mut |node| {
            if let View::SelectField(f) = node {
                options_seen = f.options.iter().map(|o| o.value.clone()).collect();
            }
        });
        assert_eq!(options_seen, vec!["eu-west", "us-east"]);
    }

    #[test]
    fn test_loader_used_when_no_source_registered() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").loader("regions", || {
            Ok(vec![SelectItem::plain("ap-south")])
        });
        let (view, _) = render(&window, &options);

        let mut options_seen = Vec::new();
        view.walk(&mut |node| {
            if let View::SelectField(f) = node {
                options_seen = f.options.iter().map(|o| o.value.clone()).collect();
            }
        });
        assert_eq!(options_seen, vec!["ap-south"]);
    }

    #[test]
    fn test_unresolved_source_falls_back_to_text_with_error() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg");
        let (view, _) = render(&window, &options);

        // Without options the select guards do not claim the field; it
        // renders as plain text carrying the resolution error.
        assert_eq!(view.count_where(|n| matches!(n, View::SelectField(_))), 0);
        let mut error = None;
        view.walk(&mut |node| {
            if let View::TextField(t) = node
                && t.key == "cfg-field-region"
            {
                error = t.error.clone();
            }
        });
        assert_eq!(
            error.as_deref(),
            Some("Source 'regions' is not registered")
        );
    }

    #[test]
    fn test_field_error_map_surfaces_on_widget() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg")
            .source("regions", regions())
            .field_error("name", "Name is required");
        let (view, _) = render(&window, &options);

        let mut error = None;
        view.walk(&mut |node| {
            if let View::TextField(t) = node
                && t.key == "cfg-field-name"
            {
                error = t.error.clone();
            }
        });
        assert_eq!(error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_view_only_disables_every_widget() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg")
            .source("regions", regions())
            .view_only(true);
        let (view, _) = render(&window, &options);

        let mut disabled = Vec::new();
        view.walk(&mut |node| {
            match node {
                View::TextField(f) => disabled.push(f.disabled),
                View::IntField(f) => disabled.push(f.disabled),
                View::Toggle(f) => disabled.push(f.disabled),
                View::SelectField(f) => disabled.push(f.disabled),
                View::DateField(f) => disabled.push(f.disabled),
                _ => {}
            }
        });
        assert!(!disabled.is_empty());
        assert!(disabled.iter().all(|d| *d));
    }

    #[test]
    fn test_duplicate_field_name_is_an_error() {
        #[derive(Debug, Clone)]
        struct Broken;

        impl FormValue for Broken {
            fn fields() -> Vec<FieldSpec> {
                vec![FieldSpec::text("name"), FieldSpec::int("name")]
            }
            fn get(&self, _: &str) -> Option<FieldValue> {
                None
            }
            fn set(&self, _: &str, _: FieldValue) -> Self {
                Broken
            }
        }

        let window = Window::new(SizeClass::Medium);
        let state: State<Broken> = window.scope().state_init("broken-value", || Broken);
        let err = auto(&window, &AutoOptions::new("broken"), &state).unwrap_err();
        assert!(err.to_string().contains("duplicate field name"));
    }

    #[test]
    fn test_repeated_hlines_are_legal() {
        #[derive(Debug, Clone)]
        struct Ruled;

        impl FormValue for Ruled {
            fn fields() -> Vec<FieldSpec> {
                vec![FieldSpec::hline(), FieldSpec::text("name"), FieldSpec::hline()]
            }
            fn get(&self, _: &str) -> Option<FieldValue> {
                Some(FieldValue::Text(String::new()))
            }
            fn set(&self, _: &str, _: FieldValue) -> Self {
                Ruled
            }
        }

        let window = Window::new(SizeClass::Medium);
        let state: State<Ruled> = window.scope().state_init("ruled-value", || Ruled);
        let view = auto(&window, &AutoOptions::new("ruled"), &state).unwrap();
        assert_eq!(view.count_where(|n| matches!(n, View::Divider)), 2);
    }

    #[test]
    fn test_heading_renders_label_without_state() {
        let window = Window::new(SizeClass::Medium);
        let options = AutoOptions::new("cfg").source("regions", regions());
        let (view, _) = render(&window, &options);

        let mut headings = Vec::new();
        view.walk(&mut |node| {
            if let View::Text(t) = node
                && t.content == "General"
            {
                headings.push(t.content.clone());
            }
        });
        assert_eq!(headings.len(), 1);
        assert!(!window.scope().contains("cfg-field-_general"));
    }
}
