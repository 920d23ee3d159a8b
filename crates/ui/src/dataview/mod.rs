//! Data views
//!
//! A data view composes the selection model, comparator sorting and the
//! external filter into one of three render styles - table, card stack or
//! list - with a shared action bar for search, bulk selection actions and
//! the "new" action. Construction errors never escape as panics; they
//! render as an inline error banner in place of the data.

pub mod actions;
pub mod card;
pub mod field;
pub mod list;
pub mod table;

pub use actions::{ConfirmPrompt, SelectOption, select_option_delete};
pub use field::Field;

use crate::pager::{Comparator, Model, ModelOptions, QueryPredicate, SortOptions, sort};
use nago_core::{
    DataSource, EntityKey, Identifiable, NagoResult, SortDirection, State, StateScope, Trigger,
    Window,
};
use nago_view::{Banner, VStack, View};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Style
// ============================================================================

/// Render style of a data view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Pick automatically: table for narrow field sets, cards on compact
    /// windows, table otherwise
    #[default]
    Auto,
    Table,
    Card,
    List,
}

// ============================================================================
// Card / List Options
// ============================================================================

/// Per-field rendering hint for the card style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHint {
    /// Label/value row inside the card body
    #[default]
    Inline,
    /// Field is omitted from cards entirely
    Invisible,
}

/// Options for the card style
#[derive(Debug, Clone, Default)]
pub struct CardOptions {
    /// Field id rendered as the card title; defaults to the first field
    pub title_field: Option<String>,

    /// Per-field hints, keyed by field id
    pub hints: HashMap<String, CardHint>,
}

impl CardOptions {
    /// Create default card options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title field by id
    pub fn title_field(mut self, field_id: impl Into<String>) -> Self {
        self.title_field = Some(field_id.into());
        self
    }

    /// Set the hint for one field
    pub fn hint(mut self, field_id: impl Into<String>, hint: CardHint) -> Self {
        self.hints.insert(field_id.into(), hint);
        self
    }
}

/// Options for the list style
#[derive(Debug, Clone)]
pub struct ListOptions<K> {
    /// Field id for the headline slot; defaults to the first field
    pub headline_field: Option<String>,

    /// Field id for the supporting slot; defaults to the second field
    pub supporting_field: Option<String>,

    /// Keys rendered highlighted
    pub highlight: Vec<K>,
}

impl<K> Default for ListOptions<K> {
    fn default() -> Self {
        Self {
            headline_field: None,
            supporting_field: None,
            highlight: Vec::new(),
        }
    }
}

impl<K> ListOptions<K> {
    /// Create default list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headline field by id
    pub fn headline_field(mut self, field_id: impl Into<String>) -> Self {
        self.headline_field = Some(field_id.into());
        self
    }

    /// Set the supporting field by id
    pub fn supporting_field(mut self, field_id: impl Into<String>) -> Self {
        self.supporting_field = Some(field_id.into());
        self
    }

    /// Highlight the given keys
    pub fn highlight(mut self, keys: Vec<K>) -> Self {
        self.highlight = keys;
        self
    }
}

// ============================================================================
// Data
// ============================================================================

/// The declarative half of a data view: a source and its fields
pub struct Data<E: Identifiable, S: DataSource<E>> {
    pub(crate) source: S,
    pub(crate) fields: Vec<Field<E>>,
}

impl<E: Identifiable + 'static, S: DataSource<E>> Data<E, S> {
    /// Create a data declaration over a source
    pub fn new(source: S) -> Self {
        Self {
            source,
            fields: Vec::new(),
        }
    }

    /// Append a field; fields without an explicit id get their position
    pub fn field(mut self, mut field: Field<E>) -> Self {
        field.assign_positional_id(self.fields.len());
        self.fields.push(field);
        self
    }

    /// Append many fields
    pub fn fields(mut self, fields: Vec<Field<E>>) -> Self {
        for field in fields {
            self = self.field(field);
        }
        self
    }
}

// ============================================================================
// DataView
// ============================================================================

type RowAction<E> = Arc<dyn Fn(&E) + Send + Sync>;
type NewActionFn = Arc<dyn Fn() + Send + Sync>;

pub(crate) struct NewAction {
    pub(crate) label: String,
    pub(crate) callback: NewActionFn,
}

/// A configured, renderable data view
pub struct DataView<E: Identifiable, S: DataSource<E>> {
    pub(crate) window: Window,
    pub(crate) data: Data<E, S>,
    pub(crate) style: Style,
    pub(crate) state_prefix: String,
    pub(crate) page_size: usize,
    pub(crate) search: bool,
    pub(crate) hide_selection: bool,
    pub(crate) action: Option<RowAction<E>>,
    pub(crate) new_action: Option<NewAction>,
    pub(crate) select_options: Vec<SelectOption<E::Key>>,
    pub(crate) card_options: CardOptions,
    pub(crate) list_options: ListOptions<E::Key>,
}

impl<E, S> DataView<E, S>
where
    E: Identifiable + Clone + Send + Sync + 'static,
    S: DataSource<E>,
{
    /// Create a data view over a data declaration
    pub fn from_data(window: &Window, data: Data<E, S>) -> Self {
        Self {
            window: window.clone(),
            data,
            style: Style::Auto,
            state_prefix: "dataview".to_string(),
            page_size: 0,
            search: false,
            hide_selection: false,
            action: None,
            new_action: None,
            select_options: Vec::new(),
            card_options: CardOptions::default(),
            list_options: ListOptions::default(),
        }
    }

    /// Force a render style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Namespace for the view's state slots
    ///
    /// Views sharing a window must use distinct prefixes or they will share
    /// selection and pagination state.
    pub fn state_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.state_prefix = prefix.into();
        self
    }

    /// Set the page size (zero = settings default)
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable the free-text search box
    ///
    /// Search only appears when at least one field has a text projection.
    pub fn search(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    /// Hide the selection checkboxes
    pub fn hide_selection(mut self, hide: bool) -> Self {
        self.hide_selection = hide;
        self
    }

    /// Register a row-click action
    pub fn action(mut self, action: impl Fn(&E) + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Register the "new" action button
    pub fn new_action(
        mut self,
        label: impl Into<String>,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.new_action = Some(NewAction {
            label: label.into(),
            callback: Arc::new(callback),
        });
        self
    }

    /// Register the bulk select options
    pub fn select_options(mut self, options: Vec<SelectOption<E::Key>>) -> Self {
        self.select_options = options;
        self
    }

    /// Append one bulk select option
    pub fn select_option(mut self, option: SelectOption<E::Key>) -> Self {
        self.select_options.push(option);
        self
    }

    /// Set the card style options
    pub fn card_options(mut self, options: CardOptions) -> Self {
        self.card_options = options;
        self
    }

    /// Set the list style options
    pub fn list_options(mut self, options: ListOptions<E::Key>) -> Self {
        self.list_options = options;
        self
    }

    /// Render the view
    ///
    /// Construction errors surface as an inline error banner; the only
    /// panics are the documented identity invariants.
    pub fn render(&self) -> View {
        match self.try_render() {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(prefix = %self.state_prefix, error = %e, "data view failed to build");
                Banner::error(e.to_string()).into()
            }
        }
    }

    fn try_render(&self) -> NagoResult<View> {
        let window = &self.window;
        let scope = window.scope();
        let prefix = &self.state_prefix;

        let visible_fields: Vec<&Field<E>> = self
            .data
            .fields
            .iter()
            .filter(|f| f.is_visible(window))
            .collect();

        // Sorted key sequence according to the persisted sort choice.
        let (sort_by, sort_reverse, sort_cache) = sort_states::<E::Key>(scope, prefix);
        let sort_field_id = sort_by.get();
        let comparator: Option<Comparator<E>> = visible_fields
            .iter()
            .find(|f| f.field_id() == sort_field_id)
            .and_then(|f| f.comparator_fn())
            .map(|cmp| {
                if sort_reverse.get() {
                    Arc::new(move |a: &E, b: &E| cmp(a, b).reverse()) as Comparator<E>
                } else {
                    cmp
                }
            });
        let keys = sort(
            &self.data.source,
            self.data.source.find_all(),
            comparator.as_ref(),
            &SortOptions {
                cache: Some(sort_cache),
            },
        );

        let model = Model::new(
            window,
            &self.data.source,
            keys,
            ModelOptions {
                state_prefix: prefix.clone(),
                page_size: self.page_size,
                predicate: self.query_predicate(),
            },
        )?;

        let style = self.resolved_style();
        let body = match style {
            Style::Card => card::render_cards(self, &model, &visible_fields),
            Style::List => list::render_list(self, &model, &visible_fields),
            Style::Table | Style::Auto => table::render_table(self, &model, &visible_fields),
        };

        let mut root = VStack::new().child(actions::action_bar(self, &model, style, &visible_fields));
        root = root.child(body);
        if let Some(dialog) = actions::pending_dialog(self) {
            root = root.child(dialog);
        }
        Ok(root.into())
    }

    /// Resolve the automatic style for this window
    fn resolved_style(&self) -> Style {
        match self.style {
            Style::Auto => {
                if self.data.fields.len() < 3 {
                    Style::Table
                } else if self.window.size_class().is_compact() {
                    Style::Card
                } else {
                    Style::Table
                }
            }
            explicit => explicit,
        }
    }

    /// Check whether the search box is effective
    pub(crate) fn search_active(&self) -> bool {
        self.search && self.data.fields.iter().any(|f| f.text_fn().is_some())
    }

    /// Case-insensitive substring predicate over every searchable field
    fn query_predicate(&self) -> Option<QueryPredicate<E>> {
        if !self.search_active() {
            return None;
        }
        let projections: Vec<_> = self
            .data
            .fields
            .iter()
            .filter_map(|f| f.text_fn())
            .collect();
        Some(Arc::new(move |entity: &E, query: &str| {
            let needle = query.to_lowercase();
            projections
                .iter()
                .any(|project| project(entity).to_lowercase().contains(&needle))
        }))
    }
}

// ============================================================================
// Sort state plumbing
// ============================================================================

pub(crate) fn sort_states<K: EntityKey>(
    scope: &StateScope,
    prefix: &str,
) -> (State<String>, State<bool>, State<Option<Vec<K>>>) {
    (
        scope.state(format!("{prefix}-sort-by")),
        scope.state(format!("{prefix}-sort-reverse")),
        scope.state(format!("{prefix}-sort-cache")),
    )
}

/// Current sort direction of one field
pub(crate) fn sort_direction<K: EntityKey>(
    scope: &StateScope,
    prefix: &str,
    field_id: &str,
) -> SortDirection {
    let (sort_by, sort_reverse, _) = sort_states::<K>(scope, prefix);
    if sort_by.get() != field_id {
        SortDirection::None
    } else if sort_reverse.get() {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}

/// Trigger cycling one field through unsorted -> ascending -> descending
///
/// Every toggle invalidates the sort cache so the next render re-sorts.
pub(crate) fn sort_toggle_trigger<K: EntityKey>(
    window: &Window,
    prefix: &str,
    field_id: &str,
) -> Trigger {
    let (sort_by, sort_reverse, sort_cache) = sort_states::<K>(window.scope(), prefix);
    let field_id = field_id.to_string();
    window.trigger(format!("{prefix}-sort-{field_id}"), move || {
        if sort_by.get() != field_id {
            sort_by.set_silent(field_id.clone());
            sort_reverse.set_silent(false);
        } else if !sort_reverse.get() {
            sort_reverse.set_silent(true);
        } else {
            sort_by.set_silent(String::new());
            sort_reverse.set_silent(false);
        }
        sort_cache.set_silent(None);
        sort_by.notify();
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nago_core::{NagoError, NagoResult, SizeClass, VecSource};
    use nago_view::Severity;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Customer {
        id: String,
        name: String,
        city: String,
    }

    impl Identifiable for Customer {
        type Key = String;

        fn identity(&self) -> String {
            self.id.clone()
        }
    }

    fn source() -> VecSource<Customer> {
        let names = [
            ("c01", "Ada", "London"),
            ("c02", "Grace", "Arlington"),
            ("c03", "Edsger", "Rotterdam"),
            ("c04", "Donald", "Milwaukee"),
            ("c05", "Barbara", "Philadelphia"),
            ("c06", "Alan", "Wilmslow"),
            ("c07", "Hedy", "Vienna"),
        ];
        VecSource::new(
            names
                .iter()
                .map(|(id, name, city)| Customer {
                    id: id.to_string(),
                    name: name.to_string(),
                    city: city.to_string(),
                })
                .collect(),
        )
    }

    fn view(window: &Window) -> DataView<Customer, VecSource<Customer>> {
        let data = Data::new(source())
            .field(
                Field::text_of("Name", |c: &Customer| c.name.clone())
                    .comparator(|a: &Customer, b: &Customer| a.name.cmp(&b.name)),
            )
            .field(Field::text_of("City", |c: &Customer| c.city.clone()));
        DataView::from_data(window, data)
            .state_prefix("customers")
            .page_size(5)
            .search(true)
    }

    fn first_row_text(rendered: &View) -> String {
        let mut rows: Vec<String> = Vec::new();
        rendered.walk(&mut |node| {
            if let View::Table(t) = node
                && let Some(row) = t.rows.first()
            {
                row.cells.iter().for_each(|cell| {
                    cell.walk(&mut |n| {
                        if let View::Text(text) = n {
                            rows.push(text.content.clone());
                        }
                    });
                });
            }
        });
        rows.join("|")
    }

    #[test]
    fn test_table_structure() {
        let window = Window::new(SizeClass::Medium);
        let rendered = view(&window).render();

        // 5 row checkboxes plus the select-subset header checkbox.
        assert_eq!(
            rendered.count_where(|n| matches!(n, View::Checkbox(_))),
            6
        );
        assert_eq!(rendered.count_where(|n| matches!(n, View::Table(_))), 1);

        let mut labels = Vec::new();
        rendered.walk(&mut |node| {
            if let View::Text(t) = node {
                labels.push(t.content.clone());
            }
        });
        assert!(labels.iter().any(|l| l == "1-5 of 7"));
    }

    #[test]
    fn test_hide_selection() {
        let window = Window::new(SizeClass::Medium);
        let rendered = view(&window).hide_selection(true).render();
        assert_eq!(rendered.count_where(|n| matches!(n, View::Checkbox(_))), 0);
    }

    #[test]
    fn test_auto_style_prefers_cards_on_compact() {
        let compact = Window::new(SizeClass::Compact);
        let data = Data::new(source())
            .field(Field::text_of("Name", |c: &Customer| c.name.clone()))
            .field(Field::text_of("City", |c: &Customer| c.city.clone()))
            .field(Field::text_of("Id", |c: &Customer| c.id.clone()));
        let rendered = DataView::from_data(&compact, data)
            .state_prefix("customers")
            .page_size(5)
            .render();
        assert_eq!(rendered.count_where(|n| matches!(n, View::Table(_))), 0);
        assert!(rendered.count_where(|n| matches!(n, View::Section(_))) >= 5);
    }

    #[test]
    fn test_auto_style_narrow_field_set_stays_table() {
        let compact = Window::new(SizeClass::Compact);
        let rendered = view(&compact).render();
        assert_eq!(rendered.count_where(|n| matches!(n, View::Table(_))), 1);
    }

    #[test]
    fn test_sort_toggle_cycles_order() {
        let window = Window::new(SizeClass::Medium);
        let dv = view(&window);

        let rendered = dv.render();
        assert!(first_row_text(&rendered).starts_with("Ada"));

        // Ascending on the name column keeps Ada first; descending flips.
        let toggle: State<u64> = window.scope().state("customers-sort-0");
        toggle.update(|n| *n += 1);
        let rendered = dv.render();
        assert!(first_row_text(&rendered).starts_with("Ada"));

        toggle.update(|n| *n += 1);
        let rendered = dv.render();
        assert!(first_row_text(&rendered).starts_with("Hedy"));

        // Third press returns to source order.
        toggle.update(|n| *n += 1);
        let rendered = dv.render();
        assert!(first_row_text(&rendered).starts_with("Ada"));
        let (sort_by, _, _) = sort_states::<String>(window.scope(), "customers");
        assert_eq!(sort_by.get(), "");
    }

    #[test]
    fn test_search_filters_rows() {
        let window = Window::new(SizeClass::Medium);
        let dv = view(&window);
        let _ = dv.render();

        let query: State<String> = window.scope().state("customers-query");
        query.set_silent("on".to_string());
        let rendered = dv.render();

        // London, Arlington and Donald match.
        let mut table_rows = 0;
        rendered.walk(&mut |node| {
            if let View::Table(t) = node {
                table_rows = t.rows.len();
            }
        });
        assert_eq!(table_rows, 3);
    }

    #[test]
    fn test_error_renders_banner() {
        let window = Window::new(SizeClass::Medium);
        let failing: nago_core::FnSource<_, _> = nago_core::FnSource::new(
            || vec![Err(NagoError::data_source("backend down"))],
            |_: &String| -> NagoResult<Option<Customer>> { Ok(None) },
        );
        let data = Data::new(failing)
            .field(Field::text_of("Name", |c: &Customer| c.name.clone()));
        let rendered = DataView::from_data(&window, data)
            .state_prefix("broken")
            .render();

        match rendered {
            View::Banner(banner) => {
                assert_eq!(banner.severity, Severity::Error);
                assert!(banner.message.contains("backend down"));
            }
            other => panic!("expected banner, got {other:?}"),
        }
    }

    #[test]
    fn test_end_to_end_selection_across_pages() {
        let window = Window::new(SizeClass::Medium);
        let source = VecSource::new(
            (1..=125)
                .map(|i| Customer {
                    id: format!("c{i:03}"),
                    name: format!("Customer {i}"),
                    city: String::new(),
                })
                .collect::<Vec<_>>(),
        );
        let data = Data::new(source)
            .field(Field::text_of("Name", |c: &Customer| c.name.clone()));
        let dv = DataView::from_data(&window, data)
            .state_prefix("grid")
            .page_size(50)
            .select_option(select_option_delete(window.bundle(), |_: Vec<String>| {}));

        let table_rows = |view: &View| {
            let mut rows = 0;
            view.walk(&mut |node| {
                if let View::Table(t) = node {
                    rows = t.rows.len();
                }
            });
            rows
        };

        // Page 0 of 3, fifty rows; select the first customer.
        assert_eq!(table_rows(&dv.render()), 50);
        let first: State<bool> = window.scope().state("grid-checkbox-c001");
        first.set(true);

        // Page 1, select customer 76.
        let page_idx: State<usize> = window.scope().state("grid-page");
        page_idx.set_silent(1);
        assert_eq!(table_rows(&dv.render()), 50);
        let second: State<bool> = window.scope().state("grid-checkbox-c076");
        second.set(true);

        // The trailing page carries the remainder.
        page_idx.set_silent(2);
        assert_eq!(table_rows(&dv.render()), 25);

        // Back on page 0, both selections are counted.
        page_idx.set_silent(0);
        let rendered = dv.render();
        let mut badges = Vec::new();
        rendered.walk(&mut |node| {
            if let View::Badge(b) = node {
                badges.push(b.label.clone());
            }
        });
        assert_eq!(badges, vec!["2 selected"]);

        // Clearing through the action bar: one notification for the button
        // press plus the single batched one from the clear itself.
        let before = window.scope().notification_count();
        let clear: State<u64> = window.scope().state("grid-clear-selection");
        clear.update(|n| *n += 1);
        assert_eq!(window.scope().notification_count(), before + 2);
        let rendered = dv.render();
        assert_eq!(rendered.count_where(|n| matches!(n, View::Badge(_))), 0);
    }

    #[test]
    fn test_row_action_fires_with_entity() {
        use std::sync::Mutex;

        let window = Window::new(SizeClass::Medium);
        let clicked: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let clicked_cb = clicked.clone();
        let dv = view(&window).action(move |c: &Customer| {
            clicked_cb.lock().unwrap().push(c.id.clone());
        });
        let rendered = dv.render();

        // Row actions add a trailing chevron per row.
        assert!(rendered.count_where(|n| matches!(n, View::Icon(_))) >= 5);

        let row_trigger: State<u64> = window.scope().state("customers-row-c02");
        row_trigger.update(|n| *n += 1);
        assert_eq!(clicked.lock().unwrap().as_slice(), ["c02"]);
    }
}
