//! Selection model
//!
//! The stateful heart of every data view: combines a free-text query state,
//! a page-index state and one persistent boolean slot per entity into a
//! single materialized page plus selection bookkeeping. A model is rebuilt
//! from scratch on every render pass; only the named slots persist, which
//! is exactly what lets selection survive pagination and re-renders.

use crate::pager::filter::filter_and_paginate;
use nago_core::{
    DataSource, EntityKey, Identifiable, KeySeq, NagoResult, Page, PageRequest, State, Window,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Predicate applied to entities while a free-text query is active
pub type QueryPredicate<E> = Arc<dyn Fn(&E, &str) -> bool + Send + Sync>;

// ============================================================================
// ModelOptions
// ============================================================================

/// Options for [`Model::new`]
pub struct ModelOptions<E> {
    /// Namespace for every state slot the model allocates
    pub state_prefix: String,

    /// Page size; zero falls back to the window's settings default
    pub page_size: usize,

    /// Predicate consulted when the query state is non-empty
    pub predicate: Option<QueryPredicate<E>>,
}

impl<E> Default for ModelOptions<E> {
    fn default() -> Self {
        Self {
            state_prefix: "model".to_string(),
            page_size: 0,
            predicate: None,
        }
    }
}

impl<E> ModelOptions<E> {
    /// Create options with the given state prefix
    pub fn new(state_prefix: impl Into<String>) -> Self {
        Self {
            state_prefix: state_prefix.into(),
            ..Self::default()
        }
    }

    /// Set the page size (zero = settings default)
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the query predicate
    pub fn predicate(mut self, predicate: QueryPredicate<E>) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

// ============================================================================
// Model
// ============================================================================

/// One render pass worth of pagination and selection state
pub struct Model<E: Identifiable> {
    page: Page<E>,
    query: State<String>,
    page_idx: State<usize>,
    select_subset: State<bool>,
    selections: HashMap<E::Key, State<bool>>,
    all_keys: Vec<E::Key>,
    subset: Vec<E::Key>,
    selection_count: usize,
    prefix: String,
}

impl<E: Identifiable> Model<E> {
    /// Build a model over the given key sequence
    ///
    /// Collects every key eagerly (failing fast on sequence errors),
    /// filters and paginates through the source, then wires one persistent
    /// checkbox slot per key plus the derived select-subset toggle.
    ///
    /// The selection count is recomputed by scanning every slot, so a
    /// build costs O(N) on top of the O(N) collection pass. That rescan is
    /// deliberate: the model is stateless between renders and the count
    /// must cover the entire data set, not the visible page.
    ///
    /// # Panics
    ///
    /// Panics if any collected key is nil - an entity without an identity
    /// cannot participate in selection bookkeeping.
    pub fn new<S>(
        window: &Window,
        source: &S,
        keys: KeySeq<'_, E::Key>,
        options: ModelOptions<E>,
    ) -> NagoResult<Self>
    where
        S: DataSource<E> + ?Sized,
    {
        let prefix = options.state_prefix;
        let scope = window.scope();

        let mut all_keys: Vec<E::Key> = Vec::new();
        for key in keys {
            let key = key?;
            assert!(
                !key.is_nil(),
                "entity identity must not be empty (model '{prefix}')"
            );
            all_keys.push(key);
        }
        tracing::debug!(model = %prefix, keys = all_keys.len(), "collected identifiers");

        let query: State<String> = scope.state(format!("{prefix}-query"));
        let page_idx: State<usize> = scope.state(format!("{prefix}-page"));

        let page_size = if options.page_size == 0 {
            window.settings().default_page_size
        } else {
            options.page_size
        };
        let request = PageRequest::new(page_idx.get(), page_size);

        let query_text = query.get();
        let filtering = !query_text.is_empty() && options.predicate.is_some();
        let predicate: Option<Box<dyn Fn(&E) -> bool>> = if filtering {
            let inner = options.predicate.clone().ok_or_else(|| {
                nago_core::NagoError::internal("predicate vanished while filtering")
            })?;
            Some(Box::new(move |entity: &E| inner(entity, &query_text)))
        } else {
            None
        };

        let (page, accepted) =
            filter_and_paginate(source, &all_keys, predicate.as_deref(), request)?;

        // With no active filter the subset is the full key list, cloned so
        // later mutation of either cannot alias the other.
        let subset: Vec<E::Key> = if filtering { accepted } else { all_keys.clone() };

        let mut selections: HashMap<E::Key, State<bool>> =
            HashMap::with_capacity(all_keys.len());
        for key in &all_keys {
            let slot: State<bool> = scope.state(checkbox_key(&prefix, key));
            selections.insert(key.clone(), slot);
        }

        let select_subset: State<bool> = scope.state(format!("{prefix}-select-subset"));

        let subset_slots: Vec<State<bool>> = subset
            .iter()
            .filter_map(|key| selections.get(key).cloned())
            .collect();

        // Derived flag: true iff the current subset is non-empty and every
        // member is individually selected.
        let recompute: Arc<dyn Fn() + Send + Sync> = {
            let subset_slots = subset_slots.clone();
            let select_subset = select_subset.clone();
            Arc::new(move || {
                let all_selected =
                    !subset_slots.is_empty() && subset_slots.iter().all(|slot| slot.get());
                select_subset.set_silent(all_selected);
            })
        };

        for slot in selections.values() {
            let recompute = recompute.clone();
            slot.observe(move || recompute());
        }

        {
            let subset_slots = subset_slots.clone();
            let select_subset_read = select_subset.clone();
            let recompute = recompute.clone();
            select_subset.observe(move || {
                let value = select_subset_read.get();
                for slot in &subset_slots {
                    slot.set_silent(value);
                }
                recompute();
            });
        }
        recompute();

        let selection_count = selections.values().filter(|slot| slot.get()).count();

        Ok(Self {
            page,
            query,
            page_idx,
            select_subset,
            selections,
            all_keys,
            subset,
            selection_count,
            prefix,
        })
    }

    /// The materialized page for this render
    pub fn page(&self) -> &Page<E> {
        &self.page
    }

    /// The free-text query state
    pub fn query(&self) -> &State<String> {
        &self.query
    }

    /// The page-index state
    pub fn page_idx(&self) -> &State<usize> {
        &self.page_idx
    }

    /// The derived select-all-in-subset toggle
    pub fn select_subset(&self) -> &State<bool> {
        &self.select_subset
    }

    /// Number of selected entities across the entire data set
    pub fn selection_count(&self) -> usize {
        self.selection_count
    }

    /// Number of keys in the full data set
    pub fn key_count(&self) -> usize {
        self.all_keys.len()
    }

    /// Keys accepted by the current filter, in data-set order
    pub fn subset(&self) -> &[E::Key] {
        &self.subset
    }

    /// State prefix every slot of this model is namespaced under
    pub fn state_prefix(&self) -> &str {
        &self.prefix
    }

    /// The checkbox state for one entity
    ///
    /// # Panics
    ///
    /// Panics if no selection slot exists for the key; every key collected
    /// at build time has one, so a miss means the caller is asking about an
    /// entity outside the data set.
    pub fn selection(&self, key: &E::Key) -> &State<bool> {
        self.selections.get(key).unwrap_or_else(|| {
            panic!(
                "no selection state for key '{}' (model '{}')",
                key.as_str(),
                self.prefix
            )
        })
    }

    /// Currently selected keys, in data-set order
    pub fn selected_keys(&self) -> Vec<E::Key> {
        self.all_keys
            .iter()
            .filter(|key| self.selections[*key].get())
            .cloned()
            .collect()
    }

    /// Reset every selection to false, firing exactly one notification
    pub fn unselect_all(&self) {
        let slots: Vec<State<bool>> = self.selections.values().cloned().collect();
        clear_selection(&slots, &self.select_subset);
    }

    pub(crate) fn selection_slot_handles(&self) -> Vec<State<bool>> {
        self.selections.values().cloned().collect()
    }
}

/// Reset the given selection slots, firing exactly one notification
///
/// Shared between [`Model::unselect_all`] and the action bar's clear
/// button, which outlives the model that rendered it.
pub(crate) fn clear_selection(slots: &[State<bool>], select_subset: &State<bool>) {
    for slot in slots {
        slot.set_silent(false);
    }
    select_subset.set_silent(false);
    select_subset.notify();
}

impl<E: Identifiable> std::fmt::Debug for Model<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("prefix", &self.prefix)
            .field("keys", &self.all_keys.len())
            .field("subset", &self.subset.len())
            .field("selection_count", &self.selection_count)
            .field("page_idx", &self.page.page_idx)
            .finish()
    }
}

/// Slot key for one entity's selection checkbox
pub fn checkbox_key<K: EntityKey>(prefix: &str, key: &K) -> String {
    format!("{}-checkbox-{}", prefix, key.as_str())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nago_core::{NagoError, SizeClass, VecSource};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Customer {
        id: String,
        name: String,
    }

    impl Identifiable for Customer {
        type Key = String;

        fn identity(&self) -> String {
            self.id.clone()
        }
    }

    fn customers(n: usize) -> VecSource<Customer> {
        VecSource::new(
            (1..=n)
                .map(|i| Customer {
                    id: format!("c{i:03}"),
                    name: format!("Customer {i}"),
                })
                .collect(),
        )
    }

    fn build(
        window: &Window,
        source: &VecSource<Customer>,
        options: ModelOptions<Customer>,
    ) -> Model<Customer> {
        Model::new(window, source, source.find_all(), options).unwrap()
    }

    fn name_predicate() -> QueryPredicate<Customer> {
        Arc::new(|c: &Customer, q: &str| c.name.to_lowercase().contains(&q.to_lowercase()))
    }

    #[test]
    fn test_page_size_default_from_settings() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(45);
        let model = build(&window, &source, ModelOptions::new("list"));
        // Settings default is 20.
        assert_eq!(model.page().items.len(), 20);
        assert_eq!(model.page().page_count, 3);
    }

    #[test]
    fn test_selection_persists_across_pages() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(25);

        let model = build(&window, &source, ModelOptions::new("list").page_size(10));
        model.selection(&"c003".to_string()).set(true);

        // Navigate to page 2 and rebuild, as a render pass would.
        model.page_idx().set_silent(2);
        let model = build(&window, &source, ModelOptions::new("list").page_size(10));
        assert_eq!(model.selection_count(), 1);

        model.selection(&"c025".to_string()).set(true);

        // Back to the first page: both selections survive.
        model.page_idx().set_silent(0);
        let model = build(&window, &source, ModelOptions::new("list").page_size(10));
        assert_eq!(model.selection_count(), 2);
        assert!(model.selection(&"c003".to_string()).get());
        assert!(model.selection(&"c025".to_string()).get());
        assert_eq!(model.selected_keys(), vec!["c003", "c025"]);
    }

    #[test]
    fn test_select_subset_with_filter() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(30);

        // Pre-select an entity outside the upcoming subset.
        let model = build(
            &window,
            &source,
            ModelOptions::new("list").page_size(10).predicate(name_predicate()),
        );
        model.selection(&"c030".to_string()).set(true);

        // Filter down to "Customer 1" .. "Customer 19" matches on "er 1".
        model.query().set_silent("er 1".to_string());
        let model = build(
            &window,
            &source,
            ModelOptions::new("list").page_size(10).predicate(name_predicate()),
        );
        let subset_size = model.subset().len();
        assert_eq!(subset_size, 11); // 1, 10..19
        assert!(!model.select_subset().get());

        // Select-all applies to the subset only.
        model.select_subset().set(true);
        let model = build(
            &window,
            &source,
            ModelOptions::new("list").page_size(10).predicate(name_predicate()),
        );
        assert_eq!(model.selection_count(), subset_size + 1);
        assert!(model.select_subset().get());

        // Toggling back off deselects exactly the subset.
        model.select_subset().set(false);
        let model = build(
            &window,
            &source,
            ModelOptions::new("list").page_size(10).predicate(name_predicate()),
        );
        assert_eq!(model.selection_count(), 1);
        assert!(model.selection(&"c030".to_string()).get());
    }

    #[test]
    fn test_select_subset_derived_from_individual_toggles() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(3);
        let model = build(&window, &source, ModelOptions::new("list").page_size(10));

        model.selection(&"c001".to_string()).set(true);
        model.selection(&"c002".to_string()).set(true);
        assert!(!model.select_subset().get());

        model.selection(&"c003".to_string()).set(true);
        assert!(model.select_subset().get());

        model.selection(&"c002".to_string()).set(false);
        assert!(!model.select_subset().get());
    }

    #[test]
    fn test_unselect_all_single_notification() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(8);
        let model = build(&window, &source, ModelOptions::new("list").page_size(5));

        model.selection(&"c001".to_string()).set(true);
        model.selection(&"c007".to_string()).set(true);

        let before = window.scope().notification_count();
        model.unselect_all();
        assert_eq!(window.scope().notification_count(), before + 1);

        let model = build(&window, &source, ModelOptions::new("list").page_size(5));
        assert_eq!(model.selection_count(), 0);
    }

    #[test]
    fn test_end_to_end_three_pages() {
        // 125 entities, page size 50: pages of 50/50/25; selections on two
        // different pages are both counted from page 0.
        let window = Window::new(SizeClass::Medium);
        let source = customers(125);
        let options = || ModelOptions::<Customer>::new("grid").page_size(50);

        let model = build(&window, &source, options());
        assert_eq!(model.page().page_count, 3);
        assert_eq!(model.page().items.len(), 50);

        model.selection(&"c001".to_string()).set(true);

        model.page_idx().set_silent(1);
        let model = build(&window, &source, options());
        assert_eq!(model.page().items.len(), 50);
        model.selection(&"c076".to_string()).set(true);

        model.page_idx().set_silent(2);
        let model = build(&window, &source, options());
        assert_eq!(model.page().items.len(), 25);

        model.page_idx().set_silent(0);
        let model = build(&window, &source, options());
        assert_eq!(model.selection_count(), 2);

        let before = window.scope().notification_count();
        model.unselect_all();
        assert_eq!(window.scope().notification_count(), before + 1);
        let model = build(&window, &source, options());
        assert_eq!(model.selection_count(), 0);
    }

    #[test]
    fn test_sequence_error_fails_fast() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(2);
        let keys: KeySeq<'_, String> = Box::new(
            vec![
                Ok("c001".to_string()),
                Err(NagoError::data_source("backend down")),
            ]
            .into_iter(),
        );
        let result = Model::new(&window, &source, keys, ModelOptions::new("list"));
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "identity must not be empty")]
    fn test_nil_identity_panics() {
        let window = Window::new(SizeClass::Medium);
        let source = VecSource::new(vec![Customer {
            id: String::new(),
            name: "ghost".to_string(),
        }]);
        let _ = Model::new(
            &window,
            &source,
            source.find_all(),
            ModelOptions::new("list"),
        );
    }

    #[test]
    #[should_panic(expected = "no selection state")]
    fn test_unknown_key_selection_panics() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(2);
        let model = build(&window, &source, ModelOptions::new("list"));
        let _ = model.selection(&"not-there".to_string());
    }

    #[test]
    fn test_stale_query_page_yields_empty_trailing_page() {
        let window = Window::new(SizeClass::Medium);
        let source = customers(30);
        let model = build(&window, &source, ModelOptions::new("list").page_size(10));
        model.page_idx().set_silent(9);

        let model = build(&window, &source, ModelOptions::new("list").page_size(10));
        assert!(model.page().is_empty());
        assert_eq!(model.page().page_count, 3);
    }
}
