//! Action bar and bulk select options
//!
//! Shared across the three styles: the search box, the "N selected" badge
//! with its clear button, the select-option menu (optionally gated by a
//! confirm dialog over the selected keys), a sort menu for the non-table
//! styles, and the "new" action.

use crate::dataview::field::Field;
use crate::dataview::{DataView, Style, sort_direction, sort_toggle_trigger};
use crate::pager::Model;
use crate::pager::model::clear_selection;
use nago_core::{Bundle, DataSource, EntityKey, Identifiable, State};
use nago_view::{
    Badge, Button, Dialog, HStack, Menu, MenuItem, SearchField, View,
};
use std::sync::Arc;

type ConfirmFn<K> = Arc<dyn Fn(&[K]) -> Option<ConfirmPrompt> + Send + Sync>;
type ApplyFn<K> = Arc<dyn Fn(Vec<K>) + Send + Sync>;

// ============================================================================
// SelectOption
// ============================================================================

/// Confirmation prompt shown before a select option applies
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
}

/// One bulk action over the currently selected keys
pub struct SelectOption<K: EntityKey> {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) icon: Option<String>,
    pub(crate) confirm: Option<ConfirmFn<K>>,
    pub(crate) apply: ApplyFn<K>,
}

impl<K: EntityKey> SelectOption<K> {
    /// Create a select option applying `apply` to the selected keys
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        apply: impl Fn(Vec<K>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            confirm: None,
            apply: Arc::new(apply),
        }
    }

    /// Set the menu icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Gate the option behind a confirm dialog
    ///
    /// The gate inspects the selected keys; returning `None` skips the
    /// dialog and applies immediately.
    pub fn confirm_when(
        mut self,
        gate: impl Fn(&[K]) -> Option<ConfirmPrompt> + Send + Sync + 'static,
    ) -> Self {
        self.confirm = Some(Arc::new(gate));
        self
    }
}

impl<K: EntityKey> std::fmt::Debug for SelectOption<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectOption")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("confirm", &self.confirm.is_some())
            .finish()
    }
}

/// Standard delete option with a pluralization-aware confirm dialog
pub fn select_option_delete<K: EntityKey>(
    bundle: &Bundle,
    on_delete: impl Fn(Vec<K>) + Send + Sync + 'static,
) -> SelectOption<K> {
    let title = bundle.resolve("dataview.delete");
    let one = bundle.resolve("dataview.delete.one");
    let many = bundle.resolve("dataview.delete.many");
    let dialog_title = title.clone();

    SelectOption::new("delete", title, on_delete)
        .icon("trash")
        .confirm_when(move |keys: &[K]| {
            let message = if keys.len() == 1 {
                one.clone()
            } else {
                many.replace("{count}", &keys.len().to_string())
            };
            Some(ConfirmPrompt {
                title: dialog_title.clone(),
                message,
            })
        })
}

// ============================================================================
// Pending action
// ============================================================================

#[derive(Clone)]
pub(crate) struct PendingAction<K> {
    option_id: String,
    keys: Vec<K>,
    title: String,
    message: String,
}

fn pending_key(prefix: &str) -> String {
    format!("{prefix}-pending-action")
}

// ============================================================================
// Action bar
// ============================================================================

pub(crate) fn action_bar<E, S>(
    view: &DataView<E, S>,
    model: &Model<E>,
    style: Style,
    fields: &[&Field<E>],
) -> View
where
    E: Identifiable + Clone + Send + Sync + 'static,
    S: DataSource<E>,
{
    let window = &view.window;
    let bundle = window.bundle();
    let prefix = &view.state_prefix;
    let mut bar = HStack::new();

    if view.search_active() {
        bar = bar.child(
            SearchField::new(model.query().key(), model.query().get())
                .placeholder(bundle.resolve("dataview.search")),
        );
    }

    if !view.hide_selection && model.selection_count() > 0 {
        bar = bar.child(Badge::new(
            bundle.resolve_count("dataview.selected", model.selection_count()),
        ));
        let slots = model.selection_slot_handles();
        let subset = model.select_subset().clone();
        let clear = window.trigger(format!("{prefix}-clear-selection"), move || {
            clear_selection(&slots, &subset);
        });
        bar = bar.child(Button::new(bundle.resolve("dataview.clear")).action(clear.key()));
    }

    if !view.hide_selection && !view.select_options.is_empty() {
        let pending: State<Option<PendingAction<E::Key>>> =
            window.scope().state(pending_key(prefix));
        let selected = model.selected_keys();

        let mut menu = Menu::new().icon("ellipsis-vertical");
        for option in &view.select_options {
            let trigger = window.trigger(format!("{prefix}-option-{}", option.id), {
                let keys = selected.clone();
                let confirm = option.confirm.clone();
                let apply = option.apply.clone();
                let pending = pending.clone();
                let option_id = option.id.clone();
                move || {
                    if keys.is_empty() {
                        return;
                    }
                    match confirm.as_ref().and_then(|gate| gate(&keys)) {
                        Some(prompt) => pending.set(Some(PendingAction {
                            option_id: option_id.clone(),
                            keys: keys.clone(),
                            title: prompt.title,
                            message: prompt.message,
                        })),
                        None => apply(keys.clone()),
                    }
                }
            });
            let mut item =
                MenuItem::new(option.label.clone(), trigger.key()).disabled(selected.is_empty());
            if let Some(icon) = &option.icon {
                item = item.icon(icon.clone());
            }
            menu = menu.item(item);
        }
        bar = bar.child(menu);
    }

    // Table headers carry their own sort toggles; the other styles get a
    // sort menu instead.
    let sortable: Vec<&&Field<E>> = fields.iter().filter(|f| f.is_sortable()).collect();
    if style != Style::Table && !sortable.is_empty() {
        let mut menu = Menu::new().icon("arrows-up-down");
        for field in sortable {
            let trigger = sort_toggle_trigger::<E::Key>(window, prefix, field.field_id());
            let direction = sort_direction::<E::Key>(window.scope(), prefix, field.field_id());
            menu = menu.item(
                MenuItem::new(field.name(), trigger.key()).icon(direction.icon()),
            );
        }
        bar = bar.child(menu);
    }

    if let Some(new_action) = &view.new_action {
        let callback = new_action.callback.clone();
        let trigger = window.trigger(format!("{prefix}-new"), move || callback());
        bar = bar.child(
            Button::new(new_action.label.clone())
                .icon("plus")
                .action(trigger.key()),
        );
    }

    bar.into()
}

// ============================================================================
// Pending confirm dialog
// ============================================================================

pub(crate) fn pending_dialog<E, S>(view: &DataView<E, S>) -> Option<View>
where
    E: Identifiable + Clone + Send + Sync + 'static,
    S: DataSource<E>,
{
    let window = &view.window;
    let prefix = &view.state_prefix;
    let pending: State<Option<PendingAction<E::Key>>> =
        window.scope().state(pending_key(prefix));
    let action = pending.get()?;

    let Some(option) = view
        .select_options
        .iter()
        .find(|option| option.id == action.option_id)
    else {
        tracing::warn!(option = %action.option_id, "pending action no longer registered");
        pending.set_silent(None);
        return None;
    };

    let confirm = window.trigger(format!("{prefix}-confirm-action"), {
        let apply = option.apply.clone();
        let keys = action.keys.clone();
        let pending = pending.clone();
        move || {
            apply(keys.clone());
            pending.set(None);
        }
    });
    let cancel = window.trigger(format!("{prefix}-cancel-action"), {
        let pending = pending.clone();
        move || pending.set(None)
    });

    let bundle = window.bundle();
    Some(
        Dialog::new(
            action.title,
            action.message,
            Button::new(bundle.resolve("dialog.confirm"))
                .action(confirm.key())
                .destructive(true),
            Button::new(bundle.resolve("dialog.cancel")).action(cancel.key()),
        )
        .into(),
    )
}

// ============================================================================
// Tests
// ============================================================================
