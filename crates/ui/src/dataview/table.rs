//! Table style
//!
//! Header row with sort-toggle buttons, one body row per page item with a
//! leading selection checkbox and a trailing chevron for row actions, and
//! a pager footer.

use crate::dataview::field::Field;
use crate::dataview::{DataView, sort_direction, sort_toggle_trigger};
use crate::pager::{Model, pager};
use nago_core::{DataSource, EntityKey, Identifiable};
use nago_view::{Checkbox, HStack, Icon, Table, TableColumn, TableRow, Text, TextStyle, View};

pub(crate) fn render_table<E, S>(
    view: &DataView<E, S>,
    model: &Model<E>,
    fields: &[&Field<E>],
) -> View
where
    E: Identifiable + Clone + Send + Sync + 'static,
    S: DataSource<E>,
{
    let window = &view.window;
    let prefix = &view.state_prefix;
    let mut table = Table::new();

    if !view.hide_selection {
        let subset = model.select_subset();
        table = table.column(TableColumn::new(Checkbox::new(
            subset.key(),
            subset.get(),
        )));
    }

    for field in fields {
        let mut header = HStack::new().child(Text::new(field.name()).style(TextStyle::Label));
        if field.is_sortable() {
            let trigger = sort_toggle_trigger::<E::Key>(window, prefix, field.field_id());
            let direction =
                sort_direction::<E::Key>(window.scope(), prefix, field.field_id());
            header = header.child(
                nago_view::Button::icon_only(direction.icon()).action(trigger.key()),
            );
        }
        table = table.column(TableColumn::new(header));
    }

    if view.action.is_some() {
        table = table.column(TableColumn::new(View::Empty));
    }

    for entity in &model.page().items {
        let key = entity.identity();
        let mut cells: Vec<View> = Vec::new();

        if !view.hide_selection {
            let selection = model.selection(&key);
            cells.push(Checkbox::new(selection.key(), selection.get()).into());
        }
        for field in fields {
            cells.push(field.render(entity, window));
        }

        let mut row = TableRow::new(Vec::new());
        if let Some(action) = &view.action {
            cells.push(Icon::new("chevron-right").into());
            let action = action.clone();
            let entity = entity.clone();
            let trigger = window.trigger(format!("{}-row-{}", prefix, key.as_str()), move || {
                action(&entity);
            });
            row = row.action(trigger.key());
        }
        row.cells = cells;
        table = table.row(row);
    }

    table = table.footer(pager(window, model.page(), model.page_idx()));
    table.into()
}

// ============================================================================
// Tests
// ============================================================================
