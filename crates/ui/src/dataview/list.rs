//! List style
//!
//! One list item per page entity with the leading / headline / supporting /
//! trailing slot layout: checkbox in the leading slot, configurable
//! headline and supporting fields, a chevron in the trailing slot when a
//! row action is registered, and per-key highlighting.

use crate::dataview::field::Field;
use crate::dataview::DataView;
use crate::pager::{Model, pager};
use nago_core::{DataSource, EntityKey, Identifiable};
use nago_view::{Checkbox, Icon, ListItem, VStack, View};

pub(crate) fn render_list<E, S>(
    view: &DataView<E, S>,
    model: &Model<E>,
    fields: &[&Field<E>],
) -> View
where
    E: Identifiable + Clone + Send + Sync + 'static,
    S: DataSource<E>,
{
    let window = &view.window;
    let options = &view.list_options;
    let prefix = &view.state_prefix;

    let field_idx = |wanted: &Option<String>, fallback: usize| -> Option<usize> {
        match wanted {
            Some(id) => fields.iter().position(|f| f.field_id() == id.as_str()),
            None => (fallback < fields.len()).then_some(fallback),
        }
    };
    let headline_idx = field_idx(&options.headline_field, 0);
    let supporting_idx = field_idx(&options.supporting_field, 1);

    let mut stack = VStack::new();
    for entity in &model.page().items {
        let key = entity.identity();

        let headline = headline_idx
            .and_then(|idx| fields.get(idx))
            .map(|f| f.render(entity, window))
            .unwrap_or(View::Empty);
        let mut item = ListItem::new(headline)
            .highlighted(options.highlight.iter().any(|k| *k == key));

        if !view.hide_selection {
            let selection = model.selection(&key);
            item = item.leading(Checkbox::new(selection.key(), selection.get()));
        }
        if let Some(idx) = supporting_idx
            && let Some(field) = fields.get(idx)
        {
            item = item.supporting(field.render(entity, window));
        }
        if let Some(action) = &view.action {
            let action = action.clone();
            let entity_clone = entity.clone();
            let trigger = window.trigger(format!("{}-row-{}", prefix, key.as_str()), move || {
                action(&entity_clone);
            });
            item = item.trailing(Icon::new("chevron-right")).action(trigger.key());
        }
        stack = stack.child(item);
    }

    stack = stack.child(pager(window, model.page(), model.page_idx()));
    stack.into()
}

// ============================================================================
// Tests
// ============================================================================
