//! Card style
//!
//! A vertical stack of bordered cards, one per page item: a header row with
//! the selection checkbox and the title field, then label/value rows for
//! the remaining fields. Per-field hints can drop fields from cards
//! without touching the other styles.

use crate::dataview::field::Field;
use crate::dataview::{CardHint, DataView};
use crate::pager::{Model, pager};
use nago_core::{DataSource, Identifiable};
use nago_view::{Checkbox, HStack, Section, Text, TextStyle, VStack, View};

pub(crate) fn render_cards<E, S>(
    view: &DataView<E, S>,
    model: &Model<E>,
    fields: &[&Field<E>],
) -> View
where
    E: Identifiable + Clone + Send + Sync + 'static,
    S: DataSource<E>,
{
    let window = &view.window;
    let options = &view.card_options;

    let title_idx = options
        .title_field
        .as_ref()
        .and_then(|id| fields.iter().position(|f| f.field_id() == id.as_str()))
        .unwrap_or(0);

    let mut stack = VStack::new();
    for entity in &model.page().items {
        let key = entity.identity();
        let mut header = HStack::new();
        if !view.hide_selection {
            let selection = model.selection(&key);
            header = header.child(Checkbox::new(selection.key(), selection.get()));
        }
        if let Some(title_field) = fields.get(title_idx) {
            header = header.child(title_field.render(entity, window));
        }

        let mut card = Section::new().child(header);
        for (idx, field) in fields.iter().enumerate() {
            if idx == title_idx {
                continue;
            }
            let hint = options
                .hints
                .get(field.field_id())
                .copied()
                .unwrap_or_default();
            if hint == CardHint::Invisible {
                continue;
            }
            card = card.child(
                HStack::new()
                    .child(Text::new(field.name()).style(TextStyle::Label))
                    .child(field.render(entity, window)),
            );
        }
        stack = stack.child(card);
    }

    stack = stack.child(pager(window, model.page(), model.page_idx()));
    stack.into()
}

// ============================================================================
// Tests
// ============================================================================
