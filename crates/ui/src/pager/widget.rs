//! Pager widget
//!
//! Pure rendering of prev/next controls around a range label, bound to a
//! model's page-index state.

use nago_core::{Page, State, Window};
use nago_view::{Button, HStack, View};

/// Render the prev/next pager row for a page
///
/// The buttons fire triggers that decrement/increment the page-index state;
/// each is disabled at its edge of the data set.
pub fn pager<E>(window: &Window, page: &Page<E>, page_idx: &State<usize>) -> View {
    let prev = {
        let page_idx = page_idx.clone();
        window.trigger(format!("{}-prev", page_idx.key()), move || {
            page_idx.update(|idx| *idx = idx.saturating_sub(1));
        })
    };
    let next = {
        let page_idx = page_idx.clone();
        let page_count = page.page_count;
        window.trigger(format!("{}-next", page_idx.key()), move || {
            page_idx.update(|idx| {
                if *idx + 1 < page_count {
                    *idx += 1;
                }
            });
        })
    };

    HStack::new()
        .child(
            Button::icon_only("chevron-left")
                .action(prev.key())
                .disabled(!page.has_prev()),
        )
        .child(View::label(range_label(window, page)))
        .child(
            Button::icon_only("chevron-right")
                .action(next.key())
                .disabled(!page.has_next()),
        )
        .into()
}

/// Localized "first-last of total" label for a page
pub fn range_label<E>(window: &Window, page: &Page<E>) -> String {
    let of = window.bundle().resolve("pager.of");
    if page.is_empty() {
        format!("0 {} {}", of, page.total)
    } else {
        format!(
            "{}-{} {} {}",
            page.first_item_ordinal(),
            page.last_item_ordinal(),
            of,
            page.total
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nago_core::{PageRequest, SizeClass};
    use pretty_assertions::assert_eq;

    fn page(page_idx: usize, page_size: usize, total: usize) -> Page<u32> {
        let offset = page_idx * page_size;
        let count = total.saturating_sub(offset).min(page_size);
        Page::new(
            (0..count as u32).collect(),
            PageRequest::new(page_idx, page_size),
            total,
        )
    }

    #[test]
    fn test_range_label() {
        let window = Window::new(SizeClass::Medium);
        assert_eq!(range_label(&window, &page(0, 50, 125)), "1-50 of 125");
        assert_eq!(range_label(&window, &page(2, 50, 125)), "101-125 of 125");
        assert_eq!(range_label(&window, &page(0, 50, 0)), "0 of 0");
    }

    #[test]
    fn test_buttons_disabled_at_edges() {
        let window = Window::new(SizeClass::Medium);
        let page_idx: State<usize> = window.scope().state("list-page");

        let view = pager(&window, &page(0, 50, 125), &page_idx);
        let mut buttons = Vec::new();
        view.walk(&mut |node| {
            if let View::Button(b) = node {
                buttons.push(b.disabled);
            }
        });
        assert_eq!(buttons, vec![true, false]);
    }

    #[test]
    fn test_next_and_prev_fire() {
        let window = Window::new(SizeClass::Medium);
        let page_idx: State<usize> = window.scope().state("list-page");

        let _ = pager(&window, &page(0, 50, 125), &page_idx);
        let next: State<u64> = window.scope().state("list-page-next");
        next.update(|n| *n += 1);
        assert_eq!(page_idx.get(), 1);

        let _ = pager(&window, &page(1, 50, 125), &page_idx);
        let prev: State<u64> = window.scope().state("list-page-prev");
        prev.update(|n| *n += 1);
        assert_eq!(page_idx.get(), 0);

        // Prev at the first page is a no-op.
        prev.update(|n| *n += 1);
        assert_eq!(page_idx.get(), 0);
    }

    #[test]
    fn test_next_clamped_at_last_page() {
        let window = Window::new(SizeClass::Medium);
        let page_idx: State<usize> = window.scope().state("grid-page");
        page_idx.set_silent(2);

        let _ = pager(&window, &page(2, 50, 125), &page_idx);
        let next: State<u64> = window.scope().state("grid-page-next");
        next.update(|n| *n += 1);
        assert_eq!(page_idx.get(), 2);
    }
}
