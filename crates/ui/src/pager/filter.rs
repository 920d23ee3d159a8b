//! Filter-and-paginate primitive
//!
//! Given the full key list, an optional predicate and a page request, this
//! materializes exactly one page of entities plus the data-set totals.
//! Every key is looked up and (when filtering) tested, so the pass is O(N)
//! point lookups per render - the model's documented trade-off for
//! stateless recomputation.

use nago_core::{DataSource, EntityKey, Identifiable, NagoError, NagoResult, Page, PageRequest};

/// Materialize one page from `keys`
///
/// Stale keys (lookup returns `None`) are skipped silently. The second
/// return value is the full list of accepted keys in order - the "current
/// subset" select-all operates on when a filter is active.
pub fn filter_and_paginate<E, S>(
    source: &S,
    keys: &[E::Key],
    predicate: Option<&dyn Fn(&E) -> bool>,
    request: PageRequest,
) -> NagoResult<(Page<E>, Vec<E::Key>)>
where
    E: Identifiable,
    S: DataSource<E> + ?Sized,
{
    if request.page_size == 0 {
        return Err(NagoError::paginate("page size must be non-zero"));
    }

    let offset = request.offset();
    let end = offset + request.page_size;

    let mut accepted: Vec<E::Key> = Vec::new();
    let mut items: Vec<E> = Vec::new();

    for key in keys {
        let Some(entity) = source.find_by_id(key)? else {
            tracing::debug!(key = key.as_str(), "skipping stale reference");
            continue;
        };
        if let Some(predicate) = predicate
            && !predicate(&entity)
        {
            continue;
        }

        let idx = accepted.len();
        accepted.push(key.clone());
        if idx >= offset && idx < end {
            items.push(entity);
        }
    }

    let total = accepted.len();
    Ok((Page::new(items, request, total), accepted))
}

// ============================================================================
// Tests
// ============================================================================
