//! Comparator-driven key ordering
//!
//! Wraps a key sequence: without a comparator it is the identity function
//! with zero overhead; with one it eagerly materializes the data set, sorts
//! it stably and re-emits the keys lazily in sorted order.

use nago_core::{DataSource, EntityKey, Identifiable, KeySeq, State};
use std::cmp::Ordering;
use std::sync::Arc;

/// Entity comparator used for sorting and sortable columns
pub type Comparator<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

// ============================================================================
// SortOptions
// ============================================================================

/// Options for [`sort`]
pub struct SortOptions<K: EntityKey> {
    /// Optional cache slot for the sorted key order
    ///
    /// Populated on first use only; once filled, later calls reuse it even
    /// if the comparator changed. Writing `None` back into the slot forces
    /// the next call to materialize and sort again.
    pub cache: Option<State<Option<Vec<K>>>>,
}

impl<K: EntityKey> Default for SortOptions<K> {
    fn default() -> Self {
        Self { cache: None }
    }
}

// ============================================================================
// sort
// ============================================================================

/// Re-emit `keys` in comparator order
///
/// Stale keys are dropped silently. Errors from the input sequence or from
/// lookups are re-emitted as the first item of the returned sequence. The
/// returned sequence is lazy and supports early termination.
pub fn sort<'a, E, S>(
    source: &S,
    keys: KeySeq<'a, E::Key>,
    comparator: Option<&Comparator<E>>,
    options: &SortOptions<E::Key>,
) -> KeySeq<'a, E::Key>
where
    E: Identifiable,
    S: DataSource<E> + ?Sized,
{
    let Some(comparator) = comparator else {
        return keys;
    };

    if let Some(cache) = &options.cache
        && let Some(cached) = cache.get()
    {
        tracing::debug!(keys = cached.len(), "sorted order served from cache");
        return Box::new(cached.into_iter().map(Ok));
    }

    let mut entities: Vec<E> = Vec::new();
    for key in keys {
        let key = match key {
            Ok(key) => key,
            Err(e) => return Box::new(std::iter::once(Err(e))),
        };
        match source.find_by_id(&key) {
            Ok(Some(entity)) => entities.push(entity),
            Ok(None) => {
                tracing::debug!(key = key.as_str(), "skipping stale reference");
            }
            Err(e) => return Box::new(std::iter::once(Err(e))),
        }
    }

    // Vec::sort_by is stable, so equal entities keep their source order.
    entities.sort_by(|a, b| comparator(a, b));
    let sorted: Vec<E::Key> = entities.iter().map(|e| e.identity()).collect();

    if let Some(cache) = &options.cache {
        cache.set_silent(Some(sorted.clone()));
    }

    Box::new(sorted.into_iter().map(Ok))
}

// ============================================================================
// Tests
// ============================================================================
