//! Identity and finder contracts
//!
//! Every entity that participates in a pager model or data view exposes a
//! stable string-like identity key. Data access goes through the finder
//! pair: an ordered, lazy, fallible sequence of keys plus a point lookup
//! that treats "not found" as a legitimate, skippable outcome.

use crate::error::NagoResult;
use std::fmt::Debug;
use std::hash::Hash;

// ============================================================================
// EntityKey Trait
// ============================================================================

/// Bound for identity keys
///
/// Keys are cheap to clone, hashable, and string-like. The empty string is
/// the nil key; an entity with a nil key must never reach a model or data
/// view (that is a programming error and panics there, by contract).
pub trait EntityKey: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// String form of the key, used for state-slot addressing
    fn as_str(&self) -> &str;

    /// Check whether this is the nil (empty) key
    fn is_nil(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl EntityKey for String {
    fn as_str(&self) -> &str {
        self
    }
}

impl EntityKey for &'static str {
    fn as_str(&self) -> &str {
        self
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for entities that expose a stable identity key
pub trait Identifiable {
    /// The key type for this entity
    type Key: EntityKey;

    /// Get the identity key
    fn identity(&self) -> Self::Key;
}

// ============================================================================
// Finder Contracts
// ============================================================================

/// An ordered, lazy, fallible sequence of identity keys
pub type KeySeq<'a, K> = Box<dyn Iterator<Item = NagoResult<K>> + 'a>;

/// The finder pair every data set is accessed through
///
/// `find_all` yields keys in the source's order. `find_by_id` returning
/// `Ok(None)` is the stale-reference case: a key that was yielded earlier
/// but no longer resolves. Consumers skip it silently, they never treat it
/// as an error.
pub trait DataSource<E: Identifiable> {
    /// All identity keys, in source order
    fn find_all(&self) -> KeySeq<'_, E::Key>;

    /// Point lookup for a single entity
    fn find_by_id(&self, key: &E::Key) -> NagoResult<Option<E>>;
}

// ============================================================================
// VecSource
// ============================================================================

/// In-memory data source over a vector of entities
///
/// The workhorse for demos and tests; order of `find_all` is insertion order.
#[derive(Debug, Clone, Default)]
pub struct VecSource<E> {
    items: Vec<E>,
}

impl<E: Identifiable + Clone> VecSource<E> {
    /// Create a source over the given entities
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the source is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an entity
    pub fn push(&mut self, item: E) {
        self.items.push(item);
    }

    /// Remove the entity with the given key, if present
    pub fn remove(&mut self, key: &E::Key) -> Option<E> {
        let idx = self.items.iter().position(|e| e.identity() == *key)?;
        Some(self.items.remove(idx))
    }

    /// Borrow the underlying entities
    pub fn items(&self) -> &[E] {
        &self.items
    }
}

impl<E: Identifiable + Clone> DataSource<E> for VecSource<E> {
    fn find_all(&self) -> KeySeq<'_, E::Key> {
        Box::new(self.items.iter().map(|e| Ok(e.identity())))
    }

    fn find_by_id(&self, key: &E::Key) -> NagoResult<Option<E>> {
        Ok(self.items.iter().find(|e| e.identity() == *key).cloned())
    }
}

// ============================================================================
// FnSource
// ============================================================================

/// Adapter lifting a pair of closures into a [`DataSource`]
///
/// Used when the backing store is not a plain vector, e.g. a shared
/// repository behind a lock or a computed index.
pub struct FnSource<FA, FB> {
    find_all: FA,
    find_by_id: FB,
}

impl<FA, FB> FnSource<FA, FB> {
    /// Create a source from a key-listing closure and a lookup closure
    pub fn new(find_all: FA, find_by_id: FB) -> Self {
        Self {
            find_all,
            find_by_id,
        }
    }
}

impl<E, FA, FB> DataSource<E> for FnSource<FA, FB>
where
    E: Identifiable,
    FA: Fn() -> Vec<NagoResult<E::Key>>,
    FB: Fn(&E::Key) -> NagoResult<Option<E>>,
{
    fn find_all(&self) -> KeySeq<'_, E::Key> {
        Box::new((self.find_all)().into_iter())
    }

    fn find_by_id(&self, key: &E::Key) -> NagoResult<Option<E>> {
        (self.find_by_id)(key)
    }
}

// ============================================================================
// Tests
// ============================================================================
