//! Keyed observable state for window sessions
//!
//! All UI state the pager, data-view and form layers produce - selection
//! flags, query text, page indices, sort choices, widget values - lives in a
//! [`StateScope`]: a session-scoped, string-keyed store of typed slots.
//! Slots outlive individual render passes, which is what lets a freshly
//! rebuilt model find last render's selection intact.
//!
//! Concurrency contract: one writer at a time per render pass; concurrent
//! readers are safe. Observers run after all internal locks are released, so
//! an observer may freely read and write other slots.

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// StateValue
// ============================================================================

/// Bound for values a state slot can hold
pub trait StateValue: Any + Clone + Send + 'static {}

impl<T: Any + Clone + Send + 'static> StateValue for T {}

// ============================================================================
// Slot
// ============================================================================

type Observer = Arc<dyn Fn() + Send + Sync>;

struct Slot {
    value: Box<dyn Any + Send>,
    observer: Option<Observer>,
}

// ============================================================================
// StateScope
// ============================================================================

/// Session/window-scoped store of named, typed, observable state slots
///
/// Cloning a scope yields another handle onto the same slots.
#[derive(Clone, Default)]
pub struct StateScope {
    inner: Arc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    slots: Mutex<HashMap<String, Arc<Mutex<Slot>>>>,
    notifications: AtomicU64,
}

impl StateScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the slot for `key`, initializing with `T::default()`
    pub fn state<T: StateValue + Default>(&self, key: impl Into<String>) -> State<T> {
        self.state_init(key, T::default)
    }

    /// Get or create the slot for `key` with a lazy initializer
    ///
    /// The initializer runs only when the slot is first created. Subsequent
    /// calls for the same key return a handle to the existing slot and never
    /// run the initializer again - this is what gives widget defaults their
    /// apply-once semantics.
    ///
    /// # Panics
    ///
    /// Panics if the slot already exists with a different value type. That
    /// is a key collision between two components and indicates a programming
    /// error upstream.
    pub fn state_init<T: StateValue>(
        &self,
        key: impl Into<String>,
        init: impl FnOnce() -> T,
    ) -> State<T> {
        let key = key.into();
        let slot = {
            let mut slots = self.inner.slots.lock().expect("state scope lock poisoned");
            slots
                .entry(key.clone())
                .or_insert_with(|| {
                    Arc::new(Mutex::new(Slot {
                        value: Box::new(init()),
                        observer: None,
                    }))
                })
                .clone()
        };

        {
            let guard = slot.lock().expect("state slot lock poisoned");
            if !guard.value.is::<T>() {
                panic!(
                    "state slot '{}' already holds a different type (expected {})",
                    key,
                    std::any::type_name::<T>()
                );
            }
        }

        State {
            key,
            slot,
            scope: self.clone(),
            _marker: PhantomData,
        }
    }

    /// Check whether a slot exists for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .slots
            .lock()
            .expect("state scope lock poisoned")
            .contains_key(key)
    }

    /// Drop the slot for `key`
    ///
    /// Handles created before removal keep operating on the detached slot;
    /// the next `state`/`state_init` call for the key creates a fresh one.
    pub fn remove(&self, key: &str) {
        self.inner
            .slots
            .lock()
            .expect("state scope lock poisoned")
            .remove(key);
    }

    /// Number of live slots
    pub fn len(&self) -> usize {
        self.inner
            .slots
            .lock()
            .expect("state scope lock poisoned")
            .len()
    }

    /// Check whether the scope holds no slots
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Running count of notify dispatches across all slots
    ///
    /// Every non-silent write and every explicit [`State::notify`] counts
    /// exactly once, whether or not an observer is registered.
    pub fn notification_count(&self) -> u64 {
        self.inner.notifications.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for StateScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateScope")
            .field("slots", &self.len())
            .field("notifications", &self.notification_count())
            .finish()
    }
}

// ============================================================================
// State
// ============================================================================

/// Typed handle onto one slot of a [`StateScope`]
///
/// Handles are cheap to clone; all clones address the same slot.
pub struct State<T> {
    key: String,
    slot: Arc<Mutex<Slot>>,
    scope: StateScope,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            slot: self.slot.clone(),
            scope: self.scope.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: StateValue> State<T> {
    /// The slot key this handle addresses
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the current value
    ///
    /// # Panics
    ///
    /// Panics if the slot holds a different type (key collision).
    pub fn get(&self) -> T {
        let guard = self.slot.lock().expect("state slot lock poisoned");
        guard
            .value
            .downcast_ref::<T>()
            .unwrap_or_else(|| {
                panic!(
                    "state slot '{}' holds a different type (expected {})",
                    self.key,
                    std::any::type_name::<T>()
                )
            })
            .clone()
    }

    /// Write a new value and notify
    pub fn set(&self, value: T) {
        self.write(value);
        self.notify();
    }

    /// Write a new value without notifying
    ///
    /// Batch mutations use this so a whole pass fires a single notification
    /// at the end instead of one per slot.
    pub fn set_silent(&self, value: T) {
        self.write(value);
    }

    /// Mutate the value in place and notify
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut guard = self.slot.lock().expect("state slot lock poisoned");
            let value = guard.value.downcast_mut::<T>().unwrap_or_else(|| {
                panic!(
                    "state slot '{}' holds a different type (expected {})",
                    self.key,
                    std::any::type_name::<T>()
                )
            });
            f(value);
        }
        self.notify();
    }

    /// Register the slot's observer, replacing any previous one
    ///
    /// One observer per slot: re-registering on every render pass is the
    /// norm and must not accumulate callbacks.
    pub fn observe(&self, f: impl Fn() + Send + Sync + 'static) {
        let mut guard = self.slot.lock().expect("state slot lock poisoned");
        guard.observer = Some(Arc::new(f));
    }

    /// Clear the slot so the next access re-initializes it
    ///
    /// This handle (and any clones) keeps operating on the detached slot;
    /// only a fresh `state`/`state_init` call sees the re-initialized one.
    pub fn reset(&self) {
        self.scope.remove(&self.key);
    }

    /// Fire the slot's observer (if any) and count the notification
    pub fn notify(&self) {
        self.scope.inner.notifications.fetch_add(1, Ordering::Relaxed);
        let observer = {
            let guard = self.slot.lock().expect("state slot lock poisoned");
            guard.observer.clone()
        };
        if let Some(observer) = observer {
            observer();
        }
    }

    fn write(&self, value: T) {
        let mut guard = self.slot.lock().expect("state slot lock poisoned");
        if !guard.value.is::<T>() {
            panic!(
                "state slot '{}' holds a different type (expected {})",
                self.key,
                std::any::type_name::<T>()
            );
        }
        guard.value = Box::new(value);
    }
}

impl<T: StateValue + std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("key", &self.key)
            .field("value", &self.get())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_default_initialization() {
        let scope = StateScope::new();
        let count: State<i64> = scope.state("count");
        assert_eq!(count.get(), 0);
        count.set(5);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_init_runs_once() {
        let scope = StateScope::new();
        let runs = Arc::new(AtomicUsize::new(0));

        let runs_a = runs.clone();
        let a: State<String> = scope.state_init("greeting", move || {
            runs_a.fetch_add(1, Ordering::SeqCst);
            "hello".to_string()
        });
        assert_eq!(a.get(), "hello");

        let runs_b = runs.clone();
        let b: State<String> = scope.state_init("greeting", move || {
            runs_b.fetch_add(1, Ordering::SeqCst);
            "ignored".to_string()
        });
        assert_eq!(b.get(), "hello");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handles_share_slot() {
        let scope = StateScope::new();
        let a: State<bool> = scope.state("flag");
        let b: State<bool> = scope.state("flag");
        a.set(true);
        assert!(b.get());
    }

    #[test]
    fn test_observer_fires_on_set() {
        let scope = StateScope::new();
        let flag: State<bool> = scope.state("flag");
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_obs = fired.clone();
        flag.observe(move || {
            fired_obs.fetch_add(1, Ordering::SeqCst);
        });

        flag.set(true);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        flag.set_silent(false);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        flag.notify();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_observe_replaces_previous() {
        let scope = StateScope::new();
        let flag: State<bool> = scope.state("flag");
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_obs = first.clone();
        flag.observe(move || {
            first_obs.fetch_add(1, Ordering::SeqCst);
        });
        let second_obs = second.clone();
        flag.observe(move || {
            second_obs.fetch_add(1, Ordering::SeqCst);
        });

        flag.set(true);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observer_may_write_other_slots() {
        let scope = StateScope::new();
        let source: State<i64> = scope.state("source");
        let mirror: State<i64> = scope.state("mirror");

        let source_read = source.clone();
        let mirror_write = mirror.clone();
        source.observe(move || {
            mirror_write.set_silent(source_read.get() * 2);
        });

        source.set(21);
        assert_eq!(mirror.get(), 42);
    }

    #[test]
    fn test_notification_count() {
        let scope = StateScope::new();
        let a: State<i64> = scope.state("a");
        let b: State<i64> = scope.state("b");
        assert_eq!(scope.notification_count(), 0);

        a.set(1);
        b.set(2);
        b.set_silent(3);
        a.notify();
        assert_eq!(scope.notification_count(), 3);
    }

    #[test]
    fn test_update() {
        let scope = StateScope::new();
        let count: State<i64> = scope.state("count");
        count.update(|v| *v += 7);
        assert_eq!(count.get(), 7);
        assert_eq!(scope.notification_count(), 1);
    }

    #[test]
    fn test_contains_and_remove() {
        let scope = StateScope::new();
        assert!(!scope.contains("x"));
        let x: State<i64> = scope.state("x");
        x.set_silent(9);
        assert!(scope.contains("x"));
        assert_eq!(scope.len(), 1);

        scope.remove("x");
        assert!(!scope.contains("x"));

        // Recreating the key starts from the initializer again.
        let x2: State<i64> = scope.state("x");
        assert_eq!(x2.get(), 0);
    }

    #[test]
    fn test_reset_reinitializes_on_next_access() {
        let scope = StateScope::new();
        let slot: State<i64> = scope.state_init("cache", || 7);
        slot.set_silent(99);

        slot.reset();
        assert!(!scope.contains("cache"));
        let fresh: State<i64> = scope.state_init("cache", || 7);
        assert_eq!(fresh.get(), 7);
    }

    #[test]
    #[should_panic(expected = "different type")]
    fn test_type_conflict_panics() {
        let scope = StateScope::new();
        let _a: State<i64> = scope.state("slot");
        let _b: State<String> = scope.state("slot");
    }
}
