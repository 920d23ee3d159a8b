//! Window ambient context
//!
//! A [`Window`] bundles everything a render pass needs from its
//! surroundings: the session's state scope, the message bundle, the
//! reported size class and the deployment settings. The presentation core
//! never owns any of these - they are injected collaborators.

use crate::bundle::Bundle;
use crate::settings::Settings;
use crate::state::{State, StateScope};
use crate::types::SizeClass;
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Window
// ============================================================================

/// Ambient context for one user window session
///
/// Cheap to clone; clones share the same scope, bundle and settings.
#[derive(Clone)]
pub struct Window {
    inner: Arc<WindowInner>,
}

struct WindowInner {
    scope: StateScope,
    bundle: Bundle,
    size_class: SizeClass,
    settings: Settings,
}

impl Window {
    /// Create a window with default bundle and settings
    pub fn new(size_class: SizeClass) -> Self {
        Self::with_parts(StateScope::new(), Bundle::new(), size_class, Settings::new())
    }

    /// Create a window from explicit collaborators
    pub fn with_parts(
        scope: StateScope,
        bundle: Bundle,
        size_class: SizeClass,
        settings: Settings,
    ) -> Self {
        Self {
            inner: Arc::new(WindowInner {
                scope,
                bundle,
                size_class,
                settings,
            }),
        }
    }

    /// The session's state scope
    pub fn scope(&self) -> &StateScope {
        &self.inner.scope
    }

    /// The message bundle
    pub fn bundle(&self) -> &Bundle {
        &self.inner.bundle
    }

    /// The reported horizontal size class
    pub fn size_class(&self) -> SizeClass {
        self.inner.size_class
    }

    /// The deployment settings
    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Generate a unique state-key namespace for callers that supply none
    pub fn fresh_prefix(&self) -> String {
        format!("anon-{}", Uuid::new_v4().simple())
    }

    /// Build a trigger at the given key with its press callback
    ///
    /// Re-building a trigger for the same key on a later render replaces
    /// the callback, it does not stack another one.
    pub fn trigger(&self, key: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Trigger {
        let presses: State<u64> = self.inner.scope.state(key);
        presses.observe(move || callback());
        Trigger { presses }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("size_class", &self.inner.size_class)
            .field("scope", &self.inner.scope)
            .finish()
    }
}

// ============================================================================
// Trigger
// ============================================================================

/// A named press counter with an attached callback
///
/// Buttons and menu items reference a trigger by its state key; the client
/// runtime bumps the counter on interaction, which fires the callback. In
/// tests and the demo, [`Trigger::fire`] simulates the press.
#[derive(Clone)]
pub struct Trigger {
    presses: State<u64>,
}

impl Trigger {
    /// The state key buttons reference
    pub fn key(&self) -> &str {
        self.presses.key()
    }

    /// Simulate a press: bump the counter and run the callback
    pub fn fire(&self) {
        self.presses.update(|n| *n += 1);
    }

    /// Number of presses so far
    pub fn presses(&self) -> u64 {
        self.presses.get()
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("key", &self.key())
            .field("presses", &self.presses())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
