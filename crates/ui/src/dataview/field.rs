//! Field descriptors
//!
//! A [`Field`] describes one column/attribute of a data view: how to render
//! it for an entity, whether it can sort the view, whether it is currently
//! visible, and optionally how to project it to text for free-text search.

use crate::pager::Comparator;
use nago_core::{Identifiable, Window};
use nago_view::View;
use std::cmp::Ordering;
use std::sync::Arc;

type MapFn<E> = Arc<dyn Fn(&E, &Window) -> View + Send + Sync>;
type VisibleFn = Arc<dyn Fn(&Window) -> bool + Send + Sync>;
type TextFn<E> = Arc<dyn Fn(&E) -> String + Send + Sync>;

// ============================================================================
// Field
// ============================================================================

/// One field of a data view
pub struct Field<E> {
    id: String,
    name: String,
    map: MapFn<E>,
    comparator: Option<Comparator<E>>,
    visible: Option<VisibleFn>,
    text: Option<TextFn<E>>,
}

impl<E: Identifiable + 'static> Field<E> {
    /// Create a field rendering through the given mapper
    ///
    /// The id starts empty; fields without an explicit id are assigned
    /// their zero-based position when added to a data view.
    pub fn new(
        name: impl Into<String>,
        map: impl Fn(&E, &Window) -> View + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            map: Arc::new(map),
            comparator: None,
            visible: None,
            text: None,
        }
    }

    /// Create a text field from a string projection
    ///
    /// The projection doubles as the search text, so fields built this way
    /// are searchable by default.
    pub fn text_of(
        name: impl Into<String>,
        project: impl Fn(&E) -> String + Send + Sync + 'static,
    ) -> Self {
        let project: TextFn<E> = Arc::new(project);
        let map_project = project.clone();
        Self {
            id: String::new(),
            name: name.into(),
            map: Arc::new(move |entity, _| View::text(map_project(entity))),
            comparator: None,
            visible: None,
            text: Some(project),
        }
    }

    /// Set an explicit field id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the comparator enabling sort-by-this-field
    pub fn comparator(
        mut self,
        comparator: impl Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Set a visibility predicate over the window
    pub fn visible_when(mut self, visible: impl Fn(&Window) -> bool + Send + Sync + 'static) -> Self {
        self.visible = Some(Arc::new(visible));
        self
    }

    /// Set the search-text projection
    pub fn searchable(mut self, project: impl Fn(&E) -> String + Send + Sync + 'static) -> Self {
        self.text = Some(Arc::new(project));
        self
    }

    /// The field id (positional once registered, unless set explicitly)
    pub fn field_id(&self) -> &str {
        &self.id
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the field for one entity
    pub fn render(&self, entity: &E, window: &Window) -> View {
        (self.map)(entity, window)
    }

    /// Check whether the field sorts the view
    pub fn is_sortable(&self) -> bool {
        self.comparator.is_some()
    }

    /// The comparator, if any
    pub fn comparator_fn(&self) -> Option<Comparator<E>> {
        self.comparator.clone()
    }

    /// Check visibility for the window (visible by default)
    pub fn is_visible(&self, window: &Window) -> bool {
        self.visible.as_ref().is_none_or(|v| v(window))
    }

    /// The search-text projection, if any
    pub fn text_fn(&self) -> Option<TextFn<E>> {
        self.text.clone()
    }

    pub(crate) fn assign_positional_id(&mut self, position: usize) {
        if self.id.is_empty() {
            self.id = position.to_string();
        }
    }
}

impl<E> Clone for Field<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            map: self.map.clone(),
            comparator: self.comparator.clone(),
            visible: self.visible.clone(),
            text: self.text.clone(),
        }
    }
}

impl<E> std::fmt::Debug for Field<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("sortable", &self.comparator.is_some())
            .field("searchable", &self.text.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nago_core::SizeClass;

    #[derive(Debug, Clone)]
    struct Row {
        id: String,
        label: String,
    }

    impl Identifiable for Row {
        type Key = String;

        fn identity(&self) -> String {
            self.id.clone()
        }
    }

    #[test]
    fn test_text_field_renders_and_searches() {
        let window = Window::new(SizeClass::Medium);
        let field = Field::text_of("Label", |r: &Row| r.label.clone());
        let row = Row {
            id: "r1".to_string(),
            label: "Alpha".to_string(),
        };

        match field.render(&row, &window) {
            View::Text(t) => assert_eq!(t.content, "Alpha"),
            other => panic!("expected text node, got {other:?}"),
        }
        assert_eq!(field.text_fn().unwrap()(&row), "Alpha");
    }

    #[test]
    fn test_positional_id_only_when_empty() {
        let mut implicit = Field::text_of("A", |r: &Row| r.label.clone());
        implicit.assign_positional_id(3);
        assert_eq!(implicit.field_id(), "3");

        let mut explicit = Field::text_of("B", |r: &Row| r.label.clone()).id("label");
        explicit.assign_positional_id(3);
        assert_eq!(explicit.field_id(), "label");
    }

    #[test]
    fn test_visibility_defaults_true() {
        let window = Window::new(SizeClass::Compact);
        let field = Field::text_of("A", |r: &Row| r.label.clone());
        assert!(field.is_visible(&window));

        let hidden = Field::text_of("B", |r: &Row| r.label.clone())
            .visible_when(|w| !w.size_class().is_compact());
        assert!(!hidden.is_visible(&window));
    }

    #[test]
    fn test_sortable() {
        let field = Field::text_of("A", |r: &Row| r.label.clone())
            .comparator(|a: &Row, b: &Row| a.label.cmp(&b.label));
        assert!(field.is_sortable());
    }
}
