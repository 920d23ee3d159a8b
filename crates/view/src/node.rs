//! View tree nodes
//!
//! The [`View`] enum is the serialized contract between server-side pages
//! and the client renderer. Pages build a tree of typed view-builder
//! structs; the runtime ships it to the client as tagged JSON. Nodes are
//! pure data - no node touches a window or a state scope, bound controls
//! only carry the *key* of the state slot they bind to.

use crate::composite::{Dialog, ListItem, Menu, Table};
use crate::widgets::{
    Button, Checkbox, ColorField, DateField, DurationField, FloatField, ImageField, IntField,
    MultiSelectField, SearchField, SelectField, TextField, TimeFrameField, Toggle,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// View
// ============================================================================

/// A renderable node in the view tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    // Layout
    VStack(VStack),
    HStack(HStack),
    Spacer,
    Divider,
    Section(Section),

    // Text & decoration
    Text(Text),
    Icon(Icon),
    Badge(Badge),
    Banner(Banner),

    // Bound controls
    Checkbox(Checkbox),
    Toggle(Toggle),
    TextField(TextField),
    SearchField(SearchField),
    IntField(IntField),
    FloatField(FloatField),
    SelectField(SelectField),
    MultiSelectField(MultiSelectField),
    DateField(DateField),
    TimeFrameField(TimeFrameField),
    DurationField(DurationField),
    ColorField(ColorField),
    ImageField(ImageField),
    Button(Button),

    // Composites
    Menu(Menu),
    Dialog(Dialog),
    Table(Table),
    ListItem(ListItem),

    /// Renders nothing; placeholder for conditional slots
    Empty,
}

impl View {
    /// Convenience constructor for a body text node
    pub fn text(content: impl Into<String>) -> Self {
        Text::new(content).into()
    }

    /// Convenience constructor for a label text node
    pub fn label(content: impl Into<String>) -> Self {
        Text::new(content).style(TextStyle::Label).into()
    }

    /// Direct children of this node, if any
    pub fn children(&self) -> Vec<&View> {
        match self {
            View::VStack(v) => v.children.iter().collect(),
            View::HStack(v) => v.children.iter().collect(),
            View::Section(v) => v.children.iter().collect(),
            View::Table(v) => {
                let mut out: Vec<&View> = Vec::new();
                for column in &v.columns {
                    out.push(&column.header);
                }
                for row in &v.rows {
                    out.extend(row.cells.iter());
                }
                if let Some(footer) = &v.footer {
                    out.push(footer);
                }
                out
            }
            View::ListItem(v) => {
                let mut out: Vec<&View> = Vec::new();
                if let Some(leading) = &v.leading {
                    out.push(leading);
                }
                out.push(&v.headline);
                if let Some(supporting) = &v.supporting {
                    out.push(supporting);
                }
                if let Some(trailing) = &v.trailing {
                    out.push(trailing);
                }
                out
            }
            _ => Vec::new(),
        }
    }

    /// Visit this node and every descendant, depth first
    pub fn walk(&self, visit: &mut impl FnMut(&View)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Count nodes in the subtree matching a predicate
    pub fn count_where(&self, predicate: impl Fn(&View) -> bool) -> usize {
        let mut count = 0;
        self.walk(&mut |node| {
            if predicate(node) {
                count += 1;
            }
        });
        count
    }
}

// ============================================================================
// Layout Nodes
// ============================================================================

/// Vertical stack of children
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VStack {
    pub children: Vec<View>,
}

impl VStack {
    /// Create an empty vertical stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack over the given children
    pub fn of(children: Vec<View>) -> Self {
        Self { children }
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Horizontal stack of children
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HStack {
    pub children: Vec<View>,
}

impl HStack {
    /// Create an empty horizontal stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack over the given children
    pub fn of(children: Vec<View>) -> Self {
        Self { children }
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Bordered container with an optional title, used for form sections and
/// data cards
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub title: Option<String>,
    pub children: Vec<View>,
}

impl Section {
    /// Create an untitled section
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a titled section
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            children: Vec::new(),
        }
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append many children
    pub fn children(mut self, children: Vec<View>) -> Self {
        self.children.extend(children);
        self
    }
}

// ============================================================================
// Text & Decoration
// ============================================================================

/// Text display role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    #[default]
    Body,
    Title,
    Label,
    Supporting,
    Error,
}

/// A run of styled text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    pub style: TextStyle,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::Body,
        }
    }

    /// Set the display style
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Named icon glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub name: String,
}

impl Icon {
    /// Create an icon by name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Small emphasized label, e.g. a selection count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
}

impl Badge {
    /// Create a badge
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Banner severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Inline message banner, the error surface for failed view construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
}

impl Banner {
    /// Create a banner
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Create an error banner
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

// ============================================================================
// From impls
// ============================================================================

macro_rules! impl_from_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for View {
                fn from(value: $ty) -> Self {
                    View::$variant(value)
                }
            }
        )*
    };
}

impl_from_node! {
    VStack => VStack,
    HStack => HStack,
    Section => Section,
    Text => Text,
    Icon => Icon,
    Badge => Badge,
    Banner => Banner,
    Checkbox => Checkbox,
    Toggle => Toggle,
    TextField => TextField,
    SearchField => SearchField,
    IntField => IntField,
    FloatField => FloatField,
    SelectField => SelectField,
    MultiSelectField => MultiSelectField,
    DateField => DateField,
    TimeFrameField => TimeFrameField,
    DurationField => DurationField,
    ColorField => ColorField,
    ImageField => ImageField,
    Button => Button,
    Menu => Menu,
    Dialog => Dialog,
    Table => Table,
    ListItem => ListItem,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_builders() {
        let view: View = VStack::new()
            .child(View::text("a"))
            .child(HStack::new().child(View::text("b")).child(View::text("c")))
            .into();

        let mut texts = Vec::new();
        view.walk(&mut |node| {
            if let View::Text(t) = node {
                texts.push(t.content.clone());
            }
        });
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_count_where() {
        let view: View = VStack::new()
            .child(Text::new("x"))
            .child(Text::new("y").style(TextStyle::Error))
            .child(View::Divider)
            .into();

        assert_eq!(view.count_where(|n| matches!(n, View::Text(_))), 2);
        assert_eq!(view.count_where(|n| matches!(n, View::Divider)), 1);
    }

    #[test]
    fn test_section_title() {
        let section = Section::titled("Address").child(View::text("street"));
        assert_eq!(section.title.as_deref(), Some("Address"));
        assert_eq!(section.children.len(), 1);
    }

    #[test]
    fn test_banner_error() {
        let banner = Banner::error("source unavailable");
        assert_eq!(banner.severity, Severity::Error);
    }
}
