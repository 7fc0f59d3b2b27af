//! XML element tree

/// What an element holds: text or child elements, never both
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// A leaf, with or without text
    Text(Option<String>),
    /// A non-leaf element
    Children(Vec<Element>),
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(None)
    }
}

/// A named XML element owning its children.
///
/// Attributes, namespaces and comments are not represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub content: Content,
}

impl Element {
    /// Create an empty leaf element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content::default(),
        }
    }

    /// Create a leaf element carrying text
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content::Text(Some(text.into())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of a leaf element; `None` for empty leaves and non-leaves
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => text.as_deref(),
            Content::Children(_) => None,
        }
    }

    /// Child elements in document order; empty for leaves
    pub fn children(&self) -> &[Self] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// True when the element has no child elements
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Append a child element. Text held by a leaf is discarded.
    pub fn append_child(&mut self, child: Self) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(_) => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace the element's content with text. Children are discarded.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(Some(text.into()));
    }
}
