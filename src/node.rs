//! The document node tree.
//!
//! This module provides the line-level building blocks of an INI document:
//!
//! - [`Entry`]: a `key = value` line with an optional trailing comment
//! - [`Div`]: a standalone full-line comment, or a blank separator line
//! - [`Node`]: the tagged union over the two line kinds
//! - [`Body`]: an ordered, owning sequence of nodes
//! - [`Section`]: a `[name]` block holding its own body
//!
//! ## Ownership
//!
//! The tree is strictly owned: every node has exactly one parent body, there
//! are no shared or back references, and dropping a document drops its whole
//! subtree. Sections cannot nest; a section body only ever holds [`Entry`]
//! and [`Div`] nodes.
//!
//! ## Ordering and duplicates
//!
//! Node order is insertion order and is preserved verbatim by the
//! serializer. Duplicate keys (and duplicate section names) are legal;
//! lookup always resolves to the *first* match in iteration order.
//!
//! ## Examples
//!
//! ```rust
//! use ini_edit::{Body, Div, Entry, Node};
//!
//! let mut body = Body::new();
//! body.push(Div::comment("network settings"));
//! body.push(Entry::new("host", "localhost"));
//! body.push(Entry::new("port", "8080").with_span("default"));
//!
//! assert_eq!(body.len(), 3);
//! assert_eq!(body.entry("port").map(Entry::value), Some("8080"));
//! assert_eq!(body.entry("port").and_then(Entry::span), Some("default"));
//! ```

/// A `key = value` line, with an optional trailing same-line comment.
///
/// The trailing comment (the *span*) is everything after the first unescaped
/// comment marker on the line, and there is at most one per entry. Mutating
/// the value leaves the span untouched, so an edited entry keeps its comment.
///
/// # Examples
///
/// ```rust
/// use ini_edit::Entry;
///
/// let mut entry = Entry::new("timeout", "30").with_span("seconds");
/// assert_eq!(entry.key(), "timeout");
/// assert_eq!(entry.value(), "30");
/// assert_eq!(entry.span(), Some("seconds"));
///
/// entry.set_value("60");
/// assert_eq!(entry.span(), Some("seconds"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
    span: Option<String>,
}

impl Entry {
    /// Creates an entry with no trailing comment.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            span: None,
        }
    }

    /// Attaches a trailing same-line comment, replacing any existing one.
    #[must_use]
    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Returns the key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value text, exactly as stored (trimmed during parsing).
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value, preserving the trailing comment if any.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the trailing same-line comment, if any.
    #[inline]
    #[must_use]
    pub fn span(&self) -> Option<&str> {
        self.span.as_deref()
    }

    /// Sets or clears the trailing same-line comment.
    pub fn set_span(&mut self, span: Option<String>) {
        self.span = span;
    }
}

/// A standalone separator line: a full-line comment, or a blank line.
///
/// A `Div` with empty text is a blank line; non-empty text is the comment
/// body with the marker stripped.
///
/// # Examples
///
/// ```rust
/// use ini_edit::Div;
///
/// assert!(Div::blank().is_blank());
/// assert_eq!(Div::comment("note").text(), "note");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Div {
    text: String,
}

impl Div {
    /// Creates a blank separator line.
    #[must_use]
    pub fn blank() -> Self {
        Div {
            text: String::new(),
        }
    }

    /// Creates a full-line comment with the given text (marker excluded).
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Div { text: text.into() }
    }

    /// Returns `true` if this div renders as a blank line.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the comment text (empty for a blank line).
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single line-level element of a document root or section body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A `key = value` line.
    Entry(Entry),
    /// A standalone comment or blank line.
    Div(Div),
}

impl Node {
    /// Returns `true` if this node is an [`Entry`].
    #[inline]
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Node::Entry(_))
    }

    /// Returns `true` if this node is a [`Div`].
    #[inline]
    #[must_use]
    pub const fn is_div(&self) -> bool {
        matches!(self, Node::Div(_))
    }

    /// If this node is an entry, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Node::Entry(entry) => Some(entry),
            Node::Div(_) => None,
        }
    }

    /// If this node is an entry, returns a mutable reference to it.
    #[inline]
    pub fn as_entry_mut(&mut self) -> Option<&mut Entry> {
        match self {
            Node::Entry(entry) => Some(entry),
            Node::Div(_) => None,
        }
    }

    /// If this node is a div, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_div(&self) -> Option<&Div> {
        match self {
            Node::Div(div) => Some(div),
            Node::Entry(_) => None,
        }
    }
}

impl From<Entry> for Node {
    fn from(entry: Entry) -> Self {
        Node::Entry(entry)
    }
}

impl From<Div> for Node {
    fn from(div: Div) -> Self {
        Node::Div(div)
    }
}

/// An ordered, owning sequence of [`Node`]s.
///
/// Used both for the document root (everything before the first section
/// header) and for each section's contents. Lookup is first-match and
/// non-recursive; callers orchestrate section→key traversal themselves.
///
/// # Examples
///
/// ```rust
/// use ini_edit::{Body, Entry};
///
/// let mut body = Body::new();
/// body.push(Entry::new("a", "1"));
/// body.push(Entry::new("a", "2"));
///
/// // First match wins for duplicate keys.
/// assert_eq!(body.entry("a").map(Entry::value), Some("1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    nodes: Vec<Node>,
}

impl Body {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node, taking ownership.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Detaches and returns the node at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.nodes.len() {
            Some(self.nodes.remove(index))
        } else {
            None
        }
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the body holds no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the nodes in stored order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the nodes in stored order, mutably.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Returns the first entry with the given key, if any.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries().find(|entry| entry.key() == key)
    }

    /// Returns the first entry with the given key, mutably.
    pub fn entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.nodes
            .iter_mut()
            .filter_map(Node::as_entry_mut)
            .find(|entry| entry.key() == key)
    }

    /// Iterates over the entries in stored order, skipping divs.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.nodes.iter().filter_map(Node::as_entry)
    }
}

impl IntoIterator for Body {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl FromIterator<Node> for Body {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Body {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// A `[name]` block and the nodes that appear textually inside it.
///
/// # Examples
///
/// ```rust
/// use ini_edit::{Entry, Section};
///
/// let mut section = Section::new("server");
/// section.body_mut().push(Entry::new("host", "localhost"));
///
/// assert_eq!(section.name(), "server");
/// assert_eq!(section.body().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    name: String,
    body: Body,
}

impl Section {
    /// Creates an empty section with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            body: Body::new(),
        }
    }

    /// Returns the section name (the bracketed header text).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the section.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the section contents.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the section contents, mutably.
    #[inline]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
