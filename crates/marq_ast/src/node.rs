//! Document tree node definition.

use std::cell::Cell;
use std::fmt;

use serde::Serialize;
use serde::ser::SerializeStruct;

/// The tagged variant of a tree node.
///
/// Only the markdown constructs the renderer models appear here; anything
/// else is rejected during tree building and never reaches the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// Root of the tree. Exactly one per document, created first.
    Document,
    /// A heading, level 1-6.
    Header {
        /// Heading level (1 = largest).
        level: u8,
    },
    /// A run of text. The content is an arena-allocated copy of the source
    /// run and immutable for the life of the tree.
    Text(&'a str),
    /// A paragraph of inline content.
    Paragraph,
    /// A list. `Some(start)` is an ordered list whose markers count up from
    /// `start`; `None` is an unordered list.
    List {
        /// Start index of an ordered list.
        start: Option<u64>,
    },
    /// One list entry. Always a direct child of a [`NodeKind::List`].
    ListItem,
    /// A bold (strong emphasis) span.
    Bold,
}

impl NodeKind<'_> {
    /// Returns the display name of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Header { .. } => "Header",
            NodeKind::Text(_) => "Text",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Bold => "Bold",
        }
    }
}

/// A node in the document tree.
///
/// Nodes are allocated in a [`DocArena`](crate::DocArena) and linked through
/// shared references. Each node owns an ordered child sequence with O(1)
/// append and keeps no reference back to its parent.
///
/// # Lifetime
///
/// The `'a` lifetime ties every node to its arena; child and sibling links
/// remain valid exactly as long as the arena lives.
pub struct MdNode<'a> {
    kind: NodeKind<'a>,
    children: NodeList<'a>,
    /// Next sibling. Maintained by the parent's child list.
    next: Cell<Option<&'a MdNode<'a>>>,
}

impl<'a> MdNode<'a> {
    /// Creates a detached node of the given kind.
    pub fn new(kind: NodeKind<'a>) -> Self {
        Self {
            kind,
            children: NodeList::new(),
            next: Cell::new(None),
        }
    }

    /// Returns this node's kind.
    #[inline]
    pub fn kind(&self) -> NodeKind<'a> {
        self.kind
    }

    /// Appends `child` as the last child of this node.
    ///
    /// Order is stable: children iterate in append order.
    pub fn append_child(&self, child: &'a MdNode<'a>) {
        self.children.push(child);
    }

    /// Iterates over the children in order.
    #[inline]
    pub fn children(&self) -> Children<'a> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the first child, if any.
    #[inline]
    pub fn first_child(&self) -> Option<&'a MdNode<'a>> {
        self.children.head.get()
    }

    /// Returns true if this node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.len() > 0
    }

    /// Returns the text content for [`NodeKind::Text`] nodes.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        match self.kind {
            NodeKind::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for MdNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdNode")
            .field("kind", &self.kind)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Ordered child sequence: an intrusive singly-linked list threaded through
/// the arena. Interior mutability keeps append possible through the shared
/// references the parent stack hands out during construction.
struct NodeList<'a> {
    head: Cell<Option<&'a MdNode<'a>>>,
    tail: Cell<Option<&'a MdNode<'a>>>,
    len: Cell<usize>,
}

impl<'a> NodeList<'a> {
    fn new() -> Self {
        Self {
            head: Cell::new(None),
            tail: Cell::new(None),
            len: Cell::new(0),
        }
    }

    fn push(&self, node: &'a MdNode<'a>) {
        match self.tail.get() {
            Some(tail) => tail.next.set(Some(node)),
            None => self.head.set(Some(node)),
        }
        self.tail.set(Some(node));
        self.len.set(self.len.get() + 1);
    }

    fn len(&self) -> usize {
        self.len.get()
    }

    fn iter(&self) -> Children<'a> {
        Children {
            next: self.head.get(),
        }
    }
}

/// Iterator over a node's children, in append order.
#[derive(Clone)]
pub struct Children<'a> {
    next: Option<&'a MdNode<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a MdNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.get();
        Some(node)
    }
}

impl Serialize for MdNode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut len = 1; // type
        match self.kind {
            NodeKind::Header { .. } | NodeKind::Text(_) => len += 1,
            NodeKind::List { start } => len += 1 + usize::from(start.is_some()),
            _ => {}
        }
        let is_container = !matches!(self.kind, NodeKind::Text(_));
        if is_container {
            len += 1;
        }

        let mut state = serializer.serialize_struct("MdNode", len)?;
        state.serialize_field("type", self.kind.name())?;

        match self.kind {
            NodeKind::Header { level } => {
                state.serialize_field("level", &level)?;
            }
            NodeKind::Text(value) => {
                state.serialize_field("value", value)?;
            }
            NodeKind::List { start } => {
                state.serialize_field("ordered", &start.is_some())?;
                if let Some(start) = start {
                    state.serialize_field("start", &start)?;
                }
            }
            _ => {}
        }

        if is_container {
            state.serialize_field("children", &self.children)?;
        }

        state.end()
    }
}

impl Serialize for NodeList<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
