//! The structural event vocabulary consumed by the tree builder.
//!
//! Mirrors the upstream parser's callback interface: blocks nest, spans nest
//! inside blocks, text runs are leaves. Constructs the renderer does not
//! model arrive as `Unsupported` carriers so the builder can report and skip
//! them without knowing the upstream tag set.

/// A block-level structural event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The document itself. Must be the first event of a stream.
    Document,
    /// A heading, level 1-6.
    Heading {
        /// Heading level (1 = largest).
        level: u8,
    },
    /// A paragraph.
    Paragraph,
    /// A list; `Some(start)` is ordered counting up from `start`.
    List {
        /// Start index of an ordered list.
        start: Option<u64>,
    },
    /// One list entry.
    ListItem,
    /// A block construct the renderer does not model.
    Unsupported(&'static str),
}

impl BlockKind {
    /// Returns a short display name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            BlockKind::Document => "document",
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List { .. } => "list",
            BlockKind::ListItem => "list item",
            BlockKind::Unsupported(name) => name,
        }
    }
}

/// An inline span event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Strong emphasis (bold).
    Strong,
    /// A span construct the renderer does not model.
    Unsupported(&'static str),
}

impl SpanKind {
    /// Returns a short display name for diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            SpanKind::Strong => "strong",
            SpanKind::Unsupported(name) => name,
        }
    }
}

/// Classification of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextClass {
    /// Plain text to be copied into the tree.
    Normal,
    /// A text classification the renderer does not model; the run is
    /// dropped.
    Unsupported(&'static str),
}
