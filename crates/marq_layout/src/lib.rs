//! # marq_layout
//!
//! Layout and draw engine for marq.
//!
//! [`render`] walks a completed document tree once, depth first, and emits
//! positioned draw operations to a [`Surface`]:
//!
//! - blocks advance a shared cursor with vertical rhythm between them
//! - text is word-wrapped at the viewport width, never splitting a word
//! - style (font size, padding, weight) is value-copied down the recursion
//!   so sibling subtrees cannot observe each other's overrides
//!
//! The surface is abstract: a graphics backend implements [`Surface`] over
//! its font and shape primitives, while [`RecordingSurface`] provides a
//! deterministic implementation with fixed metrics for dumps and tests.
//!
//! ## Example
//!
//! ```rust
//! use marq_ast::{DocArena, MdNode, NodeKind};
//! use marq_layout::{RecordingSurface, Theme, render};
//!
//! let arena = DocArena::new();
//! let doc = arena.alloc(MdNode::new(NodeKind::Document));
//! let para = arena.alloc(MdNode::new(NodeKind::Paragraph));
//! let text = arena.alloc(MdNode::new(NodeKind::Text("hello world")));
//! doc.append_child(para);
//! para.append_child(text);
//!
//! let mut surface = RecordingSurface::new(640.0);
//! render(doc, &mut surface, &Theme::default());
//! assert_eq!(surface.ops().len(), 2); // one op per word
//! ```

mod engine;
mod recording;
mod style;
mod surface;
mod theme;

pub use engine::render;
pub use recording::{DrawOp, RecordingSurface};
pub use style::DrawStyle;
pub use surface::{Color, FontWeight, Point, Size, Surface};
pub use theme::Theme;
