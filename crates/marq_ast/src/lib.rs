//! # marq_ast
//!
//! Document tree definitions for marq.
//!
//! This crate provides the in-memory document tree produced by the tree
//! builder and consumed by the layout engine.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation: every node and every text run is
//!   owned by a single [`DocArena`] per document
//! - Child sequences are intrusive singly-linked lists threaded through the
//!   arena, giving O(1) append during streaming construction
//! - Nothing implements `Drop`; the whole tree is reclaimed in one bulk
//!   operation when the arena is dropped or reset
//!
//! ## Example
//!
//! ```rust
//! use marq_ast::{DocArena, MdNode, NodeKind};
//!
//! let arena = DocArena::new();
//!
//! let doc = arena.alloc(MdNode::new(NodeKind::Document));
//! let para = arena.alloc(MdNode::new(NodeKind::Paragraph));
//! let text = arena.alloc(MdNode::new(NodeKind::Text(arena.alloc_str("hi"))));
//!
//! doc.append_child(para);
//! para.append_child(text);
//! assert_eq!(doc.child_count(), 1);
//! ```

mod arena;
mod node;

pub use arena::DocArena;
pub use node::{Children, MdNode, NodeKind};
