//! # marq_parser
//!
//! Streaming construction of the marq document tree.
//!
//! This crate turns a stream of structural parse events into an
//! arena-allocated [`marq_ast`] tree:
//!
//! - [`TreeBuilder`] consumes enter/leave/text events with a bounded parent
//!   stack, appending each node to the then-open ancestor
//! - [`parse_markdown`] adapts `pulldown-cmark`'s event iterator onto the
//!   builder
//!
//! Malformed or unsupported input never aborts a build: the offending
//! construct is skipped, a [`BuildDiagnostic`] is recorded, and everything
//! understood still lands in the tree.
//!
//! ## Example
//!
//! ```rust
//! use marq_ast::{DocArena, NodeKind};
//! use marq_parser::parse_markdown;
//!
//! let arena = DocArena::new();
//! let result = parse_markdown(&arena, "# Title\n\nSome text");
//!
//! let doc = result.document.unwrap();
//! assert_eq!(doc.kind(), NodeKind::Document);
//! assert_eq!(doc.child_count(), 2);
//! ```

mod builder;
mod diagnostics;
mod event;
mod markdown;
mod stack;

pub use builder::{BuildResult, TreeBuilder};
pub use diagnostics::{BuildDiagnostic, DiagnosticClass};
pub use event::{BlockKind, SpanKind, TextClass};
pub use markdown::parse_markdown;
pub use stack::{DEFAULT_MAX_DEPTH, DepthLimitExceeded, ParentStack};
