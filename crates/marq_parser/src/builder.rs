//! Streaming tree builder.
//!
//! Consumes enter/leave/text events in nested order and grows the document
//! tree in the arena. The parent stack mirrors the open-ancestor chain:
//! every new node attaches to the stack top and container nodes push
//! themselves so nested events land in the right place.
//!
//! Nothing here aborts. Malformed events and unmodeled constructs are
//! reported through the diagnostic side channel and the offending construct
//! is skipped as a whole; the build always returns whatever tree exists.

use marq_ast::{DocArena, MdNode, NodeKind};
use tracing::warn;

use crate::diagnostics::BuildDiagnostic;
use crate::event::{BlockKind, SpanKind, TextClass};
use crate::stack::ParentStack;

/// Outcome of a build: the tree that exists so far plus every diagnostic
/// recorded along the way, in event order.
#[derive(Debug)]
pub struct BuildResult<'a> {
    /// The document root, if a document event ever arrived.
    pub document: Option<&'a MdNode<'a>>,
    /// Diagnostics recorded during the build.
    pub diagnostics: Vec<BuildDiagnostic>,
}

impl BuildResult<'_> {
    /// Returns true if the build saw no rejected events.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Event-driven builder for one document tree.
///
/// Entry points mirror a nested event stream: every leave matches the
/// nearest unmatched enter of the same class. The builder owns no tree
/// memory; nodes live in the arena it borrows.
pub struct TreeBuilder<'a> {
    arena: &'a DocArena,
    stack: ParentStack<'a>,
    document: Option<&'a MdNode<'a>>,
    /// Depth of the construct currently being skipped; 0 when attached
    /// events are being accepted. Keeps enter/leave balanced across
    /// rejected subtrees.
    skip_depth: usize,
    diagnostics: Vec<BuildDiagnostic>,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder allocating into `arena`.
    pub fn new(arena: &'a DocArena) -> Self {
        Self {
            arena,
            stack: ParentStack::new(),
            document: None,
            skip_depth: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Creates a builder with an explicit parent-stack depth limit.
    pub fn with_max_depth(arena: &'a DocArena, max_depth: usize) -> Self {
        Self {
            stack: ParentStack::with_max_depth(max_depth),
            ..Self::new(arena)
        }
    }

    /// Opens a block.
    ///
    /// `BlockKind::Document` must be the first event; it allocates the root.
    /// Any other kind attaches to the stack top and pushes itself.
    pub fn enter_block(&mut self, kind: BlockKind) {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }

        match kind {
            BlockKind::Document => {
                if self.document.is_some() {
                    self.skip_subtree(BuildDiagnostic::DuplicateDocument);
                    return;
                }
                let root = self.arena.alloc(MdNode::new(NodeKind::Document));
                self.document = Some(root);
                self.push_open(root);
            }
            BlockKind::Unsupported(name) => {
                self.skip_subtree(BuildDiagnostic::UnsupportedBlock(name));
            }
            _ => {
                let Some(parent) = self.stack.top() else {
                    self.report(BuildDiagnostic::MissingParent(kind.name()));
                    return;
                };
                // List children are exclusively list items, and list items
                // only ever sit under lists.
                let under_list = matches!(parent.kind(), NodeKind::List { .. });
                let is_item = matches!(kind, BlockKind::ListItem);
                if under_list != is_item {
                    self.skip_subtree(BuildDiagnostic::ListChildViolation(kind.name()));
                    return;
                }
                let node_kind = match kind {
                    BlockKind::Heading { level } => NodeKind::Header { level },
                    BlockKind::Paragraph => NodeKind::Paragraph,
                    BlockKind::List { start } => NodeKind::List { start },
                    BlockKind::ListItem => NodeKind::ListItem,
                    BlockKind::Document | BlockKind::Unsupported(_) => unreachable!(),
                };
                self.attach_container(parent, node_kind);
            }
        }
    }

    /// Closes the innermost open block.
    pub fn leave_block(&mut self) {
        self.close_open();
    }

    /// Opens an inline span inside the current block.
    pub fn enter_span(&mut self, kind: SpanKind) {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }

        match kind {
            SpanKind::Strong => {
                let Some(parent) = self.stack.top() else {
                    self.report(BuildDiagnostic::MissingParent(kind.name()));
                    return;
                };
                if matches!(parent.kind(), NodeKind::List { .. }) {
                    self.skip_subtree(BuildDiagnostic::ListChildViolation(kind.name()));
                    return;
                }
                self.attach_container(parent, NodeKind::Bold);
            }
            SpanKind::Unsupported(name) => {
                self.skip_subtree(BuildDiagnostic::UnsupportedSpan(name));
            }
        }
    }

    /// Closes the innermost open span.
    pub fn leave_span(&mut self) {
        self.close_open();
    }

    /// Appends a text leaf to the current block or span.
    ///
    /// The run is copied into the arena; runs are not guaranteed to be
    /// whole words.
    pub fn text(&mut self, class: TextClass, run: &str) {
        if self.skip_depth > 0 {
            return;
        }

        match class {
            TextClass::Normal => {
                let Some(parent) = self.stack.top() else {
                    self.report(BuildDiagnostic::MissingParent("text"));
                    return;
                };
                if matches!(parent.kind(), NodeKind::List { .. }) {
                    self.report(BuildDiagnostic::ListChildViolation("text"));
                    return;
                }
                let content = self.arena.alloc_str(run);
                let node = self.arena.alloc(MdNode::new(NodeKind::Text(content)));
                parent.append_child(node);
            }
            TextClass::Unsupported(name) => {
                self.report(BuildDiagnostic::UnsupportedText(name));
            }
        }
    }

    /// Finishes the build, reporting anything still open.
    pub fn finish(mut self) -> BuildResult<'a> {
        let open = self.stack.depth() + self.skip_depth;
        if open > 0 {
            self.report(BuildDiagnostic::UnclosedBlocks(open));
        }
        BuildResult {
            document: self.document,
            diagnostics: self.diagnostics,
        }
    }

    /// Allocates a container node, appends it to `parent`, and opens it.
    fn attach_container(&mut self, parent: &'a MdNode<'a>, kind: NodeKind<'a>) {
        let node = self.arena.alloc(MdNode::new(kind));
        parent.append_child(node);
        self.push_open(node);
    }

    fn push_open(&mut self, node: &'a MdNode<'a>) {
        if self.stack.push(node).is_err() {
            // The node keeps its place in the tree; only its nested
            // content is dropped.
            self.report(BuildDiagnostic::DepthLimitExceeded(self.stack.max_depth()));
            self.skip_depth = 1;
        }
    }

    fn close_open(&mut self) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }
        if self.stack.pop().is_none() {
            self.report(BuildDiagnostic::UnbalancedLeave);
        }
    }

    fn skip_subtree(&mut self, diag: BuildDiagnostic) {
        self.report(diag);
        self.skip_depth = 1;
    }

    fn report(&mut self, diag: BuildDiagnostic) {
        warn!("tree build: {diag}");
        self.diagnostics.push(diag);
    }
}
