//! Build diagnostics.
//!
//! The tree builder never aborts: every malformed or unsupported event is
//! absorbed locally and surfaced through this side channel instead.

use thiserror::Error;

/// A non-fatal problem encountered while building the tree.
///
/// Diagnostics accumulate in event order in the
/// [`BuildResult`](crate::BuildResult); the tree that was built around them
/// is always returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildDiagnostic {
    /// A block kind outside the modeled set; its subtree was skipped.
    #[error("unsupported block kind: {0}")]
    UnsupportedBlock(&'static str),

    /// A span kind outside the modeled set; its subtree was skipped.
    #[error("unsupported span kind: {0}")]
    UnsupportedSpan(&'static str),

    /// A text run of an unmodeled classification; the run was dropped.
    #[error("unsupported text class: {0}")]
    UnsupportedText(&'static str),

    /// A second document event; the root is unchanged.
    #[error("document entered twice")]
    DuplicateDocument,

    /// An event arrived with no open parent block.
    #[error("{0} event with no open parent")]
    MissingParent(&'static str),

    /// A leave event with nothing open.
    #[error("leave event with no open block or span")]
    UnbalancedLeave,

    /// A list received a child other than a list item (or a list item
    /// appeared outside a list); the construct was skipped.
    #[error("list structure violated by {0} event")]
    ListChildViolation(&'static str),

    /// The parent stack is at its depth limit; nested content was skipped.
    #[error("parent stack depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),

    /// Blocks or spans still open when the stream ended.
    #[error("{0} block(s) left open at end of input")]
    UnclosedBlocks(usize),
}

/// The spec-level error taxonomy a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticClass {
    /// Malformed structure or an unmodeled block/span kind.
    StructuralViolation,
    /// A text event of an unmodeled classification.
    UnsupportedTextClass,
}

impl BuildDiagnostic {
    /// Classifies this diagnostic into the error taxonomy.
    pub const fn class(&self) -> DiagnosticClass {
        match self {
            BuildDiagnostic::UnsupportedText(_) => DiagnosticClass::UnsupportedTextClass,
            _ => DiagnosticClass::StructuralViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(
            BuildDiagnostic::UnsupportedText("soft break").class(),
            DiagnosticClass::UnsupportedTextClass
        );
        assert_eq!(
            BuildDiagnostic::UnsupportedBlock("table").class(),
            DiagnosticClass::StructuralViolation
        );
        assert_eq!(
            BuildDiagnostic::UnbalancedLeave.class(),
            DiagnosticClass::StructuralViolation
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BuildDiagnostic::UnsupportedBlock("block quote").to_string(),
            "unsupported block kind: block quote"
        );
        assert_eq!(
            BuildDiagnostic::DepthLimitExceeded(64).to_string(),
            "parent stack depth limit of 64 exceeded"
        );
    }
}
