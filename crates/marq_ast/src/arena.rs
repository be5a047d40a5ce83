//! Arena allocator for the document tree.
//!
//! Uses `bumpalo` for bump allocation. All nodes and text runs for a single
//! document live in the same arena and are freed together once the document
//! is no longer needed.

use bumpalo::Bump;

/// Arena allocator owning every node and text buffer of one document tree.
///
/// This struct wraps `bumpalo::Bump`. Allocation is a pointer bump in the
/// current chunk; when a chunk is exhausted a new one is claimed and
/// allocation continues. There is no individual free: the entire tree is
/// reclaimed at once when the arena is dropped or [`reset`](Self::reset).
///
/// The arena is single-writer: the tree is built by one builder, then read
/// only. Running out of address space aborts the process; it is a broken
/// invariant, not a recoverable condition.
///
/// # Example
///
/// ```rust
/// use marq_ast::DocArena;
///
/// let arena = DocArena::new();
///
/// let n = arena.alloc(7u32);
/// assert_eq!(*n, 7);
///
/// let s = arena.alloc_str("word ");
/// assert_eq!(s, "word ");
/// ```
pub struct DocArena {
    bump: Bump,
}

impl DocArena {
    /// Creates a new arena.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the given initial capacity in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copies a string slice into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Resets the arena, reclaiming the whole tree at once.
    ///
    /// Note: allocated values are not dropped. Tree nodes hold no
    /// drop-relevant state, so this is a plain bulk free.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for DocArena {
    fn default() -> Self {
        Self::new()
    }
}
