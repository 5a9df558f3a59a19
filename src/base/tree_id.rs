use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one parsed [`SyntaxTree`](crate::syntax::SyntaxTree).
///
/// Every parse and every edit produces a tree with a fresh id, so a
/// [`NodeHandle`](crate::syntax::NodeHandle) taken from one tree can never be
/// resolved against another. Ids are drawn from a 64-bit counter and are not
/// reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreeId(u64);

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

impl TreeId {
    /// Allocate a new, process-unique id.
    pub fn next() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
