//! Tree nodes backing [`Rope`](crate::Rope).
//!
//! The tree grammar is closed: `Join` is the only variant with node
//! children, and a `View` holds the fragment *buffer* it selects from
//! rather than a child node, so a view over a join (or over another
//! view) is unrepresentable.

use std::{
    mem,
    sync::{Arc, OnceLock},
};

/// A node in the rope tree, shared between handles and parents via `Arc`.
///
/// Nodes are never mutated after construction; a node's reported length
/// is fixed for its lifetime. Every node in a live tree has length >= 1 —
/// the empty rope is an absent root, and empty operands never produce
/// nodes.
#[derive(Debug)]
pub(crate) enum Node {
    /// A leaf owning one contiguous immutable buffer.
    Fragment { text: Arc<[u8]> },

    /// A slice of a single fragment buffer, sharing its allocation.
    View {
        target: Arc<[u8]>,
        offset: usize,
        len: usize,
    },

    /// Two subtrees in sequence, with the combined length cached at
    /// construction and never recomputed.
    Join {
        left: Arc<Node>,
        right: Arc<Node>,
        len: usize,
    },
}

impl Node {
    /// Create a leaf over `text`. Callers guarantee `text` is non-empty.
    pub(crate) fn fragment(text: Arc<[u8]>) -> Arc<Node> {
        debug_assert!(!text.is_empty());
        Arc::new(Node::Fragment { text })
    }

    /// Create a view selecting `len` bytes of `target` starting at
    /// `offset`. Callers guarantee the range is in bounds and non-empty.
    pub(crate) fn view(target: Arc<[u8]>, offset: usize, len: usize) -> Arc<Node> {
        debug_assert!(len > 0);
        debug_assert!(offset + len <= target.len());
        Arc::new(Node::View {
            target,
            offset,
            len,
        })
    }

    /// Join two subtrees, caching their combined length.
    pub(crate) fn join(left: Arc<Node>, right: Arc<Node>) -> Arc<Node> {
        let len = left.len() + right.len();
        Arc::new(Node::Join { left, right, len })
    }

    /// The number of bytes in this subtree. O(1) for every variant.
    pub(crate) fn len(&self) -> usize {
        match self {
            Node::Fragment { text } => text.len(),
            Node::View { len, .. } => *len,
            Node::Join { len, .. } => *len,
        }
    }
}

/// Placeholder put in place of children detached during teardown.
fn detached() -> Arc<Node> {
    static DETACHED: OnceLock<Arc<Node>> = OnceLock::new();
    Arc::clone(DETACHED.get_or_init(|| {
        Arc::new(Node::Fragment {
            text: Arc::from(Vec::new()),
        })
    }))
}

impl Drop for Node {
    fn drop(&mut self) {
        // Join chains grow one level per concatenation and are never
        // rebalanced, so structural recursion here could overflow the
        // call stack. Detach children onto an explicit stack and release
        // them iteratively instead.
        let Node::Join { left, right, .. } = self else {
            return;
        };

        let mut stack = vec![
            mem::replace(left, detached()),
            mem::replace(right, detached()),
        ];
        while let Some(node) = stack.pop() {
            if let Ok(mut node) = Arc::try_unwrap(node) {
                if let Node::Join { left, right, .. } = &mut node {
                    stack.push(mem::replace(left, detached()));
                    stack.push(mem::replace(right, detached()));
                }
            }
        }
    }
}
