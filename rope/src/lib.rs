//! A persistent rope over immutable, shared byte fragments.
//!
//! A [`Rope`] stores its content as a binary tree: leaves own contiguous
//! buffers, interior joins concatenate two subtrees and cache the
//! combined length. Concatenating two ropes is O(1) and copies nothing —
//! the new rope shares both operands' trees. Cloning a rope shares its
//! root. Substrings share the underlying fragment buffers instead of
//! copying bytes out.
//!
//! The tree is never rebalanced; repeated concatenation builds deep
//! chains, and every walk (flattening, indexing, slicing, iteration,
//! teardown) uses an explicit stack so those chains stay safe.
//!
//! Content is raw bytes. Indexing and slicing address byte positions and
//! make no attempt at code-point or grapheme semantics; [`Display`]
//! renders the content as UTF-8, lossily.
//!
//! ## Example
//! ```
//! use braid_rope::{concat, Rope};
//!
//! let lhs = Rope::from("Rope Lhs,");
//! let rhs = Rope::from("Rope Rhs");
//! let joined = concat(&lhs, &rhs);
//!
//! assert_eq!(joined.len(), 17);
//! assert_eq!(joined.to_string(), "Rope Lhs,Rope Rhs");
//! assert_eq!(joined.substring(0, 4).unwrap(), "Rope");
//! ```
//!
//! [`Display`]: std::fmt::Display

pub mod error;
pub mod iter;
mod node;

pub use error::RopeError;
pub use iter::{Bytes, Chunks};

use node::Node;
use std::{fmt, ops::Add, sync::Arc};

/// A persistent byte string stored as a tree of shared fragments.
///
/// Ropes are immutable values: every operation either reads the tree or
/// replaces the handle's root with a new tree that shares the old nodes.
/// Sharing subtrees between ropes is expected and safe — no node is
/// mutated after construction.
#[derive(Clone, Default)]
pub struct Rope {
    /// Absent for the empty rope. When present, the subtree is non-empty;
    /// zero-length nodes are never built.
    pub(crate) root: Option<Arc<Node>>,
}

impl Rope {
    /// The empty rope.
    pub fn new() -> Self {
        Rope { root: None }
    }

    /// Total length in bytes. O(1): fragments know their buffer size and
    /// joins cache their combined length at construction.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::len)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Append `other` to `self` in O(1) without copying content.
    ///
    /// Both trees are shared: `other` is left untouched and remains
    /// independently usable. Appending an empty rope is a no-op, and
    /// appending to an empty rope just adopts `other`'s tree — no join
    /// node is built around an empty side.
    pub fn concat(&mut self, other: &Rope) {
        let Some(rhs) = other.root.clone() else {
            return;
        };
        self.root = match self.root.take() {
            Some(lhs) => Some(Node::join(lhs, rhs)),
            None => Some(rhs),
        };
    }

    /// Flatten the rope into one contiguous buffer.
    ///
    /// Linear in the content length: an in-order walk appends each
    /// fragment (or view-selected slice) to a buffer pre-sized to
    /// [`len`](Rope::len).
    pub fn linearized(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for chunk in self.chunks() {
            out.extend_from_slice(chunk);
        }
        out
    }

    /// The byte at `index`, or `IndexOutOfBounds` past the end.
    ///
    /// O(depth): descends from the root, going left or right at each
    /// join by comparing against the left subtree's cached length.
    pub fn at(&self, index: usize) -> Result<u8, RopeError> {
        let len = self.len();
        if index >= len {
            return Err(RopeError::IndexOutOfBounds { index, len });
        }
        let mut node = match &self.root {
            Some(root) => root.as_ref(),
            None => return Err(RopeError::IndexOutOfBounds { index, len }),
        };
        let mut index = index;
        loop {
            match node {
                Node::Join { left, right, .. } => {
                    if index < left.len() {
                        node = left.as_ref();
                    } else {
                        index -= left.len();
                        node = right.as_ref();
                    }
                },
                Node::Fragment { text } => return Ok(text[index]),
                Node::View { target, offset, .. } => return Ok(target[offset + index]),
            }
        }
    }

    /// The sub-rope covering `start..end`, sharing the underlying
    /// fragment buffers instead of copying bytes.
    ///
    /// A range inside a single fragment becomes one view on that
    /// fragment's buffer (or the fragment node itself when covered
    /// exactly). A range crossing join boundaries becomes the
    /// contributing per-fragment pieces combined pairwise into joins.
    /// `start == end` yields the empty rope.
    pub fn substring(&self, start: usize, end: usize) -> Result<Rope, RopeError> {
        let len = self.len();
        if start > end {
            return Err(RopeError::InvertedRange { start, end });
        }
        if end > len {
            return Err(RopeError::RangeOutOfBounds { start, end, len });
        }
        if start == end {
            return Ok(Rope::new());
        }
        let Some(root) = &self.root else {
            return Ok(Rope::new());
        };

        let mut pieces = Vec::new();
        collect_pieces(root, start, end, &mut pieces);
        Ok(Rope {
            root: Some(assemble(pieces)),
        })
    }

    /// Lazy double-ended iterator over the rope's bytes. `rev()` walks
    /// backward. Each call returns a fresh iterator starting from the
    /// ends.
    pub fn bytes(&self) -> Bytes<'_> {
        Bytes::new(self)
    }

    /// Iterator over the contributing leaf slices, in order.
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::new(self)
    }
}

/// The concatenation of `lhs` and `rhs` as a new rope; neither input is
/// modified. O(1), shares both trees.
pub fn concat(lhs: &Rope, rhs: &Rope) -> Rope {
    let mut out = lhs.clone();
    out.concat(rhs);
    out
}

/// Collect the pieces of `root` overlapping `start..end`, in rope order.
///
/// Fully-covered leaves are shared as-is; partially-covered ones become
/// views on the same buffer. Walks with an explicit stack of
/// (node, range-within-node); only non-empty ranges are pushed.
fn collect_pieces(root: &Arc<Node>, start: usize, end: usize, pieces: &mut Vec<Arc<Node>>) {
    let mut stack = vec![(root, start, end)];
    while let Some((node, start, end)) = stack.pop() {
        debug_assert!(start < end);
        match node.as_ref() {
            Node::Join { left, right, .. } => {
                let split = left.len();
                // Right first so the left sub-range pops first.
                if end > split {
                    stack.push((right, start.max(split) - split, end - split));
                }
                if start < split {
                    stack.push((left, start, end.min(split)));
                }
            },
            Node::Fragment { text } => {
                pieces.push(if start == 0 && end == text.len() {
                    Arc::clone(node)
                } else {
                    Node::view(Arc::clone(text), start, end - start)
                });
            },
            Node::View {
                target,
                offset,
                len,
            } => {
                // A slice of a view is still a view on the same fragment
                // buffer; the offsets compose.
                pieces.push(if start == 0 && end == *len {
                    Arc::clone(node)
                } else {
                    Node::view(Arc::clone(target), offset + start, end - start)
                });
            },
        }
    }
}

/// Reduce pieces pairwise into a single tree.
fn assemble(mut pieces: Vec<Arc<Node>>) -> Arc<Node> {
    debug_assert!(!pieces.is_empty());
    while pieces.len() > 1 {
        pieces = pieces
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => Node::join(Arc::clone(left), Arc::clone(right)),
                [single] => Arc::clone(single),
                _ => unreachable!("chunks(2) yields one- or two-element slices"),
            })
            .collect();
    }
    match pieces.pop() {
        Some(root) => root,
        None => unreachable!("assemble requires at least one piece"),
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Rope::from(text.as_bytes())
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Rope::from(text.into_bytes())
    }
}

impl From<&[u8]> for Rope {
    fn from(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Rope::new();
        }
        Rope {
            root: Some(Node::fragment(Arc::from(bytes))),
        }
    }
}

impl From<Vec<u8>> for Rope {
    fn from(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return Rope::new();
        }
        Rope {
            root: Some(Node::fragment(Arc::from(bytes))),
        }
    }
}

impl Add<&Rope> for &Rope {
    type Output = Rope;

    fn add(self, rhs: &Rope) -> Rope {
        concat(self, rhs)
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.bytes().eq(other.bytes())
    }
}

impl Eq for Rope {}

impl PartialEq<[u8]> for Rope {
    fn eq(&self, other: &[u8]) -> bool {
        self.len() == other.len() && self.bytes().eq(other.iter().copied())
    }
}

impl PartialEq<&str> for Rope {
    fn eq(&self, other: &&str) -> bool {
        *self == *other.as_bytes()
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.linearized()))
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rope({:?})", String::from_utf8_lossy(&self.linearized()))
    }
}
