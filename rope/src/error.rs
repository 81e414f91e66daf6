//! Error types for bounds-checked rope operations.

/// Errors surfaced by indexing and slicing.
///
/// Every bounds check runs before the tree is descended, so a failed
/// call leaves no partially-walked state behind. Construction,
/// concatenation, and flattening do not fail.
#[derive(Debug, thiserror::Error)]
pub enum RopeError {
    #[error("index {index} out of bounds for rope of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range {start}..{end} out of bounds for rope of length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("range start {start} is greater than range end {end}")]
    InvertedRange { start: usize, end: usize },
}
