use thiserror::Error;

/// Errors returned by the point-access operations of a [`LinkedList`](crate::LinkedList).
///
/// Structural operations that take an index (such as [`insert`](crate::LinkedList::insert))
/// never fail: an overflowing index is clamped to the end of the list instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// The requested index is not strictly less than the length of the list.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBound { index: usize, len: usize },
}

pub type Result<T, E = ListError> = core::result::Result<T, E>;
