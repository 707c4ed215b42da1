use thiserror::Error;

/// The error type for the checked operations of [`OrderedList`].
///
/// Every operation validates its arguments before touching the list, so an
/// `Err` always means the list is left exactly as it was.
///
/// [`OrderedList`]: crate::OrderedList
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one element, but the list is empty.
    #[error("list is empty")]
    EmptyContainer,
    /// An index (or the end of an index range) falls outside the list.
    ///
    /// Read and write positions are valid in `0..len`, insertion positions
    /// in `0..=len`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A parameter is structurally nonsensical, e.g. an empty erase range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A specialized [`Result`](std::result::Result) for list operations.
pub type Result<T, E = ListError> = std::result::Result<T, E>;
