/// An error raised by the operations of a [`Dataset`](crate::Dataset) or a
/// [`DatasetNode`](crate::DatasetNode).
///
/// Bulk operations never report [DatasetError::NotFound] or [DatasetError::AmbiguousMatch]. Zero
/// or many matches are valid outcomes for them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DatasetError {
    /// The matcher cannot be used for the requested operation.
    #[error("Malformed quad matcher: {0}")]
    MalformedMatcher(String),
    /// A single-quad accessor did not select any quad.
    #[error("No quad matches the given matcher")]
    NotFound,
    /// A single-quad accessor selected more than one quad.
    #[error("The matcher selects {count} quads but at most one was expected")]
    AmbiguousMatch {
        /// The number of selected quads.
        count: usize,
    },
    /// The operation is meaningless in the current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
