use std::fmt;

/// Errors that may be reported by list operations.
///
/// Every failure is surfaced once, synchronously, to the immediate caller;
/// none is fatal and the list stays usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A required argument was out of range, such as an insertion index
    /// beyond the current length or a zero capacity bound.
    #[error("invalid parameter")]
    InvalidParam,
    /// The list is bounded and already holds its maximum number of
    /// elements.
    #[error("list length limit exceeded")]
    ExceedLimit,
    /// The node chain ended before the recorded length was reached,
    /// signaling corruption rather than normal absence of data.
    #[error("list chain is shorter than its recorded length")]
    BadEntry,
    /// A search walked the whole list without a comparator match.
    #[error("no entry matched the search term")]
    NotFound,
}

/// Error returned when the list rejects an insertion.
///
/// A rejected value never enters the list and is never given to the
/// list's destructor; it is carried back to the caller here.
///
/// # Examples
///
/// ```
/// use guarded_list::{List, ListError};
/// use std::sync::Arc;
///
/// let list: List<u32> = List::new(Some(1), None, Arc::new(drop)).unwrap();
/// assert!(list.push(1).is_ok());
///
/// let err = list.push(2).unwrap_err();
/// assert_eq!(err.kind(), ListError::ExceedLimit);
/// assert_eq!(err.into_inner(), 2); // the caller still owns the value
/// ```
#[derive(Debug)]
pub struct InsertError<T> {
    pub(crate) value: T,
    pub(crate) kind: ListError,
}

impl<T> InsertError<T> {
    /// The reason the insertion was rejected.
    pub fn kind(&self) -> ListError {
        self.kind
    }

    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot insert value: {}", self.kind)
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {}

impl<T> From<InsertError<T>> for ListError {
    fn from(err: InsertError<T>) -> Self {
        err.kind
    }
}
