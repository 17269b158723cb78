use thiserror::Error;

/// Errors returned by [`Collection`](crate::Collection) operations.
///
/// A failed operation never leaves a partially modified collection behind.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CollectionError {
    #[error("index {index} is out of range for a collection of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("the collection is empty")]
    EmptyCollection,
    #[error("element at index {0} has no total order")]
    UnorderableElement(usize),
    #[error("element at index {0} is missing")]
    NullElement(usize),
}

/// Checks that `index` addresses a live element of a collection with `size` elements.
#[inline]
pub(crate) fn check_index(index: usize, size: usize) -> Result<(), CollectionError> {
    if index < size {
        Ok(())
    } else {
        tracing::trace!(index, size, "index rejected");
        Err(CollectionError::IndexOutOfRange { index, size })
    }
}
