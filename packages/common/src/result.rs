use crate::error::VisitError;

/// Result of a traversal whose visitor fails with `E`
pub type VisitResult<T, E> = Result<T, VisitError<E>>;
