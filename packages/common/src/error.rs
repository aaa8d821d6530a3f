use thiserror::Error;

/// Error returned by a traversal
#[derive(Error, Debug)]
pub enum VisitError<E> {
    #[error("Traversal cancelled")]
    Cancelled,

    #[error("Visitor failed: {0}")]
    Visitor(#[source] E),
}

impl<E> VisitError<E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, VisitError::Cancelled)
    }
}
