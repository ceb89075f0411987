use thiserror::Error;

/// Failures from imperative view handles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandleError {
    /// The handle has not been bound to a rendered view yet (or was cleared
    /// on unmount).
    #[error("handle is not bound to a rendered view")]
    Unbound,
}
