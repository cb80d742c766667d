use thiserror::Error;

/// Errors that may occur while building an index.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// No index can be built from an empty set of known values.
    #[error("the set of known values is empty")]
    EmptyKnownSet,
}
