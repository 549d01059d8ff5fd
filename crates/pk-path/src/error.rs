//! Path-subsystem error type.

use thiserror::Error;

use pk_core::PathId;

/// Errors produced by `pk-path`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path pool exhausted ({capacity} units in use)")]
    PoolExhausted { capacity: usize },

    #[error("path {0} is not allocated")]
    UnknownPath(PathId),

    #[error("path {0} has already been resolved")]
    AlreadyResolved(PathId),
}

pub type PathResult<T> = Result<T, PathError>;
