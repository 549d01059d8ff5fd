//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

use crate::InstanceId;

/// The base error type for `pk-core` and a common building block for
/// sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("instance {0} is out of range")]
    InstanceOutOfRange(InstanceId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pk-core`.
pub type CoreResult<T> = Result<T, CoreError>;
