use pk_core::WorldPos;
use pk_path::PathError;
use thiserror::Error;

use crate::ExtSoftPathState;

/// Which end of the return path could not be placed on a lane.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Endpoint {
    /// The parked vehicle's position.
    Park,
    /// The agent's final destination.
    Target,
}

/// Why a return-path request was not started.
///
/// In both cases the agent is left holding no return path.
#[derive(Debug, Error, PartialEq)]
pub enum ReturnPathError {
    #[error("no pedestrian lane near {endpoint:?} position {pos}")]
    Unresolved { endpoint: Endpoint, pos: WorldPos },

    #[error("path service rejected the return path: {0}")]
    Submission(#[from] PathError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CitizenError {
    #[error("{0} is not a valid path mode")]
    InvalidPathMode(u8),

    #[error("soft path state {0:?} has no strict counterpart")]
    NotNarrowable(ExtSoftPathState),
}

pub type ReturnPathResult<T> = Result<T, ReturnPathError>;
