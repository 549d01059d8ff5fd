use pk_citizen::ReturnPathError;
use pk_core::{CoreError, InstanceId};
use pk_path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("harness configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("instance {0} is not live")]
    StaleInstance(InstanceId),

    #[error("return path not started: {0}")]
    ReturnPath(#[from] ReturnPathError),

    #[error("path worker error: {0}")]
    Path(#[from] PathError),
}

pub type SimResult<T> = Result<T, SimError>;
