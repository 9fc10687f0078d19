use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] roster_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("User ID cannot be empty")]
    EmptyUserId,
    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Nothing to update: pass at least one of --full-name, --email, --phone")]
    NothingToUpdate,
    #[error("{0}")]
    OperationFailed(String),
}
