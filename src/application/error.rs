use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No entry at position {position} (ledger has {len} entries)")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("Invalid credentials for user '{0}'")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
