//! Application-level error type.

use thiserror::Error;

use reno_core::{CoreError, PortError, StoreError};
use reno_gen::GenError;

/// Result type for application flows.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by application flows.
#[derive(Debug, Error)]
pub enum AppError {
    /// Domain validation or state-machine error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Generation service error.
    #[error(transparent)]
    Generation(#[from] GenError),

    /// Project store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Platform port error.
    #[error(transparent)]
    Port(#[from] PortError),

    /// Every requested generation track failed; prior images are untouched.
    #[error("Image generation failed: {0}")]
    GenerationFailed(String),
}
