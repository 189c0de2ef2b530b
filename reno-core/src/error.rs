//! Error types for core domain operations.

use thiserror::Error;

use crate::wizard::Track;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core domain operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A before photo is required before the wizard can continue.
    #[error("A before photo is required before continuing")]
    MissingBeforeImage,

    /// Neither description track has any text.
    #[error("Provide a description or run auto-analysis before continuing")]
    MissingDescription,

    /// A refinement was requested without an instruction.
    #[error("Enter a refinement instruction first")]
    MissingInstruction,

    /// The requested track has no generated image.
    #[error("The {0} track has no image")]
    TrackEmpty(Track),

    /// A wizard step transition that the state machine does not allow.
    #[error("Step transition not allowed: {0}")]
    InvalidTransition(String),

    /// A malformed image payload or data URI.
    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
