//! # Renoviz Generation Client
//!
//! Client for the vendor multimodal API behind the visualization wizard:
//! before-photo analysis, scope drafting, after-image generation, and
//! in-place refinement. The [`Generator`] trait is the seam the application
//! driver and tests program against; [`GenClient`] is the HTTP
//! implementation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod prompt;

mod wire;

pub use client::{
    model_for, GenClient, GenConfig, Generator, RetryConfig, API_KEY_ENV, DEFAULT_BASE_URL,
    FLASH_IMAGE_MODEL, PRO_IMAGE_MODEL, TEXT_MODEL,
};
pub use error::{GenError, GenResult};

/// Generation crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
