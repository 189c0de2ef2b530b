//! # Renoviz Export
//!
//! Turns a wizard session into a print-ready two-page proposal: assembly in
//! [`document`], deterministic HTML rendering in [`html`]. The print dialog
//! side effect lives behind `reno_core::ports::PrintSink`; nothing here
//! holds state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod html;

pub use document::{InclusionItem, ProposalDocument};
pub use html::render_html;

/// Export crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
