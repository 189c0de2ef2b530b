//! # Renoviz Application Layer
//!
//! Wires the domain crates together: the root-owned [`AppContext`], the
//! role-checked route dispatch, and the async [`WizardDriver`] that couples
//! the wizard state machine to the generation service and the platform
//! ports.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod driver;
pub mod error;

pub use context::{AdminProfile, AppContext, ContractorProfile};
pub use driver::WizardDriver;
pub use error::{AppError, AppResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing with optional JSON format.
///
/// Set `RUST_LOG` to control log levels (default: `info,reno_app=debug`).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,reno_app=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Application crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
