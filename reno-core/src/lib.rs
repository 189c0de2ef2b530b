//! # Renoviz Core
//!
//! Core domain logic for renovation visualization: the data model, the
//! wizard state machine, the material catalog, and the project store.
//! Performs no I/O of its own; platform facilities sit behind the narrow
//! ports in [`ports`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  reno-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Wizard Session  │  Material Catalog        │
//! │  - Six steps     │  - Pure filtering        │
//! │  - Dual tracks   │  - Category derivation   │
//! │  - Stale tokens  │                          │
//! ├─────────────────────────────────────────────┤
//! │  Project Store   │  Platform Ports          │
//! │  - In-memory     │  - Image source          │
//! │  - Thread-safe   │  - Dictation             │
//! │  - Ordered       │  - Print sink            │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod accounts;
pub mod content;
pub mod error;
pub mod material;
pub mod ports;
pub mod project;
pub mod role;
pub mod store;
pub mod wizard;

pub use accounts::{
    AccountId, AccountStatus, AdminPermissions, AdminRole, AdminUser, BillingInterval,
    ContractorAccount, PlanId, PricingPlan,
};
pub use content::SiteContent;
pub use error::{CoreError, CoreResult};
pub use material::{Material, MaterialCatalog, MaterialId};
pub use ports::{
    DictationSession, FilePrintSink, FsImageSource, ImageSource, PortError, PortResult, PrintSink,
    ScriptedDictation,
};
pub use project::{
    ImageFormat, ImagePayload, Project, ProjectId, ProjectSpace, ProjectStatus, SpaceId,
};
pub use role::{Route, UserRole};
pub use store::{ProjectStore, StoreError};
pub use wizard::{
    GenerationTicket, RefinementRequest, Resolution, SaveOutcome, ScopeFlags, Track, TrackState,
    WizardMode, WizardSession, WizardStep,
};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
