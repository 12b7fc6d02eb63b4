//! Policy verification engine for audit-tracking declarations.
//!
//! - [`verifier`]: checks one endpoint against its own metadata.
//! - [`aggregator`]: folds per-endpoint results into a module summary.
//! - [`pipeline`]: runs both over a module's endpoint stream.
//! - [`manifest`]: loads pre-resolved endpoints and types from JSON.

pub mod aggregator;
pub mod manifest;
pub mod pipeline;
pub mod verifier;

pub use aggregator::{MethodKey, ModuleSummary, Table};
pub use manifest::EndpointManifest;
pub use pipeline::{EndpointOutcome, ModuleReport, ModuleScanner, ScanStats};
pub use verifier::PolicyVerifier;
