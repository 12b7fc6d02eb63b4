//! Module aggregator: folds per-endpoint results into one module view.

pub mod key;
pub mod module_summary;
pub mod tables;

pub use key::MethodKey;
pub use module_summary::{ModuleSummary, RecordOutcome};
pub use tables::{EndpointRow, Table};
