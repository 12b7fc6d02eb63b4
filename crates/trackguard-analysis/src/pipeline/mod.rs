//! Module scan pipeline: discovery results in, module report out.

pub mod module_scan;
pub mod report;

pub use module_scan::ModuleScanner;
pub use report::{EndpointOutcome, ModuleReport, ScanStats};
