//! Diagnostic taxonomy and the per-endpoint collector.

pub mod collector;
pub mod kinds;

pub use collector::DiagnosticCollector;
pub use kinds::{Diagnostic, DiagnosticKind, ErrorKind, Severity, WarningKind};
