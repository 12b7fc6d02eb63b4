//! Scan output types.

use trackguard_core::diagnostics::DiagnosticCollector;
use trackguard_core::model::EndpointDescriptor;

use crate::aggregator::ModuleSummary;

/// One verified endpoint with its findings.
#[derive(Debug, Clone)]
pub struct EndpointOutcome {
    pub endpoint: EndpointDescriptor,
    pub collector: DiagnosticCollector,
}

impl EndpointOutcome {
    pub fn is_clean(&self) -> bool {
        self.collector.is_empty()
    }
}

/// Counters for one module scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub verified: usize,
    pub skipped: usize,
    pub missing_policy: usize,
    pub duration_ms: u64,
}

/// Result of scanning one module.
#[derive(Debug, Clone, Default)]
pub struct ModuleReport {
    pub module_name: String,
    /// Outcomes in input order, skipped endpoints excluded.
    pub outcomes: Vec<EndpointOutcome>,
    pub summary: ModuleSummary,
    pub stats: ScanStats,
}

impl ModuleReport {
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.collector.error_count()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.collector.warning_count()).sum()
    }

    /// Outcome of the first endpoint with the given method name.
    pub fn outcome(&self, method_name: &str) -> Option<&EndpointOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.endpoint.method_name() == method_name)
    }
}
