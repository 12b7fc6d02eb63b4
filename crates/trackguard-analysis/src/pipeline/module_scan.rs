//! ModuleScanner: verify a module's endpoints and fold them into a summary.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use trackguard_core::config::TrackguardConfig;
use trackguard_core::diagnostics::{DiagnosticCollector, ErrorKind};
use trackguard_core::errors::{DiscoveryError, PipelineError, PipelineResult, TrackguardErrorCode};
use trackguard_core::events::{
    AuditEventHandler, EndpointSkippedEvent, EndpointVerifiedEvent, EventDispatcher,
    ModuleCompleteEvent, ModuleStartedEvent, PolicyMissingEvent,
};
use trackguard_core::model::{EndpointDescriptor, TypeModel};

use super::report::{EndpointOutcome, ModuleReport};
use crate::aggregator::ModuleSummary;
use crate::verifier::PolicyVerifier;

/// Runs the verifier over one module's endpoints.
///
/// Verification fans out over rayon; aggregation happens afterwards on the
/// calling thread, strictly in input order.
#[derive(Debug, Clone, Default)]
pub struct ModuleScanner {
    config: TrackguardConfig,
    dispatcher: EventDispatcher,
}

impl ModuleScanner {
    pub fn new(config: TrackguardConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(),
        }
    }

    pub fn with_handler(mut self, handler: Arc<dyn AuditEventHandler>) -> Self {
        self.dispatcher.register(handler);
        self
    }

    pub fn config(&self) -> &TrackguardConfig {
        &self.config
    }

    /// Scan one module.
    ///
    /// Items that failed discovery are skipped and reported as non-fatal
    /// errors; every other endpoint is verified and aggregated.
    pub fn scan<I>(
        &self,
        module_name: &str,
        model: &dyn TypeModel,
        items: I,
    ) -> PipelineResult<ModuleReport>
    where
        I: IntoIterator<Item = Result<EndpointDescriptor, DiscoveryError>>,
    {
        let start = Instant::now();
        let mut result = PipelineResult::new(ModuleReport {
            module_name: module_name.to_string(),
            summary: ModuleSummary::new(module_name),
            ..ModuleReport::default()
        });

        let items: Vec<_> = items.into_iter().collect();
        self.dispatcher.emit_module_started(&ModuleStartedEvent {
            module: module_name.to_string(),
            endpoint_count: items.len(),
        });
        tracing::info!(module = module_name, endpoints = items.len(), "scanning module");

        let mut endpoints = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Ok(endpoint) => endpoints.push(endpoint),
                Err(e) => {
                    tracing::warn!(
                        module = module_name,
                        code = e.error_code(),
                        error = %e,
                        "skipping endpoint"
                    );
                    self.dispatcher.emit_endpoint_skipped(&EndpointSkippedEvent {
                        error_code: e.error_code(),
                        message: e.to_string(),
                    });
                    result.data.stats.skipped += 1;
                    result.add_error(PipelineError::from(e));
                }
            }
        }

        let collectors = match self.verify_all(model, &endpoints) {
            Ok(collectors) => collectors,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to sequential verification");
                result.add_error(e);
                let verifier = PolicyVerifier::new(model, &self.config.verifier);
                endpoints
                    .iter()
                    .map(|endpoint| verify_one(&verifier, endpoint))
                    .collect()
            }
        };

        let report = &mut result.data;
        for (endpoint, collector) in endpoints.into_iter().zip(collectors) {
            match endpoint.tracking() {
                Some(_) => {
                    report.summary.record_endpoint(&endpoint);
                    report.summary.merge_tracked_entities(&endpoint, model);
                    report.summary.merge_parameter_usage(&endpoint);
                    report.stats.verified += 1;
                    self.dispatcher.emit_endpoint_verified(&EndpointVerifiedEvent {
                        declaring_type: endpoint.declaring_type().to_string(),
                        signature: endpoint.signature(),
                        error_count: collector.error_count(),
                        warning_count: collector.warning_count(),
                    });
                }
                None => {
                    report.stats.missing_policy += 1;
                    self.dispatcher.emit_policy_missing(&PolicyMissingEvent {
                        declaring_type: endpoint.declaring_type().to_string(),
                        signature: endpoint.signature(),
                    });
                }
            }
            report.summary.record_diagnostics(&endpoint, &collector);
            report.outcomes.push(EndpointOutcome {
                endpoint,
                collector,
            });
        }

        report.stats.duration_ms = start.elapsed().as_millis() as u64;
        self.dispatcher.emit_module_complete(&ModuleCompleteEvent {
            module: module_name.to_string(),
            verified: report.stats.verified,
            skipped: report.stats.skipped,
            missing_policy: report.stats.missing_policy,
            duration_ms: report.stats.duration_ms,
        });
        tracing::info!(
            module = module_name,
            verified = report.stats.verified,
            skipped = report.stats.skipped,
            missing_policy = report.stats.missing_policy,
            errors = report.error_count(),
            warnings = report.warning_count(),
            duration_ms = report.stats.duration_ms,
            "module scan complete"
        );

        result
    }

    /// One collector per endpoint, index-aligned with `endpoints`.
    fn verify_all(
        &self,
        model: &dyn TypeModel,
        endpoints: &[EndpointDescriptor],
    ) -> Result<Vec<DiagnosticCollector>, PipelineError> {
        let verifier = PolicyVerifier::new(model, &self.config.verifier);

        if !self.config.pipeline.effective_parallel() {
            return Ok(endpoints.iter().map(|e| verify_one(&verifier, e)).collect());
        }

        let run = || -> Vec<DiagnosticCollector> {
            endpoints
                .par_iter()
                .map(|e| verify_one(&verifier, e))
                .collect()
        };

        match self.config.pipeline.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}

/// Verify one endpoint; an absent declaration is itself an error.
fn verify_one(verifier: &PolicyVerifier<'_>, endpoint: &EndpointDescriptor) -> DiagnosticCollector {
    let mut collector = DiagnosticCollector::new();
    if endpoint.tracking().is_none() {
        tracing::error!(
            declaring_type = %endpoint.declaring_type(),
            method = %endpoint.pretty_signature(),
            "endpoint has no tracking declaration"
        );
        collector.record_error(
            ErrorKind::MissingPolicy,
            format!(
                "The following method is supposed to have a tracking declaration:\n{}",
                endpoint.pretty_signature()
            ),
        );
        return collector;
    }
    verifier.verify_into(endpoint, &mut collector);
    collector
}
