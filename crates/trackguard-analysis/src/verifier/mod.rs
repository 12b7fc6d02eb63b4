//! Policy verifier: the ordered rule set applied to one endpoint.
//!
//! Rules run in a fixed order. An `IGNORE` declaration short-circuits
//! everything but the "no tracked values" rule; otherwise every rule runs and
//! findings accumulate in the endpoint's [`DiagnosticCollector`]:
//!
//! 1. ignore short-circuit (error)
//! 2. action / HTTP verb consistency (warning)
//! 3. redundancy heuristic (warning)
//! 4. necessity of tracked values (configurable severity)
//! 5. duplicate tracked values (error)
//! 6. per-value expression, type and path validation (errors)

pub mod expression;
pub mod rules;

use trackguard_core::config::VerifierConfig;
use trackguard_core::diagnostics::DiagnosticCollector;
use trackguard_core::model::{EndpointDescriptor, TypeModel};

use self::rules::RuleContext;

/// Verifies endpoints against their own tracking declarations.
///
/// Holds only shared references, so one verifier can be used from many
/// threads at once; each call owns its collector.
#[derive(Clone, Copy)]
pub struct PolicyVerifier<'a> {
    model: &'a dyn TypeModel,
    config: &'a VerifierConfig,
}

impl<'a> PolicyVerifier<'a> {
    pub fn new(model: &'a dyn TypeModel, config: &'a VerifierConfig) -> Self {
        Self { model, config }
    }

    /// Verify `endpoint` into a fresh collector.
    pub fn verify(&self, endpoint: &EndpointDescriptor) -> DiagnosticCollector {
        let mut collector = DiagnosticCollector::new();
        self.verify_into(endpoint, &mut collector);
        collector
    }

    /// Verify `endpoint`, appending findings to `out`.
    ///
    /// An endpoint without a tracking declaration has nothing to verify;
    /// reporting the absence is the caller's concern.
    pub fn verify_into(&self, endpoint: &EndpointDescriptor, out: &mut DiagnosticCollector) {
        let Some(tracking) = endpoint.tracking() else {
            tracing::trace!(
                endpoint = %endpoint.signature(),
                "no tracking declaration, nothing to verify"
            );
            return;
        };

        let ctx = RuleContext {
            endpoint,
            tracking,
            model: self.model,
            config: self.config,
        };

        if tracking.is_ignoring() {
            rules::check_ignored(&ctx, out);
        } else {
            rules::check_action_http(&ctx, out);
            rules::check_redundancy(&ctx, out);
            rules::check_necessity(&ctx, out);
            rules::check_duplicates(&ctx, out);
            for value in tracking.tracked_values() {
                rules::check_tracked_value(&ctx, value, out);
            }
        }

        tracing::debug!(
            declaring_type = %endpoint.declaring_type(),
            endpoint = %endpoint.signature(),
            action = %tracking.action(),
            errors = out.error_count(),
            warnings = out.warning_count(),
            "endpoint verified"
        );
    }
}

impl std::fmt::Debug for PolicyVerifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyVerifier")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
