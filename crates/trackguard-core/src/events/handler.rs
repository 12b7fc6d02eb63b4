//! AuditEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for handling module scan events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` because endpoints
/// may be verified on a worker pool.
pub trait AuditEventHandler: Send + Sync {
    fn on_module_started(&self, _event: &ModuleStartedEvent) {}
    fn on_endpoint_verified(&self, _event: &EndpointVerifiedEvent) {}
    fn on_endpoint_skipped(&self, _event: &EndpointSkippedEvent) {}
    fn on_policy_missing(&self, _event: &PolicyMissingEvent) {}
    fn on_module_complete(&self, _event: &ModuleCompleteEvent) {}
}
