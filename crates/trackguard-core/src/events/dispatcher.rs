//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::AuditEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AuditEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn AuditEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn AuditEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!(event = event_name, "event handler panicked");
            }
        }
    }

    pub fn emit_module_started(&self, event: &ModuleStartedEvent) {
        self.emit("module_started", |h| h.on_module_started(event));
    }

    pub fn emit_endpoint_verified(&self, event: &EndpointVerifiedEvent) {
        self.emit("endpoint_verified", |h| h.on_endpoint_verified(event));
    }

    pub fn emit_endpoint_skipped(&self, event: &EndpointSkippedEvent) {
        self.emit("endpoint_skipped", |h| h.on_endpoint_skipped(event));
    }

    pub fn emit_policy_missing(&self, event: &PolicyMissingEvent) {
        self.emit("policy_missing", |h| h.on_policy_missing(event));
    }

    pub fn emit_module_complete(&self, event: &ModuleCompleteEvent) {
        self.emit("module_complete", |h| h.on_module_complete(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
