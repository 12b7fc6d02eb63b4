//! Tests for the trackguard event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use trackguard_core::events::types::*;
use trackguard_core::events::{AuditEventHandler, EventDispatcher};

/// A test handler that counts events.
#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    verified: AtomicUsize,
    skipped: AtomicUsize,
    missing: AtomicUsize,
    complete: AtomicUsize,
}

impl AuditEventHandler for CountingHandler {
    fn on_module_started(&self, _event: &ModuleStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_endpoint_verified(&self, _event: &EndpointVerifiedEvent) {
        self.verified.fetch_add(1, Ordering::Relaxed);
    }

    fn on_endpoint_skipped(&self, _event: &EndpointSkippedEvent) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    fn on_policy_missing(&self, _event: &PolicyMissingEvent) {
        self.missing.fetch_add(1, Ordering::Relaxed);
    }

    fn on_module_complete(&self, _event: &ModuleCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }
}

fn verified_event() -> EndpointVerifiedEvent {
    EndpointVerifiedEvent {
        declaring_type: "app.web.CitizenController".into(),
        signature: "show(java.lang.Long)".into(),
        error_count: 0,
        warning_count: 1,
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct NoopHandler;
    impl AuditEventHandler for NoopHandler {}

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(NoopHandler));
    dispatcher.emit_endpoint_verified(&verified_event());
    dispatcher.emit_module_complete(&ModuleCompleteEvent {
        module: "citizen".into(),
        verified: 1,
        skipped: 0,
        missing_policy: 0,
        duration_ms: 3,
    });
}

#[test]
fn test_empty_dispatcher() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_module_started(&ModuleStartedEvent {
        module: "citizen".into(),
        endpoint_count: 0,
    });
}

#[test]
fn test_every_handler_receives_every_event() {
    let first = Arc::new(CountingHandler::default());
    let second = Arc::new(CountingHandler::default());

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_module_started(&ModuleStartedEvent {
        module: "citizen".into(),
        endpoint_count: 2,
    });
    dispatcher.emit_endpoint_verified(&verified_event());
    dispatcher.emit_endpoint_skipped(&EndpointSkippedEvent {
        error_code: "UNRESOLVED_PARAMETERS",
        message: "names".into(),
    });
    dispatcher.emit_policy_missing(&PolicyMissingEvent {
        declaring_type: "app.web.CitizenController".into(),
        signature: "delete(java.lang.Long)".into(),
    });

    for handler in [&first, &second] {
        assert_eq!(handler.started.load(Ordering::Relaxed), 1);
        assert_eq!(handler.verified.load(Ordering::Relaxed), 1);
        assert_eq!(handler.skipped.load(Ordering::Relaxed), 1);
        assert_eq!(handler.missing.load(Ordering::Relaxed), 1);
        assert_eq!(handler.complete.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_does_not_stop_others() {
    struct PanickingHandler;
    impl AuditEventHandler for PanickingHandler {
        fn on_endpoint_verified(&self, _event: &EndpointVerifiedEvent) {
            panic!("handler failure");
        }
    }

    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_endpoint_verified(&verified_event());
    assert_eq!(counter.verified.load(Ordering::Relaxed), 1);
}

#[test]
fn test_payload_is_passed_through() {
    #[derive(Default)]
    struct Recorder {
        signatures: Mutex<Vec<String>>,
    }
    impl AuditEventHandler for Recorder {
        fn on_policy_missing(&self, event: &PolicyMissingEvent) {
            self.signatures.lock().unwrap().push(event.signature.clone());
        }
    }

    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());
    dispatcher.emit_policy_missing(&PolicyMissingEvent {
        declaring_type: "app.web.CitizenController".into(),
        signature: "delete(java.lang.Long)".into(),
    });

    assert_eq!(
        *recorder.signatures.lock().unwrap(),
        vec!["delete(java.lang.Long)".to_string()]
    );
}
