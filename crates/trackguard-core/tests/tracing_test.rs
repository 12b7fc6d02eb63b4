//! Tests for trackguard tracing setup.

use std::sync::Mutex;

use trackguard_core::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use trackguard_core::tracing::setup::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_log_env_var_name() {
    assert_eq!(LOG_ENV_VAR, "TRACKGUARD_LOG");
    assert_eq!(DEFAULT_LOG_FILTER, "trackguard=info");
}

#[test]
fn test_init_with_per_target_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(
        LOG_ENV_VAR,
        "trackguard_analysis::verifier=debug,trackguard_core=warn",
    );
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "[[not a filter");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
    tracing::info!("still logging after fallback");
}
