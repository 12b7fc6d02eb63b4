//! Event payload types.

/// Payload for `on_module_started`.
#[derive(Debug, Clone)]
pub struct ModuleStartedEvent {
    pub module: String,
    pub endpoint_count: usize,
}

/// Payload for `on_endpoint_verified`.
#[derive(Debug, Clone)]
pub struct EndpointVerifiedEvent {
    pub declaring_type: String,
    pub signature: String,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Payload for `on_endpoint_skipped`.
#[derive(Debug, Clone)]
pub struct EndpointSkippedEvent {
    pub error_code: &'static str,
    pub message: String,
}

/// Payload for `on_policy_missing`.
#[derive(Debug, Clone)]
pub struct PolicyMissingEvent {
    pub declaring_type: String,
    pub signature: String,
}

/// Payload for `on_module_complete`.
#[derive(Debug, Clone)]
pub struct ModuleCompleteEvent {
    pub module: String,
    pub verified: usize,
    pub skipped: usize,
    pub missing_policy: usize,
    pub duration_ms: u64,
}
