//! TrackguardErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code alongside its human-readable message.
pub trait TrackguardErrorCode {
    /// Returns the error code string (e.g., "MODEL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const UNKNOWN_VALUE: &str = "UNKNOWN_VALUE";
pub const DISCOVERY_ERROR: &str = "DISCOVERY_ERROR";
pub const UNRESOLVED_PARAMETERS: &str = "UNRESOLVED_PARAMETERS";
pub const MANIFEST_ERROR: &str = "MANIFEST_ERROR";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
