//! Shared constants for the trackguard engine.

/// Default number of tracked values above which an endpoint is flagged as
/// likely over-specified.
pub const DEFAULT_REDUNDANCY_THRESHOLD: usize = 2;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "TRACKGUARD_LOG";

/// Filter used when `TRACKGUARD_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "trackguard=info";

/// Prefix for configuration environment overrides.
pub const ENV_PREFIX: &str = "TRACKGUARD_";

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "trackguard.toml";

/// User-level configuration directory, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".trackguard";
