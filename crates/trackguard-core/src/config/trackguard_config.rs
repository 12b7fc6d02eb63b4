//! Top-level trackguard configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PipelineConfig, VerifierConfig};
use crate::constants::{ENV_PREFIX, PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TRACKGUARD_*`)
/// 3. Project config (`trackguard.toml` in project root)
/// 4. User config (`~/.trackguard/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TrackguardConfig {
    pub verifier: VerifierConfig,
    pub pipeline: PipelineConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub necessity_severity: Option<String>,
    pub redundancy_threshold: Option<usize>,
    pub entity_detection: Option<String>,
    pub threads: Option<usize>,
}

impl TrackguardConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config: a broken file is fatal, an unreadable one is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli)?;
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TrackguardConfig) -> Result<(), ConfigError> {
        if config.verifier.redundancy_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "verifier.redundancy_threshold".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.pipeline.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.trackguard/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TrackguardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TrackguardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values of `other` win.
    fn merge(base: &mut TrackguardConfig, other: &TrackguardConfig) {
        // Verifier
        if other.verifier.necessity_severity.is_some() {
            base.verifier.necessity_severity = other.verifier.necessity_severity;
        }
        if other.verifier.necessity_skip_plural.is_some() {
            base.verifier.necessity_skip_plural = other.verifier.necessity_skip_plural;
        }
        if other.verifier.redundancy_threshold.is_some() {
            base.verifier.redundancy_threshold = other.verifier.redundancy_threshold;
        }
        if other.verifier.entity_detection.is_some() {
            base.verifier.entity_detection = other.verifier.entity_detection;
        }

        // Pipeline
        if other.pipeline.parallel.is_some() {
            base.pipeline.parallel = other.pipeline.parallel;
        }
        if other.pipeline.threads.is_some() {
            base.pipeline.threads = other.pipeline.threads;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TRACKGUARD_VERIFIER_REDUNDANCY_THRESHOLD`, `TRACKGUARD_PIPELINE_THREADS`, etc.
    /// Unparseable numbers and booleans are ignored; unknown enum names are rejected.
    fn apply_env_overrides(config: &mut TrackguardConfig) -> Result<(), ConfigError> {
        if let Ok(val) = env_var("VERIFIER_NECESSITY_SEVERITY") {
            config.verifier.necessity_severity = Some(val.parse()?);
        }
        if let Ok(val) = env_var("VERIFIER_NECESSITY_SKIP_PLURAL") {
            if let Ok(v) = val.parse::<bool>() {
                config.verifier.necessity_skip_plural = Some(v);
            }
        }
        if let Ok(val) = env_var("VERIFIER_REDUNDANCY_THRESHOLD") {
            if let Ok(v) = val.parse::<usize>() {
                config.verifier.redundancy_threshold = Some(v);
            }
        }
        if let Ok(val) = env_var("VERIFIER_ENTITY_DETECTION") {
            config.verifier.entity_detection = Some(val.parse()?);
        }
        if let Ok(val) = env_var("PIPELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.parallel = Some(v);
            }
        }
        if let Ok(val) = env_var("PIPELINE_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.pipeline.threads = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(
        config: &mut TrackguardConfig,
        cli: &CliOverrides,
    ) -> Result<(), ConfigError> {
        if let Some(ref v) = cli.necessity_severity {
            config.verifier.necessity_severity = Some(v.parse()?);
        }
        if let Some(v) = cli.redundancy_threshold {
            config.verifier.redundancy_threshold = Some(v);
        }
        if let Some(ref v) = cli.entity_detection {
            config.verifier.entity_detection = Some(v.parse()?);
        }
        if let Some(v) = cli.threads {
            config.pipeline.threads = Some(v);
        }
        Ok(())
    }
}

/// `TRACKGUARD_`-prefixed environment variable.
fn env_var(name: &str) -> Result<String, std::env::VarError> {
    std::env::var(format!("{ENV_PREFIX}{name}"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
