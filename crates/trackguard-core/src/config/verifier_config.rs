//! Verifier configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REDUNDANCY_THRESHOLD;
use crate::diagnostics::{DiagnosticKind, ErrorKind, WarningKind};
use crate::errors::ConfigError;

/// Severity of the necessity check (tracked values missing while bound
/// parameters exist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NecessitySeverity {
    #[default]
    Warning,
    Error,
}

impl NecessitySeverity {
    pub fn kind(self) -> DiagnosticKind {
        match self {
            Self::Warning => DiagnosticKind::Warning(WarningKind::MissingTrackedValue),
            Self::Error => DiagnosticKind::Error(ErrorKind::MissingTrackedValue),
        }
    }
}

impl FromStr for NecessitySeverity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidValue {
                field: "verifier.necessity_severity".to_string(),
                message: format!("expected 'warning' or 'error', got '{other}'"),
            }),
        }
    }
}

/// Which types count as valid tracked-value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityDetection {
    /// Entity marker, or the identifiable capability.
    #[default]
    MarkerOrIdentifiable,
    /// Entity marker only.
    MarkerOnly,
}

impl FromStr for EntityDetection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "marker_or_identifiable" => Ok(Self::MarkerOrIdentifiable),
            "marker_only" => Ok(Self::MarkerOnly),
            other => Err(ConfigError::InvalidValue {
                field: "verifier.entity_detection".to_string(),
                message: format!(
                    "expected 'marker_or_identifiable' or 'marker_only', got '{other}'"
                ),
            }),
        }
    }
}

/// Configuration for the policy verifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VerifierConfig {
    /// Severity of the necessity check. Default: warning.
    pub necessity_severity: Option<NecessitySeverity>,
    /// Exclude array/collection/map parameters from the necessity check.
    /// Default: true.
    pub necessity_skip_plural: Option<bool>,
    /// More tracked values than this is flagged as likely redundant. Default: 2.
    pub redundancy_threshold: Option<usize>,
    /// Accepted tracked-value types. Default: marker or identifiable.
    pub entity_detection: Option<EntityDetection>,
}

impl VerifierConfig {
    pub fn effective_necessity_severity(&self) -> NecessitySeverity {
        self.necessity_severity.unwrap_or_default()
    }

    pub fn effective_necessity_skip_plural(&self) -> bool {
        self.necessity_skip_plural.unwrap_or(true)
    }

    pub fn effective_redundancy_threshold(&self) -> usize {
        self.redundancy_threshold
            .unwrap_or(DEFAULT_REDUNDANCY_THRESHOLD)
    }

    pub fn effective_entity_detection(&self) -> EntityDetection {
        self.entity_detection.unwrap_or_default()
    }
}
