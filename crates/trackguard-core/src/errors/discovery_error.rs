//! Errors reported by the discovery side when an endpoint cannot be modelled.

use super::error_code::{self, TrackguardErrorCode};
use super::ModelError;

/// A failure to supply a resolvable endpoint model. The affected endpoint is
/// skipped as a whole; other endpoints of the same run are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Parameter names of {declaring_type}#{method} could not be resolved")]
    UnresolvedParameterNames {
        declaring_type: String,
        method: String,
    },

    #[error(
        "{declaring_type}#{method} resolved {names} parameter names for {types} parameters"
    )]
    ParameterCountMismatch {
        declaring_type: String,
        method: String,
        names: usize,
        types: usize,
    },

    #[error("Invalid endpoint {declaring_type}#{method}: {source}")]
    InvalidEndpoint {
        declaring_type: String,
        method: String,
        #[source]
        source: ModelError,
    },

    #[error("Cannot read manifest {path}: {message}")]
    ManifestRead { path: String, message: String },

    #[error("Cannot parse manifest: {message}")]
    ManifestParse { message: String },
}

impl TrackguardErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedParameterNames { .. } | Self::ParameterCountMismatch { .. } => {
                error_code::UNRESOLVED_PARAMETERS
            }
            Self::InvalidEndpoint { .. } => error_code::DISCOVERY_ERROR,
            Self::ManifestRead { .. } | Self::ManifestParse { .. } => error_code::MANIFEST_ERROR,
        }
    }
}
