//! Construction-time contract violations of the endpoint model.

use super::error_code::{self, TrackguardErrorCode};

/// Errors raised while building model values. These abort the single
/// endpoint being built and never reach the verifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Endpoint method name must not be empty")]
    EmptyMethodName,

    #[error("Endpoint {method} has no declaring type")]
    EmptyDeclaringType { method: String },

    #[error("Parameter #{index} of {method} has an empty name")]
    EmptyParameterName { method: String, index: usize },

    #[error("Parameter {name} is declared twice on {method}")]
    DuplicateParameter { method: String, name: String },

    #[error("Tracked value expression must not be empty")]
    EmptyExpression,

    #[error("Tracked value {expression} has no declared type")]
    EmptyDeclaredType { expression: String },

    #[error("Unknown tracking action: {0}")]
    UnknownAction(String),

    #[error("Unknown HTTP method: {0}")]
    UnknownHttpMethod(String),

    #[error("Unknown binding kind: {0}")]
    UnknownBindingKind(String),

    #[error("Unknown type marker: {0}")]
    UnknownMarker(String),
}

impl TrackguardErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAction(_)
            | Self::UnknownHttpMethod(_)
            | Self::UnknownBindingKind(_)
            | Self::UnknownMarker(_) => error_code::UNKNOWN_VALUE,
            _ => error_code::MODEL_ERROR,
        }
    }
}
