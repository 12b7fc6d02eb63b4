//! Closed enumerations of diagnostic kinds.
//!
//! Declaration order is significant: collectors render kinds in this order and
//! the module tables use it for their columns.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_kinds {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// Number of kinds.
            pub const COUNT: usize = Self::ALL.len();

            /// Position in declaration order.
            pub fn ordinal(self) -> usize {
                self as usize
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_kinds!(
    /// Findings that mean the declaration cannot be trusted as written.
    ErrorKind {
        IncorrectType => "INCORRECT_TYPE",
        IncorrectExpression => "INCORRECT_EXPRESSION",
        MissingPolicy => "MISSING_POLICY",
        RedundantDeclarations => "REDUNDANT_DECLARATIONS",
        DuplicatedValue => "DUPLICATED_VALUE",
        // Only used when the necessity check is configured as an error.
        MissingTrackedValue => "MISSING_TRACKED_VALUE",
    }
);

define_kinds!(
    /// Plausible authoring mistakes that do not invalidate the declaration.
    WarningKind {
        ActionHttpMismatch => "ACTION_HTTP_MISMATCH",
        LikelyRedundant => "LIKELY_REDUNDANT",
        MissingTrackedValue => "MISSING_TRACKED_VALUE",
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic kind from either enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    Error(ErrorKind),
    Warning(WarningKind),
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::Error(_) => Severity::Error,
            Self::Warning(_) => Severity::Warning,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error(k) => k.as_str(),
            Self::Warning(k) => k.as_str(),
        }
    }
}

impl From<ErrorKind> for DiagnosticKind {
    fn from(kind: ErrorKind) -> Self {
        Self::Error(kind)
    }
}

impl From<WarningKind> for DiagnosticKind {
    fn from(kind: WarningKind) -> Self {
        Self::Warning(kind)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: impl Into<DiagnosticKind>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
