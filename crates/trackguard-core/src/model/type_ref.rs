//! Type identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a declared type, held as its qualified name
/// (e.g. `dk.sensum.citizen.Citizen`, `java.lang.Long`, `long`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The qualified name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The qualified name without generic arguments
    /// (`java.util.List<java.lang.Long>` gives `java.util.List`).
    pub fn raw_name(&self) -> &str {
        match self.0.split_once('<') {
            Some((raw, _)) => raw.trim_end(),
            None => &self.0,
        }
    }

    /// The raw name after the last package or nesting separator.
    pub fn simple_name(&self) -> &str {
        let raw = self.raw_name();
        raw.rsplit(|c: char| c == '.' || c == '$')
            .next()
            .unwrap_or(raw)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}
