//! Composite dedup key for reported methods.

use std::fmt;

use serde::Serialize;
use trackguard_core::model::{EndpointDescriptor, TypeRef};

/// Identity of a method by its declaring type and structural signature.
///
/// A method inherited unchanged by several exposing types has one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MethodKey {
    pub declaring_type: TypeRef,
    pub signature: String,
}

impl MethodKey {
    pub fn new(declaring_type: impl Into<TypeRef>, signature: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            signature: signature.into(),
        }
    }

    pub fn of(endpoint: &EndpointDescriptor) -> Self {
        Self::new(endpoint.declaring_type().clone(), endpoint.signature())
    }
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.declaring_type, self.signature)
    }
}
