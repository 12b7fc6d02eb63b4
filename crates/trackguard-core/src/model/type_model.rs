//! The type-introspection capability the verifier depends on.
//!
//! The verifier never inspects types itself. Whoever discovers endpoints also
//! supplies a [`TypeModel`] that answers two questions about a type: which
//! fields it has, and which markers it carries. A static, data-driven
//! implementation lives in [`super::catalog::TypeCatalog`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;
use crate::errors::ModelError;

/// Type-level markers relevant to audit tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMarker {
    /// The type is a persisted domain entity.
    Entity,
    /// The type carries a stable identity without necessarily being persisted.
    Identifiable,
}

impl TypeMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Identifiable => "identifiable",
        }
    }
}

impl fmt::Display for TypeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeMarker {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entity" => Ok(Self::Entity),
            "identifiable" => Ok(Self::Identifiable),
            _ => Err(ModelError::UnknownMarker(s.to_string())),
        }
    }
}

/// A named field and its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Field graph and marker lookup for declared types.
///
/// `Send + Sync` so a single model can be shared by parallel verifiers.
pub trait TypeModel: Send + Sync {
    /// All fields visible on `ty`, including inherited ones, nearest first.
    /// Unknown types have no fields.
    fn fields(&self, ty: &TypeRef) -> Vec<FieldDef>;

    /// Whether `ty` carries `marker`.
    fn has_marker(&self, ty: &TypeRef, marker: TypeMarker) -> bool;

    /// Type of the field `name` on `owner`, if any.
    fn field_type(&self, owner: &TypeRef, name: &str) -> Option<TypeRef> {
        self.fields(owner)
            .into_iter()
            .find(|f| f.name == name)
            .map(|f| f.ty)
    }

    /// Whether `ty` is a string or a primitive/boxed scalar.
    fn is_scalar(&self, ty: &TypeRef) -> bool {
        is_builtin_scalar(ty.name())
    }

    /// Storage table of an entity type. Defaults to the simple name.
    fn table_name(&self, ty: &TypeRef) -> String {
        ty.simple_name().to_string()
    }
}

const SCALAR_NAMES: &[&str] = &[
    "String",
    "boolean",
    "Boolean",
    "byte",
    "Byte",
    "char",
    "Character",
    "short",
    "Short",
    "int",
    "Integer",
    "long",
    "Long",
    "float",
    "Float",
    "double",
    "Double",
    "void",
    "Void",
];

/// Strings, primitives and their boxed forms, with or without the
/// `java.lang.` prefix.
pub fn is_builtin_scalar(name: &str) -> bool {
    let bare = name.strip_prefix("java.lang.").unwrap_or(name);
    SCALAR_NAMES.contains(&bare)
}
