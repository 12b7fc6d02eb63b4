//! Static, data-driven [`TypeModel`].

use serde::{Deserialize, Serialize};

use super::type_model::{is_builtin_scalar, FieldDef, TypeMarker, TypeModel};
use super::type_ref::TypeRef;
use crate::types::{FxHashMap, FxHashSet};

/// Definition of one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: TypeRef,
    #[serde(default)]
    pub markers: Vec<TypeMarker>,
    /// Storage table of an entity; the simple name is used when absent.
    #[serde(default)]
    pub table: Option<String>,
    /// Direct supertypes (superclass first, then interfaces).
    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Marks a type as scalar beyond the builtin string/primitive set.
    #[serde(default)]
    pub scalar: bool,
}

impl TypeDef {
    pub fn new(name: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            table: None,
            supertypes: Vec::new(),
            fields: Vec::new(),
            scalar: false,
        }
    }

    pub fn marker(mut self, marker: TypeMarker) -> Self {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    pub fn entity(self) -> Self {
        self.marker(TypeMarker::Entity)
    }

    pub fn identifiable(self) -> Self {
        self.marker(TypeMarker::Identifiable)
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn extends(mut self, supertype: impl Into<TypeRef>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.fields.push(FieldDef::new(name, ty));
        self
    }
}

/// In-memory type catalog keyed by qualified name.
///
/// Field lookup follows supertypes, nearest declaration first. The entity
/// marker applies to the annotated type only; the identifiable capability is
/// inherited by every subtype.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: FxHashMap<TypeRef, TypeDef>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing any previous one with the same name.
    pub fn insert(&mut self, def: TypeDef) {
        self.types.insert(def.name.clone(), def);
    }

    pub fn with(mut self, def: TypeDef) -> Self {
        self.insert(def);
        self
    }

    pub fn get(&self, ty: &TypeRef) -> Option<&TypeDef> {
        self.types.get(ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// `ty` followed by all of its transitive supertypes, breadth first.
    /// Cycles in malformed catalogs are cut.
    fn lineage<'a>(&'a self, ty: &TypeRef) -> Vec<&'a TypeDef> {
        let mut out = Vec::new();
        let mut visited: FxHashSet<&TypeRef> = FxHashSet::default();
        let mut queue: Vec<&TypeRef> = Vec::new();
        if let Some(def) = self.types.get(ty) {
            queue.push(&def.name);
        }
        let mut next = 0;
        while next < queue.len() {
            let current = queue[next];
            next += 1;
            if !visited.insert(current) {
                continue;
            }
            if let Some(def) = self.types.get(current) {
                out.push(def);
                queue.extend(def.supertypes.iter());
            }
        }
        out
    }
}

impl FromIterator<TypeDef> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDef>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for def in iter {
            catalog.insert(def);
        }
        catalog
    }
}

impl TypeModel for TypeCatalog {
    fn fields(&self, ty: &TypeRef) -> Vec<FieldDef> {
        self.lineage(ty)
            .into_iter()
            .flat_map(|def| def.fields.iter().cloned())
            .collect()
    }

    fn has_marker(&self, ty: &TypeRef, marker: TypeMarker) -> bool {
        match marker {
            TypeMarker::Entity => self
                .types
                .get(ty)
                .is_some_and(|def| def.markers.contains(&TypeMarker::Entity)),
            TypeMarker::Identifiable => self
                .lineage(ty)
                .iter()
                .any(|def| def.markers.contains(&TypeMarker::Identifiable)),
        }
    }

    fn field_type(&self, owner: &TypeRef, name: &str) -> Option<TypeRef> {
        self.lineage(owner)
            .into_iter()
            .flat_map(|def| def.fields.iter())
            .find(|f| f.name == name)
            .map(|f| f.ty.clone())
    }

    fn is_scalar(&self, ty: &TypeRef) -> bool {
        is_builtin_scalar(ty.name()) || self.types.get(ty).is_some_and(|def| def.scalar)
    }

    fn table_name(&self, ty: &TypeRef) -> String {
        self.types
            .get(ty)
            .and_then(|def| def.table.clone())
            .unwrap_or_else(|| ty.simple_name().to_string())
    }
}
