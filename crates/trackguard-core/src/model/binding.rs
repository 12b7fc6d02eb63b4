//! Parameter bindings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;
use crate::errors::ModelError;
use crate::types::SmallVec2;

/// How a parameter receives its value at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    PathVariable,
    RequestParam,
    RequestBody,
    ModelAttribute,
}

impl BindingKind {
    /// Column order of the parameter usage table.
    pub const ALL: [BindingKind; 4] = [
        Self::PathVariable,
        Self::RequestParam,
        Self::RequestBody,
        Self::ModelAttribute,
    ];

    /// The annotation-style name, e.g. `PathVariable`.
    pub fn annotation_name(self) -> &'static str {
        match self {
            Self::PathVariable => "PathVariable",
            Self::RequestParam => "RequestParam",
            Self::RequestBody => "RequestBody",
            Self::ModelAttribute => "ModelAttribute",
        }
    }

    fn snake_name(self) -> &'static str {
        match self {
            Self::PathVariable => "path_variable",
            Self::RequestParam => "request_param",
            Self::RequestBody => "request_body",
            Self::ModelAttribute => "model_attribute",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.annotation_name())
    }
}

impl FromStr for BindingKind {
    type Err = ModelError;

    /// Accepts `PathVariable`, `@PathVariable` and `path_variable` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('@');
        Self::ALL
            .into_iter()
            .find(|k| k.annotation_name() == trimmed || k.snake_name() == trimmed)
            .ok_or_else(|| ModelError::UnknownBindingKind(s.to_string()))
    }
}

/// One formal parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBinding {
    #[serde(rename = "type")]
    ty: TypeRef,
    #[serde(default)]
    binding_kinds: SmallVec2<BindingKind>,
    #[serde(default)]
    is_plural: bool,
}

impl ParameterBinding {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            binding_kinds: SmallVec2::new(),
            is_plural: false,
        }
    }

    /// Add a binding kind; repeated kinds are kept once.
    pub fn with_binding(mut self, kind: BindingKind) -> Self {
        if !self.binding_kinds.contains(&kind) {
            self.binding_kinds.push(kind);
        }
        self
    }

    /// Mark the parameter as an array, collection or map.
    pub fn plural(mut self) -> Self {
        self.is_plural = true;
        self
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn binding_kinds(&self) -> &[BindingKind] {
        &self.binding_kinds
    }

    pub fn is_plural(&self) -> bool {
        self.is_plural
    }

    /// True when the parameter carries at least one recognized binding kind.
    pub fn is_bound(&self) -> bool {
        !self.binding_kinds.is_empty()
    }

    pub fn has_binding(&self, kind: BindingKind) -> bool {
        self.binding_kinds.contains(&kind)
    }
}

/// A parameter together with its resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedParameter {
    pub name: String,
    pub binding: ParameterBinding,
}

impl NamedParameter {
    pub fn new(name: impl Into<String>, binding: ParameterBinding) -> Self {
        Self {
            name: name.into(),
            binding,
        }
    }

    /// Display form, e.g. `@PathVariable Long id`.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for kind in self.binding.binding_kinds() {
            out.push('@');
            out.push_str(kind.annotation_name());
            out.push(' ');
        }
        out.push_str(self.binding.ty().simple_name());
        out.push(' ');
        out.push_str(&self.name);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_kind_parses_all_spellings() {
        assert_eq!("PathVariable".parse::<BindingKind>(), Ok(BindingKind::PathVariable));
        assert_eq!("@RequestBody".parse::<BindingKind>(), Ok(BindingKind::RequestBody));
        assert_eq!("model_attribute".parse::<BindingKind>(), Ok(BindingKind::ModelAttribute));
        assert!("RequestHeader".parse::<BindingKind>().is_err());
    }

    #[test]
    fn repeated_binding_kind_is_kept_once() {
        let binding = ParameterBinding::new("java.lang.Long")
            .with_binding(BindingKind::RequestParam)
            .with_binding(BindingKind::RequestParam);
        assert_eq!(binding.binding_kinds(), &[BindingKind::RequestParam]);
    }

    #[test]
    fn display_lists_annotations_before_type() {
        let param = NamedParameter::new(
            "id",
            ParameterBinding::new("java.lang.Long").with_binding(BindingKind::PathVariable),
        );
        assert_eq!(param.display(), "@PathVariable Long id");
    }
}
