//! Endpoint descriptors.

use std::collections::BTreeSet;

use serde::Serialize;

use super::binding::{NamedParameter, ParameterBinding};
use super::http::HttpMethod;
use super::tracking::TrackingDeclaration;
use super::type_ref::TypeRef;
use crate::errors::ModelError;
use crate::types::FxHashSet;

/// One web-reachable method, fully resolved by the discovery side.
///
/// Built once through [`EndpointDescriptorBuilder`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
    method_name: String,
    declaring_type: TypeRef,
    exposing_type: Option<TypeRef>,
    return_type: Option<TypeRef>,
    relative_url: String,
    http_methods: BTreeSet<HttpMethod>,
    parameters: Vec<NamedParameter>,
    tracking: Option<TrackingDeclaration>,
}

impl EndpointDescriptor {
    pub fn builder(
        declaring_type: impl Into<TypeRef>,
        method_name: impl Into<String>,
    ) -> EndpointDescriptorBuilder {
        EndpointDescriptorBuilder::new(declaring_type, method_name)
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// The class that defines the method.
    pub fn declaring_type(&self) -> &TypeRef {
        &self.declaring_type
    }

    /// The class through which the method was discovered. Equals the
    /// declaring type unless the method is inherited.
    pub fn exposing_type(&self) -> &TypeRef {
        self.exposing_type.as_ref().unwrap_or(&self.declaring_type)
    }

    /// The declaring type when the method is inherited by the exposing type.
    pub fn inherited_from(&self) -> Option<&TypeRef> {
        match &self.exposing_type {
            Some(exposing) if *exposing != self.declaring_type => Some(&self.declaring_type),
            _ => None,
        }
    }

    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    pub fn relative_url(&self) -> &str {
        &self.relative_url
    }

    /// Declared verbs; empty means unspecified.
    pub fn http_methods(&self) -> &BTreeSet<HttpMethod> {
        &self.http_methods
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[NamedParameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterBinding> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.binding)
    }

    pub fn tracking(&self) -> Option<&TrackingDeclaration> {
        self.tracking.as_ref()
    }

    /// Structural signature used to identify the method within its declaring
    /// type, e.g. `findCitizen(java.lang.Long,app.SearchDto)`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.binding.ty().name())
            .collect();
        format!("{}({})", self.method_name, types.join(","))
    }

    /// Human-readable signature, e.g.
    /// `CitizenDto findCitizen(@PathVariable Long id, @RequestBody SearchDto request)`.
    pub fn pretty_signature(&self) -> String {
        let return_type = self
            .return_type
            .as_ref()
            .map(|t| t.simple_name())
            .unwrap_or("void");
        let params: Vec<String> = self.parameters.iter().map(NamedParameter::display).collect();
        format!("{} {}({})", return_type, self.method_name, params.join(", "))
    }

    /// Display strings of the tracked values, in declaration order.
    pub fn tracked_value_strings(&self) -> Vec<String> {
        self.tracking
            .iter()
            .flat_map(|t| t.tracked_values().iter().map(ToString::to_string))
            .collect()
    }

    /// Display strings of the parameters, in declaration order.
    pub fn parameter_strings(&self) -> Vec<String> {
        self.parameters.iter().map(NamedParameter::display).collect()
    }

    /// `[GET, POST]` style rendering of the declared verbs.
    pub fn http_methods_string(&self) -> String {
        let verbs: Vec<&str> = self.http_methods.iter().map(|m| m.as_str()).collect();
        format!("[{}]", verbs.join(", "))
    }
}

/// Builder enforcing the construction contract of [`EndpointDescriptor`].
#[derive(Debug, Clone)]
pub struct EndpointDescriptorBuilder {
    method_name: String,
    declaring_type: TypeRef,
    exposing_type: Option<TypeRef>,
    return_type: Option<TypeRef>,
    base_url: String,
    url: String,
    http_methods: BTreeSet<HttpMethod>,
    parameters: Vec<NamedParameter>,
    tracking: Option<TrackingDeclaration>,
}

impl EndpointDescriptorBuilder {
    pub fn new(declaring_type: impl Into<TypeRef>, method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            declaring_type: declaring_type.into(),
            exposing_type: None,
            return_type: None,
            base_url: String::new(),
            url: String::new(),
            http_methods: BTreeSet::new(),
            parameters: Vec::new(),
            tracking: None,
        }
    }

    pub fn exposed_by(mut self, exposing_type: impl Into<TypeRef>) -> Self {
        self.exposing_type = Some(exposing_type.into());
        self
    }

    pub fn returns(mut self, return_type: impl Into<TypeRef>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Class-level (or module-level) URL prefix.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Method-level URL; joined to the base URL and normalized on build.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn http_method(mut self, method: HttpMethod) -> Self {
        self.http_methods.insert(method);
        self
    }

    pub fn http_methods(mut self, methods: impl IntoIterator<Item = HttpMethod>) -> Self {
        self.http_methods.extend(methods);
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, binding: ParameterBinding) -> Self {
        self.parameters.push(NamedParameter::new(name, binding));
        self
    }

    pub fn tracking(mut self, tracking: TrackingDeclaration) -> Self {
        self.tracking = Some(tracking);
        self
    }

    pub fn build(self) -> Result<EndpointDescriptor, ModelError> {
        if self.method_name.trim().is_empty() {
            return Err(ModelError::EmptyMethodName);
        }
        if self.declaring_type.is_empty() {
            return Err(ModelError::EmptyDeclaringType {
                method: self.method_name,
            });
        }
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, param) in self.parameters.iter().enumerate() {
            if param.name.trim().is_empty() {
                return Err(ModelError::EmptyParameterName {
                    method: self.method_name.clone(),
                    index,
                });
            }
            if !seen.insert(param.name.as_str()) {
                return Err(ModelError::DuplicateParameter {
                    method: self.method_name.clone(),
                    name: param.name.clone(),
                });
            }
        }

        let relative_url = normalize_url(&format!("{}/{}", self.base_url, self.url));
        Ok(EndpointDescriptor {
            method_name: self.method_name,
            declaring_type: self.declaring_type,
            exposing_type: self.exposing_type,
            return_type: self.return_type,
            relative_url,
            http_methods: self.http_methods,
            parameters: self.parameters,
            tracking: self.tracking,
        })
    }
}

/// Collapse runs of `/` and double every brace, so `/a//{id}` becomes
/// `/a/{{id}}` as downstream request tools expect.
pub fn normalize_url(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_slash = false;
    for c in raw.chars() {
        match c {
            '/' if prev_slash => continue,
            '/' => {
                prev_slash = true;
                out.push('/');
            }
            '{' => {
                prev_slash = false;
                out.push_str("{{");
            }
            '}' => {
                prev_slash = false;
                out.push_str("}}");
            }
            _ => {
                prev_slash = false;
                out.push(c);
            }
        }
    }
    out
}
