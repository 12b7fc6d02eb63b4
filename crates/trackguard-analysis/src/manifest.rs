//! JSON endpoint manifest: the hand-off format from a discovery tool.
//!
//! A manifest carries the module's type definitions and its endpoints with
//! parameter names already resolved. Entries that cannot be turned into an
//! [`EndpointDescriptor`] become per-endpoint [`DiscoveryError`]s; the rest of
//! the manifest is unaffected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trackguard_core::errors::{DiscoveryError, ModelError};
use trackguard_core::model::{
    BindingKind, EndpointDescriptor, HttpMethod, ParameterBinding, TrackedValue, TrackingAction,
    TrackingDeclaration, TypeCatalog, TypeDef,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointManifest {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub endpoints: Vec<EndpointEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointEntry {
    pub declaring_type: String,
    #[serde(default)]
    pub exposing_type: Option<String>,
    pub method: String,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub http_methods: Vec<String>,
    /// `None` when the discovery tool could not resolve the names.
    #[serde(default)]
    pub parameter_names: Option<Vec<String>>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default)]
    pub tracking: Option<TrackingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub bindings: Vec<String>,
    #[serde(default)]
    pub plural: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEntry {
    pub action: String,
    #[serde(default)]
    pub values: Vec<TrackedValueEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedValueEntry {
    pub expression: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl EndpointManifest {
    pub fn from_json(json: &str) -> Result<Self, DiscoveryError> {
        serde_json::from_str(json).map_err(|e| DiscoveryError::ManifestParse {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, DiscoveryError> {
        let content = std::fs::read_to_string(path).map_err(|e| DiscoveryError::ManifestRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let manifest = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            types = manifest.types.len(),
            endpoints = manifest.endpoints.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    /// Split into the type catalog and the endpoint stream, in entry order.
    pub fn into_parts(
        self,
    ) -> (
        TypeCatalog,
        Vec<Result<EndpointDescriptor, DiscoveryError>>,
    ) {
        let catalog: TypeCatalog = self.types.into_iter().collect();
        let endpoints = self
            .endpoints
            .into_iter()
            .map(EndpointEntry::into_descriptor)
            .collect();
        (catalog, endpoints)
    }
}

impl EndpointEntry {
    pub fn into_descriptor(self) -> Result<EndpointDescriptor, DiscoveryError> {
        let Some(names) = self.parameter_names.as_ref() else {
            return Err(DiscoveryError::UnresolvedParameterNames {
                declaring_type: self.declaring_type,
                method: self.method,
            });
        };
        if names.len() != self.parameters.len() {
            return Err(DiscoveryError::ParameterCountMismatch {
                declaring_type: self.declaring_type.clone(),
                method: self.method.clone(),
                names: names.len(),
                types: self.parameters.len(),
            });
        }

        self.build().map_err(|source| DiscoveryError::InvalidEndpoint {
            declaring_type: self.declaring_type.clone(),
            method: self.method.clone(),
            source,
        })
    }

    fn build(&self) -> Result<EndpointDescriptor, ModelError> {
        let mut builder = EndpointDescriptor::builder(self.declaring_type.as_str(), &self.method)
            .base_url(&self.base_url)
            .url(&self.url);

        if let Some(exposing) = &self.exposing_type {
            builder = builder.exposed_by(exposing.as_str());
        }
        if let Some(ret) = &self.return_type {
            builder = builder.returns(ret.as_str());
        }
        for verb in &self.http_methods {
            builder = builder.http_method(verb.parse::<HttpMethod>()?);
        }

        let names = self.parameter_names.iter().flatten();
        for (name, param) in names.zip(&self.parameters) {
            let mut binding = ParameterBinding::new(param.ty.as_str());
            for kind in &param.bindings {
                binding = binding.with_binding(kind.parse::<BindingKind>()?);
            }
            if param.plural {
                binding = binding.plural();
            }
            builder = builder.parameter(name, binding);
        }

        if let Some(tracking) = &self.tracking {
            let action: TrackingAction = tracking.action.parse()?;
            let values = tracking
                .values
                .iter()
                .map(|v| TrackedValue::new(&v.expression, v.ty.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.tracking(TrackingDeclaration::new(action, values));
        }

        builder.build()
    }
}
