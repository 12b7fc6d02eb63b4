//! Core types for trackguard: the endpoint metadata model, the type-model
//! capability, diagnostics, errors, configuration, events and tracing setup.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod events;
pub mod model;
pub mod tracing;
pub mod types;

pub use config::TrackguardConfig;
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind, ErrorKind, WarningKind};
pub use model::{
    BindingKind, EndpointDescriptor, HttpMethod, NamedParameter, ParameterBinding, TrackedValue,
    TrackingAction, TrackingDeclaration, TypeCatalog, TypeModel, TypeRef,
};
