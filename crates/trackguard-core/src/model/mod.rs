//! Endpoint metadata model.
//!
//! Immutable value types describing one discovered endpoint, its tracking
//! declaration and its bound parameters, plus the [`TypeModel`] capability the
//! verifier uses to inspect declared types.

pub mod action;
pub mod binding;
pub mod catalog;
pub mod endpoint;
pub mod http;
pub mod tracking;
pub mod type_model;
pub mod type_ref;

pub use action::TrackingAction;
pub use binding::{BindingKind, NamedParameter, ParameterBinding};
pub use catalog::{TypeCatalog, TypeDef};
pub use endpoint::{normalize_url, EndpointDescriptor, EndpointDescriptorBuilder};
pub use http::HttpMethod;
pub use tracking::{TrackedValue, TrackingDeclaration};
pub use type_model::{is_builtin_scalar, FieldDef, TypeMarker, TypeModel};
pub use type_ref::TypeRef;
