//! Resolution of dotted tracked-value expressions against parameters and the
//! type model's field graph.

use trackguard_core::model::{EndpointDescriptor, NamedParameter, TypeModel};

/// Why an expression does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("No parameter found for tracked expression = {expression}")]
    NoParameter { expression: String },

    #[error("Incorrect expression: {expression} does not match method parameter name: {parameter}")]
    ScalarMismatch {
        expression: String,
        parameter: String,
    },

    #[error("Incorrect expression {expression}: type {owner} has no field: {field}")]
    MissingField {
        expression: String,
        owner: String,
        field: String,
    },
}

/// First parameter, in declaration order, whose name prefixes `expression`.
pub fn match_parameter<'e>(
    endpoint: &'e EndpointDescriptor,
    expression: &str,
) -> Option<&'e NamedParameter> {
    endpoint
        .parameters()
        .iter()
        .find(|p| expression.starts_with(p.name.as_str()))
}

/// Validate `expression` against the matched `parameter`.
///
/// A scalar parameter must be referenced by its exact name. Any other
/// parameter is walked field by field from the second segment on; the walk
/// stops at the first missing field.
pub fn validate_path(
    model: &dyn TypeModel,
    parameter: &NamedParameter,
    expression: &str,
) -> Result<(), PathError> {
    let param_type = parameter.binding.ty();
    if model.is_scalar(param_type) {
        if expression != parameter.name {
            return Err(PathError::ScalarMismatch {
                expression: expression.to_string(),
                parameter: parameter.name.clone(),
            });
        }
        return Ok(());
    }

    let mut current = param_type.clone();
    for segment in expression.split('.').skip(1) {
        match model.field_type(&current, segment) {
            Some(next) => current = next,
            None => {
                return Err(PathError::MissingField {
                    expression: expression.to_string(),
                    owner: current.simple_name().to_string(),
                    field: segment.to_string(),
                })
            }
        }
    }
    Ok(())
}

