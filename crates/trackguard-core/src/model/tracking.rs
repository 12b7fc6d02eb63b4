//! Tracking declarations and tracked values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::TrackingAction;
use super::type_ref::TypeRef;
use crate::errors::ModelError;
use crate::types::FxHashMap;

/// One declared audit datum: a dotted path whose first segment names a
/// parameter, plus the type the author asserts the resolved value has.
///
/// Two values are duplicates iff both `expression` and `declared_type` match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTrackedValue")]
pub struct TrackedValue {
    expression: String,
    #[serde(rename = "type")]
    declared_type: TypeRef,
}

impl TrackedValue {
    pub fn new(
        expression: impl Into<String>,
        declared_type: impl Into<TypeRef>,
    ) -> Result<Self, ModelError> {
        let expression = expression.into();
        let declared_type = declared_type.into();
        if expression.trim().is_empty() {
            return Err(ModelError::EmptyExpression);
        }
        if declared_type.is_empty() {
            return Err(ModelError::EmptyDeclaredType { expression });
        }
        Ok(Self {
            expression,
            declared_type,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn declared_type(&self) -> &TypeRef {
        &self.declared_type
    }
}

#[derive(Deserialize)]
struct RawTrackedValue {
    expression: String,
    #[serde(rename = "type")]
    declared_type: TypeRef,
}

impl TryFrom<RawTrackedValue> for TrackedValue {
    type Error = ModelError;

    fn try_from(raw: RawTrackedValue) -> Result<Self, Self::Error> {
        Self::new(raw.expression, raw.declared_type)
    }
}

impl fmt::Display for TrackedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@UserTrackParameter(expression = \"{}\", type = {}.class)",
            self.expression,
            self.declared_type.simple_name()
        )
    }
}

/// The policy attached to an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingDeclaration {
    action: TrackingAction,
    #[serde(default)]
    tracked_values: Vec<TrackedValue>,
}

impl TrackingDeclaration {
    /// An `IGNORE` declaration with values is representable on purpose: the
    /// verifier reports it instead of the model rejecting it.
    pub fn new(action: TrackingAction, tracked_values: Vec<TrackedValue>) -> Self {
        Self {
            action,
            tracked_values,
        }
    }

    pub fn action(&self) -> TrackingAction {
        self.action
    }

    pub fn tracked_values(&self) -> &[TrackedValue] {
        &self.tracked_values
    }

    pub fn is_ignoring(&self) -> bool {
        self.action.is_ignore()
    }

    pub fn has_tracked_values(&self) -> bool {
        !self.tracked_values.is_empty()
    }

    /// Values declared more than once, each listed once, in order of first
    /// declaration.
    pub fn duplicates(&self) -> Vec<&TrackedValue> {
        let mut seen: FxHashMap<&TrackedValue, usize> = FxHashMap::default();
        for value in &self.tracked_values {
            *seen.entry(value).or_insert(0) += 1;
        }
        let mut out: Vec<&TrackedValue> = Vec::new();
        for value in &self.tracked_values {
            if seen.get(value).copied().unwrap_or(0) > 1 && !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }
}

impl fmt::Display for TrackingDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@UserTracking(action = {}, parameters = {{", self.action)?;
        for (i, value) in self.tracked_values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "\n\t{value}")?;
        }
        if !self.tracked_values.is_empty() {
            f.write_str("\n")?;
        }
        f.write_str("})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(expr: &str, ty: &str) -> TrackedValue {
        TrackedValue::new(expr, ty).unwrap()
    }

    #[test]
    fn empty_expression_is_rejected() {
        assert_eq!(TrackedValue::new("  ", "Citizen"), Err(ModelError::EmptyExpression));
    }

    #[test]
    fn triplicate_is_listed_once() {
        let decl = TrackingDeclaration::new(
            TrackingAction::Show,
            vec![
                value("citizen.id", "Citizen"),
                value("citizen.id", "Citizen"),
                value("citizen.id", "Citizen"),
                value("case.id", "Case"),
            ],
        );
        let dups = decl.duplicates();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].expression(), "citizen.id");
    }

    #[test]
    fn same_expression_different_type_is_not_duplicate() {
        let decl = TrackingDeclaration::new(
            TrackingAction::Show,
            vec![value("citizen.id", "Citizen"), value("citizen.id", "Person")],
        );
        assert!(decl.duplicates().is_empty());
    }
}
