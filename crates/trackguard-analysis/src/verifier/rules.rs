//! Individual policy rules.

use trackguard_core::config::{EntityDetection, VerifierConfig};
use trackguard_core::diagnostics::{DiagnosticCollector, ErrorKind, WarningKind};
use trackguard_core::model::{
    EndpointDescriptor, HttpMethod, TrackedValue, TrackingDeclaration, TypeMarker, TypeModel,
};

use super::expression::{match_parameter, validate_path, PathError};

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub endpoint: &'a EndpointDescriptor,
    pub tracking: &'a TrackingDeclaration,
    pub model: &'a dyn TypeModel,
    pub config: &'a VerifierConfig,
}

/// `IGNORE` must not declare tracked values.
pub fn check_ignored(ctx: &RuleContext<'_>, out: &mut DiagnosticCollector) {
    if ctx.tracking.has_tracked_values() {
        out.record_error(
            ErrorKind::RedundantDeclarations,
            "Tracking with 'IGNORE' action should not declare tracked values",
        );
    }
}

/// The declared verbs must include the verb the action implies, unless no
/// verb is declared at all.
pub fn check_action_http(ctx: &RuleContext<'_>, out: &mut DiagnosticCollector) {
    let methods = ctx.endpoint.http_methods();
    if methods.is_empty() {
        return;
    }
    let action = ctx.tracking.action();
    let implied = action.implied_http_method().unwrap_or(HttpMethod::Get);
    if !methods.contains(&implied) {
        out.record_warning(
            WarningKind::ActionHttpMismatch,
            format!(
                "Probably tracking has incorrect action: {action}, HTTP methods: {}",
                ctx.endpoint.http_methods_string()
            ),
        );
    }
}

/// More tracked values than the threshold are probably over-specified.
pub fn check_redundancy(ctx: &RuleContext<'_>, out: &mut DiagnosticCollector) {
    let count = ctx.tracking.tracked_values().len();
    let threshold = ctx.config.effective_redundancy_threshold();
    if count > threshold {
        out.record_warning(
            WarningKind::LikelyRedundant,
            format!("Seems not all of the {count} tracked values are required"),
        );
    }
}

/// An endpoint without tracked values must not have bound parameters that
/// could have been tracked.
pub fn check_necessity(ctx: &RuleContext<'_>, out: &mut DiagnosticCollector) {
    if ctx.tracking.has_tracked_values() {
        return;
    }
    let skip_plural = ctx.config.effective_necessity_skip_plural();
    let candidates: Vec<&str> = ctx
        .endpoint
        .parameters()
        .iter()
        .filter(|p| p.binding.is_bound())
        .filter(|p| !(skip_plural && p.binding.is_plural()))
        .map(|p| p.name.as_str())
        .collect();

    if !candidates.is_empty() {
        out.record(
            ctx.config.effective_necessity_severity().kind(),
            format!(
                "At least 1 tracked value is required because the method has bound parameters:\n[{}]",
                candidates.join(", ")
            ),
        );
    }
}

/// Tracked values equal on expression and type are reported once per value.
pub fn check_duplicates(ctx: &RuleContext<'_>, out: &mut DiagnosticCollector) {
    let duplicates = ctx.tracking.duplicates();
    if duplicates.is_empty() {
        return;
    }
    let listed: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
    out.record_error(
        ErrorKind::DuplicatedValue,
        format!(
            "The following tracked values are duplicated:\n[{}]",
            listed.join(", ")
        ),
    );
}

/// Expression resolution, type marker check and path walk for one value.
pub fn check_tracked_value(
    ctx: &RuleContext<'_>,
    value: &TrackedValue,
    out: &mut DiagnosticCollector,
) {
    let Some(parameter) = match_parameter(ctx.endpoint, value.expression()) else {
        out.record_error(
            ErrorKind::IncorrectExpression,
            PathError::NoParameter {
                expression: value.expression().to_string(),
            }
            .to_string(),
        );
        return;
    };

    if !is_trackable_type(ctx, value) {
        let expected = match ctx.config.effective_entity_detection() {
            EntityDetection::MarkerOrIdentifiable => "an entity or identifiable",
            EntityDetection::MarkerOnly => "an entity",
        };
        out.record_error(
            ErrorKind::IncorrectType,
            format!("Incorrect type for {value} - should be {expected}"),
        );
    }

    if let Err(e) = validate_path(ctx.model, parameter, value.expression()) {
        out.record_error(ErrorKind::IncorrectExpression, e.to_string());
    }
}

fn is_trackable_type(ctx: &RuleContext<'_>, value: &TrackedValue) -> bool {
    let ty = value.declared_type();
    if ctx.model.has_marker(ty, TypeMarker::Entity) {
        return true;
    }
    match ctx.config.effective_entity_detection() {
        EntityDetection::MarkerOrIdentifiable => ctx.model.has_marker(ty, TypeMarker::Identifiable),
        EntityDetection::MarkerOnly => false,
    }
}
