//! Tests for the module aggregator.

use trackguard_analysis::aggregator::module_summary::RecordOutcome;
use trackguard_analysis::aggregator::tables::ENDPOINT_HEADERS;
use trackguard_analysis::{MethodKey, ModuleSummary};
use trackguard_core::diagnostics::{DiagnosticCollector, ErrorKind, WarningKind};
use trackguard_core::model::*;

fn catalog(citizen_table: &str) -> TypeCatalog {
    TypeCatalog::new()
        .with(TypeDef::new("app.domain.Citizen").entity().table(citizen_table))
        .with(TypeDef::new("app.domain.Case").entity())
        .with(TypeDef::new("app.domain.Reference").identifiable())
}

fn show(declaring: &str, exposing: &str, values: &[(&str, &str)]) -> EndpointDescriptor {
    let values = values
        .iter()
        .map(|(e, t)| TrackedValue::new(*e, *t).unwrap())
        .collect();
    EndpointDescriptor::builder(declaring, "show")
        .exposed_by(exposing)
        .base_url("citizen")
        .url("{id}")
        .http_method(HttpMethod::Get)
        .parameter(
            "id",
            ParameterBinding::new("java.lang.Long").with_binding(BindingKind::PathVariable),
        )
        .tracking(TrackingDeclaration::new(TrackingAction::Show, values))
        .build()
        .unwrap()
}

fn errors_only() -> DiagnosticCollector {
    let mut c = DiagnosticCollector::new();
    c.record_error(ErrorKind::IncorrectType, "bad type");
    c
}

fn warnings_only() -> DiagnosticCollector {
    let mut c = DiagnosticCollector::new();
    c.record_warning(WarningKind::LikelyRedundant, "too many");
    c
}

#[test]
fn test_record_diagnostics_is_idempotent() {
    let endpoint = show("app.web.CitizenController", "app.web.CitizenController", &[]);
    let mut both = errors_only();
    both.record_warning(WarningKind::ActionHttpMismatch, "verb");

    let mut summary = ModuleSummary::new("citizen");
    let first = summary.record_diagnostics(&endpoint, &both);
    assert_eq!(
        first,
        RecordOutcome {
            errors_recorded: true,
            warnings_recorded: true
        }
    );
    let errors = summary.error_table();
    let warnings = summary.warning_table();

    let second = summary.record_diagnostics(&endpoint, &both);
    assert_eq!(second, RecordOutcome::default());
    assert_eq!(summary.error_table(), errors);
    assert_eq!(summary.warning_table(), warnings);
}

#[test]
fn test_empty_side_does_not_consume_key() {
    let endpoint = show("app.web.CitizenController", "app.web.CitizenController", &[]);
    let mut summary = ModuleSummary::new("citizen");

    let outcome = summary.record_diagnostics(&endpoint, &warnings_only());
    assert!(outcome.warnings_recorded);
    assert!(!outcome.errors_recorded);
    assert_eq!(summary.error_keys().count(), 0);

    let outcome = summary.record_diagnostics(&endpoint, &errors_only());
    assert!(outcome.errors_recorded);
    assert_eq!(summary.error_keys().count(), 1);

    let outcome = summary.record_diagnostics(&endpoint, &warnings_only());
    assert!(!outcome.warnings_recorded);
    assert_eq!(summary.warning_keys().count(), 1);
}

#[test]
fn test_inherited_method_is_keyed_by_declaring_type() {
    let via_citizen = show("app.web.BaseController", "app.web.CitizenController", &[]);
    let via_case = show("app.web.BaseController", "app.web.CaseController", &[]);
    assert_eq!(MethodKey::of(&via_citizen), MethodKey::of(&via_case));
    assert_eq!(
        MethodKey::of(&via_citizen).to_string(),
        "app.web.BaseController#show(java.lang.Long)"
    );

    let mut summary = ModuleSummary::new("citizen");
    assert!(summary.record_diagnostics(&via_citizen, &errors_only()).errors_recorded);
    assert!(!summary.record_diagnostics(&via_case, &errors_only()).errors_recorded);

    let table = summary.error_table();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.cell(0, "Declaring type"), Some("app.web.BaseController"));
    assert_eq!(table.cell(0, "Signature"), Some("show(java.lang.Long)"));
    assert_eq!(table.cell(0, "INCORRECT_TYPE"), Some("\nbad type"));
    assert_eq!(table.cell(0, "DUPLICATED_VALUE"), Some(""));
}

#[test]
fn test_clean_collector_records_nothing() {
    let endpoint = show("app.web.CitizenController", "app.web.CitizenController", &[]);
    let mut summary = ModuleSummary::new("citizen");
    let outcome = summary.record_diagnostics(&endpoint, &DiagnosticCollector::new());
    assert_eq!(outcome, RecordOutcome::default());
    assert!(summary.error_table().is_empty());
    assert!(summary.warning_table().is_empty());
}

#[test]
fn test_first_entity_occurrence_wins() {
    let endpoint = show(
        "app.web.CitizenController",
        "app.web.CitizenController",
        &[("id", "app.domain.Citizen")],
    );
    let mut summary = ModuleSummary::new("citizen");
    summary.merge_tracked_entities(&endpoint, &catalog("CITIZEN"));
    summary.merge_tracked_entities(&endpoint, &catalog("CITIZENS"));

    let entities: Vec<(String, String)> = summary
        .tracked_entities()
        .map(|(t, n)| (t.to_string(), n.to_string()))
        .collect();
    assert_eq!(
        entities,
        vec![("app.domain.Citizen".to_string(), "CITIZEN".to_string())]
    );
}

#[test]
fn test_only_entity_marked_types_are_merged() {
    let endpoint = show(
        "app.web.CitizenController",
        "app.web.CitizenController",
        &[
            ("id", "app.domain.Reference"),
            ("id", "app.domain.Case"),
            ("id", "app.dto.Unknown"),
        ],
    );
    let mut summary = ModuleSummary::new("citizen");
    summary.merge_tracked_entities(&endpoint, &catalog("CITIZEN"));

    let table = summary.entity_table();
    assert_eq!(table.headers, vec!["Entity type", "Table name"]);
    assert_eq!(
        table.rows,
        vec![vec!["app.domain.Case".to_string(), "Case".to_string()]]
    );
}

#[test]
fn test_parameter_usage_and_table() {
    let first = EndpointDescriptor::builder("app.web.CitizenController", "find")
        .parameter(
            "id",
            ParameterBinding::new("java.lang.Long").with_binding(BindingKind::PathVariable),
        )
        .parameter(
            "caseId",
            ParameterBinding::new("java.lang.Long").with_binding(BindingKind::PathVariable),
        )
        .parameter(
            "page",
            ParameterBinding::new("java.lang.Long").with_binding(BindingKind::RequestParam),
        )
        .parameter("model", ParameterBinding::new("app.ui.Model"))
        .build()
        .unwrap();
    let second = EndpointDescriptor::builder("app.web.CitizenController", "save")
        .parameter(
            "id",
            ParameterBinding::new("java.lang.Long").with_binding(BindingKind::PathVariable),
        )
        .parameter(
            "form",
            ParameterBinding::new("app.dto.CitizenForm")
                .with_binding(BindingKind::ModelAttribute)
                .with_binding(BindingKind::RequestBody),
        )
        .build()
        .unwrap();

    let mut summary = ModuleSummary::new("citizen");
    summary.merge_parameter_usage(&first);
    summary.merge_parameter_usage(&second);

    let path_vars: Vec<&str> = summary.parameter_usage(BindingKind::PathVariable).collect();
    assert_eq!(path_vars, vec!["Long caseId", "Long id"]);
    assert_eq!(
        summary.parameter_usage(BindingKind::RequestBody).collect::<Vec<_>>(),
        vec!["CitizenForm form"]
    );

    let table = summary.parameter_table();
    assert_eq!(
        table.headers,
        vec!["Type", "PathVariable", "RequestParam", "RequestBody", "ModelAttribute"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, "Type"), Some("CitizenForm"));
    assert_eq!(table.cell(0, "RequestBody"), Some("form"));
    assert_eq!(table.cell(0, "ModelAttribute"), Some("form"));
    assert_eq!(table.cell(1, "Type"), Some("Long"));
    assert_eq!(table.cell(1, "PathVariable"), Some("caseId, id"));
    assert_eq!(table.cell(1, "RequestParam"), Some("page"));
    assert_eq!(table.cell(1, "RequestBody"), Some(""));
}

#[test]
fn test_generic_parameter_types_use_raw_simple_name() {
    let endpoint = EndpointDescriptor::builder("app.web.CitizenController", "list")
        .parameter(
            "ids",
            ParameterBinding::new("java.util.List<java.lang.Long>")
                .with_binding(BindingKind::RequestParam)
                .plural(),
        )
        .build()
        .unwrap();

    let mut summary = ModuleSummary::new("citizen");
    summary.merge_parameter_usage(&endpoint);

    assert_eq!(
        summary.parameter_usage(BindingKind::RequestParam).collect::<Vec<_>>(),
        vec!["List ids"]
    );
    let table = summary.parameter_table();
    assert_eq!(table.cell(0, "Type"), Some("List"));
    assert_eq!(table.cell(0, "RequestParam"), Some("ids"));
}

#[test]
fn test_endpoint_table_rows() {
    let inherited = show(
        "app.web.BaseController",
        "app.web.CitizenController",
        &[("id", "app.domain.Citizen")],
    );
    let mut summary = ModuleSummary::new("citizen");
    summary.record_endpoint(&inherited);

    let table = summary.endpoint_table();
    assert_eq!(table.headers, ENDPOINT_HEADERS.to_vec());
    assert_eq!(table.cell(0, "Method name"), Some("show"));
    assert_eq!(table.cell(0, "Relative path"), Some("citizen/{{id}}"));
    assert_eq!(table.cell(0, "Action"), Some("SHOW"));
    assert_eq!(table.cell(0, "HTTP method(s)"), Some("[GET]"));
    assert_eq!(table.cell(0, "Method parameters"), Some("@PathVariable Long id"));
    assert_eq!(table.cell(0, "Inherited from"), Some("app.web.BaseController"));
    assert_eq!(summary.endpoints()[0].exposing_type, "CitizenController");
}

#[test]
fn test_diagnostic_table_headers_follow_kind_order() {
    let summary = ModuleSummary::new("citizen");
    let errors = summary.error_table();
    assert_eq!(&errors.headers[..2], ["Declaring type", "Signature"]);
    let kinds: Vec<&str> = ErrorKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(&errors.headers[2..], kinds.as_slice());

    let warnings = summary.warning_table();
    assert_eq!(
        &warnings.headers[2..],
        ["ACTION_HTTP_MISMATCH", "LIKELY_REDUNDANT", "MISSING_TRACKED_VALUE"]
    );
    assert_eq!(summary.tables().len(), 5);
    assert_eq!(summary.module_name(), "citizen");
}

mod ordering {
    use proptest::prelude::*;

    use super::*;

    fn method(i: usize) -> EndpointDescriptor {
        EndpointDescriptor::builder("app.web.CitizenController", format!("m{i}"))
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn keys_are_recorded_in_first_occurrence_order(
            arrivals in prop::collection::vec((0usize..6, any::<bool>(), any::<bool>()), 0..40)
        ) {
            let mut summary = ModuleSummary::new("citizen");
            let mut expected_errors: Vec<String> = Vec::new();
            let mut expected_warnings: Vec<String> = Vec::new();

            for (i, errors, warnings) in &arrivals {
                let endpoint = method(*i);
                let mut collector = DiagnosticCollector::new();
                if *errors {
                    collector.record_error(ErrorKind::IncorrectType, "e");
                    let sig = endpoint.signature();
                    if !expected_errors.contains(&sig) {
                        expected_errors.push(sig);
                    }
                }
                if *warnings {
                    collector.record_warning(WarningKind::LikelyRedundant, "w");
                    let sig = endpoint.signature();
                    if !expected_warnings.contains(&sig) {
                        expected_warnings.push(sig);
                    }
                }
                summary.record_diagnostics(&endpoint, &collector);
            }

            let errors: Vec<String> = summary.error_keys().map(|k| k.signature.clone()).collect();
            let warnings: Vec<String> = summary.warning_keys().map(|k| k.signature.clone()).collect();
            prop_assert_eq!(errors, expected_errors);
            prop_assert_eq!(warnings, expected_warnings);
        }
    }
}
