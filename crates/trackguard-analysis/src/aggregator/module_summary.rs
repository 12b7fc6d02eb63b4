//! Cross-endpoint module state.

use std::collections::{BTreeMap, BTreeSet};

use trackguard_core::diagnostics::{DiagnosticCollector, ErrorKind, WarningKind};
use trackguard_core::model::{BindingKind, EndpointDescriptor, TypeMarker, TypeModel, TypeRef};
use trackguard_core::types::FxHashSet;

use super::key::MethodKey;
use super::tables::{EndpointRow, Table, ENDPOINT_HEADERS};

/// What `record_diagnostics` did with one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordOutcome {
    pub errors_recorded: bool,
    pub warnings_recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DiagnosticRow {
    key: MethodKey,
    cells: Vec<String>,
}

/// Module-level view over many verified endpoints.
///
/// Mutated by a single owner in processing order. Processing order is
/// observable: the first occurrence of an entity type or method key wins.
#[derive(Debug, Clone, Default)]
pub struct ModuleSummary {
    module_name: String,
    endpoints: Vec<EndpointRow>,
    entities: BTreeMap<TypeRef, String>,
    parameter_usage: BTreeMap<BindingKind, BTreeSet<String>>,
    error_keys: FxHashSet<MethodKey>,
    warning_keys: FxHashSet<MethodKey>,
    error_rows: Vec<DiagnosticRow>,
    warning_rows: Vec<DiagnosticRow>,
}

impl ModuleSummary {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Self::default()
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Add the endpoint's identity row to the endpoints table.
    pub fn record_endpoint(&mut self, endpoint: &EndpointDescriptor) {
        self.endpoints.push(EndpointRow::from_endpoint(endpoint));
    }

    /// Add every tracked entity type of `endpoint` not seen before, with its
    /// table name. Later occurrences of a type are ignored.
    pub fn merge_tracked_entities(&mut self, endpoint: &EndpointDescriptor, model: &dyn TypeModel) {
        let Some(tracking) = endpoint.tracking() else {
            return;
        };
        for value in tracking.tracked_values() {
            let ty = value.declared_type();
            if self.entities.contains_key(ty) || !model.has_marker(ty, TypeMarker::Entity) {
                continue;
            }
            self.entities.insert(ty.clone(), model.table_name(ty));
        }
    }

    /// Record `"<TypeSimpleName> <paramName>"` under each binding kind a
    /// parameter carries.
    pub fn merge_parameter_usage(&mut self, endpoint: &EndpointDescriptor) {
        for param in endpoint.parameters() {
            for &kind in param.binding.binding_kinds() {
                self.parameter_usage
                    .entry(kind)
                    .or_default()
                    .insert(format!("{} {}", param.binding.ty().simple_name(), param.name));
            }
        }
    }

    /// Record the endpoint's diagnostics once per declaring type and
    /// signature. Errors and warnings are deduplicated independently, and an
    /// empty side leaves its key unclaimed.
    pub fn record_diagnostics(
        &mut self,
        endpoint: &EndpointDescriptor,
        collector: &DiagnosticCollector,
    ) -> RecordOutcome {
        let key = MethodKey::of(endpoint);
        let mut outcome = RecordOutcome::default();

        if collector.has_errors() && self.error_keys.insert(key.clone()) {
            let cells = ErrorKind::ALL
                .iter()
                .map(|&k| collector.error_text(k).unwrap_or_default().to_string())
                .collect();
            self.error_rows.push(DiagnosticRow {
                key: key.clone(),
                cells,
            });
            outcome.errors_recorded = true;
        }

        if collector.has_warnings() && self.warning_keys.insert(key.clone()) {
            let cells = WarningKind::ALL
                .iter()
                .map(|&k| collector.warning_text(k).unwrap_or_default().to_string())
                .collect();
            self.warning_rows.push(DiagnosticRow { key, cells });
            outcome.warnings_recorded = true;
        }

        if !outcome.errors_recorded && !outcome.warnings_recorded && !collector.is_empty() {
            tracing::trace!(
                module = %self.module_name,
                endpoint = %MethodKey::of(endpoint),
                "diagnostics already recorded for declaring type"
            );
        }
        outcome
    }

    /// Tracked entity types with their table names, ordered by type name.
    pub fn tracked_entities(&self) -> impl Iterator<Item = (&TypeRef, &str)> {
        self.entities.iter().map(|(t, n)| (t, n.as_str()))
    }

    /// `"<Type> <name>"` entries recorded for `kind`, sorted.
    pub fn parameter_usage(&self, kind: BindingKind) -> impl Iterator<Item = &str> {
        self.parameter_usage
            .get(&kind)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Keys that produced an error row, in recording order.
    pub fn error_keys(&self) -> impl Iterator<Item = &MethodKey> {
        self.error_rows.iter().map(|r| &r.key)
    }

    /// Keys that produced a warning row, in recording order.
    pub fn warning_keys(&self) -> impl Iterator<Item = &MethodKey> {
        self.warning_rows.iter().map(|r| &r.key)
    }

    pub fn endpoints(&self) -> &[EndpointRow] {
        &self.endpoints
    }

    /// `(Entity type, Table name)`.
    pub fn entity_table(&self) -> Table {
        let mut table = Table::new("Entities", ["Entity type", "Table name"]);
        for (ty, name) in &self.entities {
            table.push_row(vec![ty.to_string(), name.clone()]);
        }
        table
    }

    /// `(Type, one column per binding kind)`; one row per parameter type
    /// simple name, cells list the parameter names sorted and comma-joined.
    pub fn parameter_table(&self) -> Table {
        let headers = std::iter::once("Type")
            .chain(BindingKind::ALL.iter().map(|k| k.annotation_name()));
        let mut table = Table::new("Parameters", headers);

        let mut by_type: BTreeMap<&str, [BTreeSet<&str>; BindingKind::ALL.len()]> =
            BTreeMap::new();
        for (col, kind) in BindingKind::ALL.iter().enumerate() {
            for entry in self.parameter_usage(*kind) {
                let (ty, name) = entry.split_once(' ').unwrap_or((entry, ""));
                by_type.entry(ty).or_default()[col].insert(name);
            }
        }

        for (ty, columns) in by_type {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(ty.to_string());
            for names in columns {
                row.push(names.into_iter().collect::<Vec<_>>().join(", "));
            }
            table.push_row(row);
        }
        table
    }

    /// `(Declaring type, Signature, one column per error kind)`.
    pub fn error_table(&self) -> Table {
        let headers = ["Declaring type", "Signature"]
            .into_iter()
            .chain(ErrorKind::ALL.iter().map(|k| k.as_str()));
        Self::diagnostic_table("Errors", headers, &self.error_rows)
    }

    /// `(Declaring type, Signature, one column per warning kind)`.
    pub fn warning_table(&self) -> Table {
        let headers = ["Declaring type", "Signature"]
            .into_iter()
            .chain(WarningKind::ALL.iter().map(|k| k.as_str()));
        Self::diagnostic_table("Warnings", headers, &self.warning_rows)
    }

    /// One row per verified endpoint, in processing order.
    pub fn endpoint_table(&self) -> Table {
        let mut table = Table::new("Endpoints", ENDPOINT_HEADERS);
        for row in &self.endpoints {
            table.push_row(row.cells());
        }
        table
    }

    /// All tables in export order.
    pub fn tables(&self) -> Vec<Table> {
        vec![
            self.endpoint_table(),
            self.error_table(),
            self.warning_table(),
            self.entity_table(),
            self.parameter_table(),
        ]
    }

    fn diagnostic_table<'h>(
        name: &str,
        headers: impl IntoIterator<Item = &'h str>,
        rows: &[DiagnosticRow],
    ) -> Table {
        let mut table = Table::new(name, headers);
        for row in rows {
            let mut cells = Vec::with_capacity(row.cells.len() + 2);
            cells.push(row.key.declaring_type.to_string());
            cells.push(row.key.signature.clone());
            cells.extend(row.cells.iter().cloned());
            table.push_row(cells);
        }
        table
    }
}
