//! Read-only tabular views handed to reporting collaborators.

use serde::Serialize;
use trackguard_core::model::EndpointDescriptor;

/// A named table with fixed column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(name: impl Into<String>, headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row width must match headers");
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of `header`.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell by row index and header name.
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column(header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

pub const ENDPOINT_HEADERS: [&str; 7] = [
    "Method name",
    "Relative path",
    "Action",
    "HTTP method(s)",
    "Tracked values",
    "Method parameters",
    "Inherited from",
];

/// Identity and display fields of one verified endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointRow {
    pub exposing_type: String,
    pub method_name: String,
    pub relative_url: String,
    pub action: String,
    pub http_methods: String,
    pub tracked_values: Vec<String>,
    pub parameters: Vec<String>,
    pub inherited_from: Option<String>,
}

impl EndpointRow {
    pub fn from_endpoint(endpoint: &EndpointDescriptor) -> Self {
        Self {
            exposing_type: endpoint.exposing_type().simple_name().to_string(),
            method_name: endpoint.method_name().to_string(),
            relative_url: endpoint.relative_url().to_string(),
            action: endpoint
                .tracking()
                .map(|t| t.action().to_string())
                .unwrap_or_default(),
            http_methods: endpoint.http_methods_string(),
            tracked_values: endpoint.tracked_value_strings(),
            parameters: endpoint.parameter_strings(),
            inherited_from: endpoint.inherited_from().map(ToString::to_string),
        }
    }

    /// Cells in [`ENDPOINT_HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.method_name.clone(),
            self.relative_url.clone(),
            self.action.clone(),
            self.http_methods.clone(),
            self.tracked_values.join(",\n"),
            self.parameters.join(",\n"),
            self.inherited_from.clone().unwrap_or_default(),
        ]
    }
}
