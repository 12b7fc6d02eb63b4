//! Per-endpoint diagnostic accumulation.

use super::kinds::{Diagnostic, DiagnosticKind, ErrorKind, WarningKind};

/// Accumulates findings for one endpoint.
///
/// Text per kind is append-only: each record adds `"\n" + message` to the
/// running text of its kind. Storage is indexed by kind ordinal, so rendering
/// order is always the enumeration's declaration order.
#[derive(Debug, Clone)]
pub struct DiagnosticCollector {
    errors: [Option<String>; ErrorKind::COUNT],
    warnings: [Option<String>; WarningKind::COUNT],
    entries: Vec<Diagnostic>,
}

impl Default for DiagnosticCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self {
            errors: std::array::from_fn(|_| None),
            warnings: std::array::from_fn(|_| None),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: impl Into<DiagnosticKind>, message: impl Into<String>) {
        let kind = kind.into();
        let message = message.into();
        let slot = match kind {
            DiagnosticKind::Error(k) => &mut self.errors[k.ordinal()],
            DiagnosticKind::Warning(k) => &mut self.warnings[k.ordinal()],
        };
        let text = slot.get_or_insert_with(String::new);
        text.push('\n');
        text.push_str(&message);
        self.entries.push(Diagnostic::new(kind, message));
    }

    pub fn record_error(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.record(kind, message);
    }

    pub fn record_warning(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.record(kind, message);
    }

    /// Accumulated text for one error kind.
    pub fn error_text(&self, kind: ErrorKind) -> Option<&str> {
        self.errors[kind.ordinal()].as_deref()
    }

    /// Accumulated text for one warning kind.
    pub fn warning_text(&self, kind: WarningKind) -> Option<&str> {
        self.warnings[kind.ordinal()].as_deref()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings.iter().any(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded error kinds with their text, in declaration order.
    pub fn errors(&self) -> impl Iterator<Item = (ErrorKind, &str)> {
        ErrorKind::ALL
            .iter()
            .filter_map(|&k| self.error_text(k).map(|t| (k, t)))
    }

    /// Recorded warning kinds with their text, in declaration order.
    pub fn warnings(&self) -> impl Iterator<Item = (WarningKind, &str)> {
        WarningKind::ALL
            .iter()
            .filter_map(|&k| self.warning_text(k).map(|t| (k, t)))
    }

    /// Every individual record, in recording order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of individual records of `kind`.
    pub fn count(&self, kind: impl Into<DiagnosticKind>) -> usize {
        let kind = kind.into();
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::Error(_)))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries.len() - self.error_count()
    }

    /// `"<KIND>:<text>"` per recorded error kind, joined by newlines.
    /// An empty filter selects every kind.
    pub fn all_errors(&self, filter: &[ErrorKind]) -> String {
        self.errors()
            .filter(|(k, _)| filter.is_empty() || filter.contains(k))
            .map(|(k, t)| format!("{k}:{t}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `"<KIND>:<text>"` per recorded warning kind, joined by newlines.
    /// An empty filter selects every kind.
    pub fn all_warnings(&self, filter: &[WarningKind]) -> String {
        self.warnings()
            .filter(|(k, _)| filter.is_empty() || filter.contains(k))
            .map(|(k, t)| format!("{k}:{t}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
