use crate::syntax::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub span: SourceSpan,
    pub severity: DiagnosticSeverity,
    pub rule_id: String,
}

/// Sink for findings produced during one analysis pass
///
/// Emissions are synchronous: a rule reports a finding the moment its
/// traversal discovers it, and the collector keeps them in emission order
#[derive(Debug)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self { diagnostics: Vec::new() }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn report_error(&mut self, rule_id: &str, message: String, span: SourceSpan) {
        self.add(Diagnostic {
            message,
            span,
            severity: DiagnosticSeverity::Error,
            rule_id: rule_id.to_string(),
        });
    }

    pub fn report_warning(&mut self, rule_id: &str, message: String, span: SourceSpan) {
        self.add(Diagnostic {
            message,
            span,
            severity: DiagnosticSeverity::Warning,
            rule_id: rule_id.to_string(),
        })
    }

    pub fn report_info(&mut self, rule_id: &str, message: String, span: SourceSpan) {
        self.add(Diagnostic {
            message,
            span,
            severity: DiagnosticSeverity::Info,
            rule_id: rule_id.to_string(),
        })
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
