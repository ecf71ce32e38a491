use thiserror::Error;

pub mod analysis;
pub mod syntax;

pub use analysis::StyleAnalyzer;
pub use analysis::diagnostic::{Diagnostic, DiagnosticCollector, DiagnosticSeverity};
pub use analysis::diagnostic_printer::DiagnosticPrinter;
pub use analysis::external_api::AnalyzerConfig;
pub use syntax::{SourcePosition, SourceSpan, SyntaxKind, SyntaxNode};

#[derive(Debug, Error)]
pub enum StylintError {
    #[error("Unknown rule id referenced by configuration: {0}")]
    UnknownRule(String),
    #[error("Diagnostic span does not resolve to a line of the provided source: {0}")]
    SpanOutOfSource(String),
}
