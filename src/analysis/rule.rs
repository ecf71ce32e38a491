use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::syntax::SyntaxNode;

pub trait StyleRule: Send + Sync {
    // Unique identifier for this rule
    fn id(&self) -> &'static str;

    // Short description of what this rule checks
    fn description(&self) -> &'static str;

    // Human-readable grouping shown in rule listings
    fn category(&self) -> &'static str;

    // Severity level of violations (error, warning, info)
    fn severity(&self) -> DiagnosticSeverity;

    // Apply the rule to a specific node in the syntax tree
    fn check(&self, ctx: &mut AnalysisContext, node: &SyntaxNode) -> Result<(), ()>;

    // Optional: whether this rule is enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}
