use log::trace;

use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::analysis::rule::StyleRule;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Reported when an assignment sits directly below a non-assignment statement
pub const BLANK_LINE_BEFORE_ASSIGNMENT: &str = "blank-line-before-assignment";
/// Reported when an assignment sits directly above a non-assignment statement
pub const BLANK_LINE_AFTER_ASSIGNMENT: &str = "blank-line-after-assignment";

// Rule to check that assignments and declarations are set apart from
// surrounding statements by blank lines
pub struct AssignmentSpacingRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementClass {
    Assignment,
    Other,
}

fn classify(node: &SyntaxNode) -> StatementClass {
    let effective = node.expression().unwrap_or(node);

    match effective.kind {
        SyntaxKind::SimpleAssignment | SyntaxKind::LocalDeclaration => StatementClass::Assignment,
        _ => StatementClass::Other,
    }
}

// Constructs whose direct children form a statement sequence of their own.
// Catch clauses are not on the list: only the try body and the finally
// clause are descended into
fn is_container(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Block
            | SyntaxKind::ForStatement
            | SyntaxKind::ForEachStatement
            | SyntaxKind::WhileStatement
            | SyntaxKind::IfStatement
            | SyntaxKind::ElseClause
            | SyntaxKind::TryStatement
            | SyntaxKind::FinallyClause
            | SyntaxKind::SwitchStatement
            | SyntaxKind::SwitchSection
    )
}

// Declarations that carry an executable body to inspect
fn owns_body(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::MethodDeclaration
            | SyntaxKind::ConstructorDeclaration
            | SyntaxKind::LocalFunction
            | SyntaxKind::AnonymousFunction
    )
}

impl StyleRule for AssignmentSpacingRule {
    fn id(&self) -> &'static str {
        "assignment-spacing"
    }

    fn description(&self) -> &'static str {
        "Checks that assignments and declarations are separated from other statements by blank lines"
    }

    fn category(&self) -> &'static str {
        "Formatting Style"
    }

    fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Warning
    }

    fn check(&self, ctx: &mut AnalysisContext, node: &SyntaxNode) -> Result<(), ()> {
        if !owns_body(node.kind) {
            return Ok(());
        }

        // Only the first block child of a body owner is inspected; a body
        // owner without a block (an abstract signature, an expression-bodied
        // lambda) has nothing to check
        let Some(body) = node.children.iter().find(|c| c.kind == SyntaxKind::Block) else {
            return Ok(());
        };

        self.check_block(ctx, body);
        Ok(())
    }
}

impl AssignmentSpacingRule {
    fn check_block(&self, ctx: &mut AnalysisContext, block: &SyntaxNode) {
        trace!(
            "inspecting statement sequence of {:?} at line {}",
            block.kind, block.span.start.line
        );

        let mut previous: Option<&SyntaxNode> = None;

        for child in block.child_nodes() {
            // Nested sequences are inspected before this child takes part in
            // the adjacency comparison, so inner findings come out first
            if is_container(child.kind) {
                self.check_block(ctx, child);
            }

            if let Some(prev) = previous {
                // Adjacent means the gap between visible bounds is exactly
                // one line: same-line siblings and blank-separated pairs are
                // both clean
                if child.span.start.line == prev.span.end.line + 1 {
                    let current = classify(child);
                    let earlier = classify(prev);

                    if current == StatementClass::Assignment && earlier == StatementClass::Other {
                        ctx.diagnostics.report_warning(
                            BLANK_LINE_BEFORE_ASSIGNMENT,
                            "An assignment should be preceded by a blank line".to_string(),
                            prev.span,
                        );
                    } else if earlier == StatementClass::Assignment
                        && current == StatementClass::Other
                    {
                        ctx.diagnostics.report_warning(
                            BLANK_LINE_AFTER_ASSIGNMENT,
                            "An assignment should be followed by a blank line".to_string(),
                            prev.span,
                        );
                    }
                }
            }

            previous = Some(child);
        }
    }
}
