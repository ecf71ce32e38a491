pub mod context;
pub mod diagnostic;
pub mod diagnostic_printer;
pub mod external_api;
pub mod rule;
pub mod rule_registry;
pub mod rules;

use log::debug;

use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::Diagnostic;
use crate::analysis::rule_registry::RuleRegistry;
use crate::analysis::rules::assignment_spacing::AssignmentSpacingRule;
use crate::syntax::SyntaxNode;

pub struct StyleAnalyzer {
    rule_registry: RuleRegistry,
}

impl StyleAnalyzer {
    pub fn new() -> Self {
        let mut registry = RuleRegistry::new();

        // Register built-in rules
        registry.register(AssignmentSpacingRule);
        // Add more rules here...

        Self {
            rule_registry: registry,
        }
    }

    /// Runs every enabled rule over the given tree
    ///
    /// `Ok(())` means a clean run; `Err` carries every finding in emission
    /// order, whatever its severity
    pub fn analyze(&self, root: &SyntaxNode) -> Result<(), Vec<Diagnostic>> {
        let mut ctx = self.new_context();

        self.apply_rules(&mut ctx, root);

        if ctx.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ctx.diagnostics.diagnostics().to_vec())
        }
    }

    pub(crate) fn new_context(&self) -> AnalysisContext {
        let mut ctx = AnalysisContext::new();

        for rule in self.rule_registry.get_all_rules() {
            if !rule.enabled_by_default() {
                ctx.disabled_rules.insert(rule.id().to_string());
            }
        }

        ctx
    }

    pub(crate) fn apply_rules(&self, ctx: &mut AnalysisContext, root: &SyntaxNode) {
        debug!(
            "running style analysis with {} rule(s)",
            self.rule_registry.get_all_rules().len()
        );
        self.visit_node(ctx, root);
    }

    // Depth-first, source-order walk offering every node to every enabled
    // rule; rules decide for themselves which kinds they engage on
    fn visit_node(&self, ctx: &mut AnalysisContext, node: &SyntaxNode) {
        for rule in self.rule_registry.get_all_rules() {
            if ctx.is_rule_enabled(rule.id()) {
                let _ = rule.check(ctx, node);
            }
        }

        for child in node.child_nodes() {
            self.visit_node(ctx, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analysis::rules::assignment_spacing::{
        BLANK_LINE_AFTER_ASSIGNMENT, BLANK_LINE_BEFORE_ASSIGNMENT,
    };
    use crate::syntax::{SourceSpan, SyntaxKind};

    fn declaration(line: usize) -> SyntaxNode {
        SyntaxNode::new(SyntaxKind::LocalDeclaration, SourceSpan::new(line, 9, line, 28))
    }

    fn call(line: usize) -> SyntaxNode {
        SyntaxNode::with_children(
            SyntaxKind::ExpressionStatement,
            SourceSpan::new(line, 9, line, 24),
            vec![SyntaxNode::new(SyntaxKind::Invocation, SourceSpan::new(line, 9, line, 23))],
        )
    }

    fn method(start_line: usize, end_line: usize, statements: Vec<SyntaxNode>) -> SyntaxNode {
        let body = SyntaxNode::with_children(
            SyntaxKind::Block,
            SourceSpan::new(start_line, 5, end_line, 6),
            statements,
        );
        SyntaxNode::with_children(
            SyntaxKind::MethodDeclaration,
            SourceSpan::new(start_line, 5, end_line, 6),
            vec![body],
        )
    }

    fn unit_of(members: Vec<SyntaxNode>) -> SyntaxNode {
        let class = SyntaxNode::with_children(
            SyntaxKind::TypeDeclaration,
            SourceSpan::new(1, 1, 60, 2),
            members,
        );
        SyntaxNode::with_children(
            SyntaxKind::CompilationUnit,
            SourceSpan::new(1, 1, 60, 2),
            vec![class],
        )
    }

    #[test]
    fn analyzer_reports_findings_from_every_method() {
        let first = method(2, 5, vec![call(3), declaration(4)]);
        let second = method(8, 11, vec![declaration(9), call(10)]);
        let root = unit_of(vec![first, second]);

        let findings = StyleAnalyzer::new().analyze(&root).unwrap_err();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].rule_id, BLANK_LINE_BEFORE_ASSIGNMENT);
        assert_eq!(findings[1].rule_id, BLANK_LINE_AFTER_ASSIGNMENT);
    }

    #[test]
    fn analyzer_is_clean_on_separated_statements() {
        let root = unit_of(vec![method(2, 7, vec![call(3), declaration(5)])]);

        assert!(StyleAnalyzer::new().analyze(&root).is_ok());
    }

    #[test]
    fn lambda_body_is_checked_as_its_own_unit() {
        // a lambda with a violating body nested inside an otherwise clean
        // method: the finding belongs to the lambda's block
        let lambda = SyntaxNode::with_children(
            SyntaxKind::AnonymousFunction,
            SourceSpan::new(3, 13, 6, 14),
            vec![SyntaxNode::with_children(
                SyntaxKind::Block,
                SourceSpan::new(3, 20, 6, 14),
                vec![call(4), declaration(5)],
            )],
        );
        let wrapper = SyntaxNode::with_children(
            SyntaxKind::ExpressionStatement,
            SourceSpan::new(3, 9, 6, 15),
            vec![lambda],
        );
        let root = unit_of(vec![method(2, 7, vec![wrapper])]);

        let findings = StyleAnalyzer::new().analyze(&root).unwrap_err();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, BLANK_LINE_BEFORE_ASSIGNMENT);
        assert_eq!(findings[0].span, SourceSpan::new(4, 9, 4, 24));
    }
}
