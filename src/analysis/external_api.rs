use crate::StylintError;
use crate::analysis::StyleAnalyzer;
use crate::analysis::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::syntax::{SourceSpan, SyntaxNode};

pub struct AnalyzerConfig {
    pub disabled_rules: Vec<String>,
    pub warning_as_error: bool,
    pub finding_limit: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            warning_as_error: false,
            finding_limit: None,
        }
    }
}

impl AnalyzerConfig {
    /// Rejects configurations that name rules the analyzer does not know
    pub fn validate(&self, analyzer: &StyleAnalyzer) -> Result<(), StylintError> {
        for rule_id in &self.disabled_rules {
            if analyzer.rule_registry.get_rule(rule_id).is_none() {
                return Err(StylintError::UnknownRule(rule_id.clone()));
            }
        }
        Ok(())
    }
}

impl StyleAnalyzer {
    pub fn analyze_with_config(
        &self,
        root: &SyntaxNode,
        config: AnalyzerConfig,
    ) -> Result<(), Vec<Diagnostic>> {
        let mut ctx = self.new_context();

        // Apply configuration
        for rule_id in &config.disabled_rules {
            ctx.disabled_rules.insert(rule_id.clone());
        }

        // Run analysis
        self.apply_rules(&mut ctx, root);

        // Process findings based on config
        let mut diagnostics: Vec<Diagnostic> = ctx.diagnostics.diagnostics().to_vec();

        if config.warning_as_error {
            for diag in &mut diagnostics {
                if diag.severity == DiagnosticSeverity::Warning {
                    diag.severity = DiagnosticSeverity::Error;
                }
            }
        }

        if let Some(limit) = config.finding_limit {
            if diagnostics.len() > limit {
                let dropped = diagnostics.len() - limit;

                diagnostics.truncate(limit);
                diagnostics.push(Diagnostic {
                    message: format!("Finding limit reached, {} finding(s) not shown", dropped),
                    span: SourceSpan::synthetic(),
                    severity: DiagnosticSeverity::Info,
                    rule_id: "finding-limit".to_string(),
                });
            }
        }

        // Return results
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(diagnostics)
        }
    }

    // Method to get all available rules
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str, &'static str, DiagnosticSeverity)> {
        self.rule_registry
            .get_all_rules()
            .iter()
            .map(|rule| (rule.id(), rule.description(), rule.category(), rule.severity()))
            .collect()
    }
}
