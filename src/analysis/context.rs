use std::collections::HashSet;

use crate::analysis::diagnostic::DiagnosticCollector;

/// Per-invocation state for one analysis pass
///
/// Each call into the analyzer owns its own context, so one analyzer value
/// can serve concurrent invocations over independent trees
#[derive(Debug)]
pub struct AnalysisContext {
    pub diagnostics: DiagnosticCollector,
    pub disabled_rules: HashSet<String>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self {
            diagnostics: DiagnosticCollector::new(),
            disabled_rules: HashSet::new(),
        }
    }

    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }
}
