use colored::Colorize;

use crate::StylintError;
use crate::analysis::diagnostic::{Diagnostic, DiagnosticSeverity};

/// Renders findings against the source text they were produced from
pub struct DiagnosticPrinter {
    pub use_colors: bool,
    pub source_code: String,
    pub file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(source_code: String, file_name: String, use_colors: bool) -> Self {
        Self {
            use_colors,
            source_code,
            file_name,
        }
    }

    pub fn sprint_findings(&self, diagnostics: &[Diagnostic]) -> Result<String, StylintError> {
        let mut out = String::new();

        for diagnostic in diagnostics {
            out.push_str(&self.render(diagnostic)?);
            out.push('\n');
        }

        Ok(out)
    }

    pub fn print_findings(&self, diagnostics: &[Diagnostic]) -> Result<(), StylintError> {
        print!("{}", self.sprint_findings(diagnostics)?);
        Ok(())
    }

    fn render(&self, diagnostic: &Diagnostic) -> Result<String, StylintError> {
        let mut out = format!(
            "{}[{}]: {}\n",
            self.severity_label(diagnostic.severity),
            diagnostic.rule_id,
            diagnostic.message
        );

        let line = diagnostic.span.start.line;
        if line == 0 {
            // Synthetic span, nothing in the source to point at
            return Ok(out);
        }

        let source_line = self
            .source_code
            .lines()
            .nth(line - 1)
            .ok_or_else(|| StylintError::SpanOutOfSource(format!("line {}", line)))?;

        let column = diagnostic.span.start.column.max(1);
        let width = if diagnostic.span.end.line == line && diagnostic.span.end.column >= column {
            diagnostic.span.end.column - column + 1
        } else {
            source_line.chars().count().saturating_sub(column - 1).max(1)
        };
        let underline = "^".repeat(width);

        out.push_str(&format!("  --> {}:{}:{}\n", self.file_name, line, column));
        out.push_str(&format!("   |\n{:>3} | {}\n", line, source_line));
        out.push_str(&format!(
            "   | {}{}\n",
            " ".repeat(column - 1),
            self.paint(&underline, diagnostic.severity)
        ));

        Ok(out)
    }

    fn severity_label(&self, severity: DiagnosticSeverity) -> String {
        let text = match severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        };
        self.paint(text, severity)
    }

    fn paint(&self, text: &str, severity: DiagnosticSeverity) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        match severity {
            DiagnosticSeverity::Error => text.red().bold().to_string(),
            DiagnosticSeverity::Warning => text.yellow().bold().to_string(),
            DiagnosticSeverity::Info => text.cyan().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SourceSpan;

    const SOURCE: &str = "void Demo() {\n    Prepare();\n    int total = 0;\n}\n";

    fn printer() -> DiagnosticPrinter {
        DiagnosticPrinter::new(SOURCE.to_string(), "demo.src".to_string(), false)
    }

    fn finding(span: SourceSpan) -> Diagnostic {
        Diagnostic {
            message: "An assignment should be preceded by a blank line".to_string(),
            span,
            severity: DiagnosticSeverity::Warning,
            rule_id: "blank-line-before-assignment".to_string(),
        }
    }

    #[test]
    fn renders_header_locus_source_line_and_caret() {
        let output = printer()
            .sprint_findings(&[finding(SourceSpan::new(2, 5, 2, 14))])
            .unwrap();

        assert!(output.starts_with(
            "warning[blank-line-before-assignment]: An assignment should be preceded by a blank line\n"
        ));
        assert!(output.contains("  --> demo.src:2:5\n"));
        assert!(output.contains("  2 |     Prepare();\n"));
        assert!(output.contains("   |     ^^^^^^^^^^\n"));
    }

    #[test]
    fn synthetic_span_renders_header_only() {
        let marker = Diagnostic {
            message: "Finding limit reached, 3 finding(s) not shown".to_string(),
            span: SourceSpan::synthetic(),
            severity: DiagnosticSeverity::Info,
            rule_id: "finding-limit".to_string(),
        };

        let output = printer().sprint_findings(&[marker]).unwrap();

        assert!(output.starts_with("info[finding-limit]:"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn span_beyond_the_source_is_an_error() {
        let result = printer().sprint_findings(&[finding(SourceSpan::new(99, 1, 99, 4))]);

        assert!(matches!(result, Err(StylintError::SpanOutOfSource(_))));
    }
}
