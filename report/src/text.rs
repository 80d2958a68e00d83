//! Human-readable text report

use tcgen_core::TestMatrix;

const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Generates human-readable matrix reports
pub struct TextReport;

impl TextReport {
    pub fn generate(matrix: &TestMatrix) -> String {
        let spec = &matrix.specification;
        let summary = &matrix.summary;
        let mut lines = Vec::new();

        // Header
        lines.push("╔══════════════════════════════════════════════════════════════╗".to_string());
        lines.push("║               Boundary Value Test Matrix                     ║".to_string());
        lines.push("╚══════════════════════════════════════════════════════════════╝".to_string());
        lines.push(String::new());

        lines.push(format!("Function: {} ({})", spec.function_name, spec.function_code));
        if !spec.created_by.is_empty() {
            lines.push(format!("Created By: {}", spec.created_by));
        }
        if !spec.test_requirement.is_empty() {
            lines.push(format!("Requirement: {}", spec.test_requirement));
        }
        lines.push(format!("Test Cases: {}", matrix.test_case_count()));
        lines.push(String::new());

        // Fields
        lines.push("Fields:".to_string());
        if matrix.field_values.is_empty() {
            lines.push("  (none)".to_string());
        }
        for fv in &matrix.field_values {
            let values: Vec<String> = fv
                .values
                .iter()
                .map(|v| {
                    let ids: Vec<String> = v.assigned_test_cases.iter().map(|id| id.to_string()).collect();
                    format!("{}→{}", v.value, ids.join("+"))
                })
                .collect();
            lines.push(format!(
                "  {} {} [{}..{}]: {}",
                fv.field.field_type,
                fv.field.name,
                fv.field.min,
                fv.field.max,
                values.join(", ")
            ));
        }
        lines.push(String::new());

        for (title, conditions) in [
            ("Return conditions:", &matrix.return_conditions),
            ("Log messages:", &matrix.log_messages),
        ] {
            lines.push(title.to_string());
            for condition in conditions {
                let ids: Vec<String> = condition.test_cases.iter().map(|id| id.to_string()).collect();
                lines.push(format!("  {:32} {}", condition.label, ids.join(" ")));
            }
            lines.push(String::new());
        }

        // Results
        lines.push(RULE.to_string());
        lines.push("                         RESULTS                               ".to_string());
        lines.push(RULE.to_string());
        lines.push(String::new());

        for case in &matrix.cases {
            lines.push(format!(
                "  {}  {}  {:8}  {}",
                case.id,
                case.classification.code(),
                case.outcome.result.as_str(),
                case.outcome.defect_label()
            ));
        }
        lines.push(String::new());

        lines.push(format!("Total:    {} tests", summary.total));
        lines.push(format!(
            "Passed:   {} ({:.1}%)",
            summary.passed,
            summary.pass_rate() * 100.0
        ));
        lines.push(format!("Failed:   {}", summary.failed));
        lines.push(format!("Untested: {}", summary.untested));
        lines.push(format!(
            "Types:    {} normal, {} abnormal, {} boundary",
            summary.normal, summary.abnormal, summary.boundary
        ));
        lines.push(RULE.to_string());

        lines.join("\n")
    }
}
