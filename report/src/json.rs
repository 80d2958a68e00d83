//! JSON report for programmatic consumption.

use serde_json::json;
use tcgen_core::{TestGenError, TestGenResult, TestMatrix};

pub struct JsonReport;

impl JsonReport {
    /// Pretty-printed JSON with the summary up front and the full matrix
    /// under `matrix`.
    pub fn generate(matrix: &TestMatrix) -> TestGenResult<String> {
        let summary = &matrix.summary;
        let report = json!({
            "functionCode": matrix.specification.function_code,
            "functionName": matrix.specification.function_name,
            "total": summary.total,
            "passed": summary.passed,
            "failed": summary.failed,
            "untested": summary.untested,
            "passRate": summary.pass_rate(),
            "types": {
                "normal": summary.normal,
                "abnormal": summary.abnormal,
                "boundary": summary.boundary,
            },
            "matrix": matrix,
        });

        serde_json::to_string_pretty(&report).map_err(|e| TestGenError::Rendering(e.to_string()))
    }
}
