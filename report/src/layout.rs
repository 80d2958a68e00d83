//! Fixed sheet layout of a test matrix.
//!
//! Column 1 holds section labels, column 2 holds row labels and values, and
//! every test case gets its own column starting at column 3. Markers are
//! placed in the column of each test case a row applies to.

use crate::sheet::Sheet;
use chrono::{Local, NaiveDateTime};
use tcgen_core::{ConditionAssignment, TestMatrix};
use tracing::debug;

/// First test case column.
pub const FIRST_CASE_COLUMN: usize = 3;

/// Glyph marking a test case in a value or condition row.
pub const DEFAULT_MARKER: &str = "●";

/// `yyyy-MM-dd HH:mm:ss`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown in the header block next to "Lack of test cases".
pub const LACK_OF_TEST_CASES: &str = "-2";

pub const TYPE_ROW_LABEL: &str = "Type(N : Normal, A : Abnormal, B : Boundary)";

/// Renderer-owned values that are not part of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub marker: String,
    /// Timestamp written in the "Executed Date" row.
    pub executed_at: NaiveDateTime,
    pub date_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            executed_at: Local::now().naive_local(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_executed_at(mut self, at: NaiveDateTime) -> Self {
        self.executed_at = at;
        self
    }

    pub fn executed_date(&self) -> String {
        self.executed_at.format(&self.date_format).to_string()
    }
}

/// Lays a matrix into a [`Sheet`].
pub struct SheetLayout;

impl SheetLayout {
    pub fn render(matrix: &TestMatrix, options: &RenderOptions) -> Sheet {
        let mut sheet = Sheet::new();
        let spec = &matrix.specification;
        let case_count = matrix.test_case_count();
        let mut row = 1;

        // Header block
        for (left, left_value, right, right_value) in [
            ("Function Code", spec.function_code.as_str(), "Function Name", spec.function_name.as_str()),
            (
                "Created By",
                spec.created_by.as_str(),
                "Executed By",
                spec.executed_by.as_deref().unwrap_or(""),
            ),
            (
                "Lines of code",
                spec.lines_of_code.as_deref().unwrap_or(""),
                "Test requirement",
                spec.test_requirement.as_str(),
            ),
        ] {
            sheet.set(row, 1, left);
            sheet.set(row, 2, left_value);
            sheet.set(row, 3, right);
            sheet.set(row, 4, right_value);
            row += 1;
        }
        sheet.set(row, 1, "Lack of test cases");
        sheet.set(row, 2, LACK_OF_TEST_CASES);
        row += 2;

        // Summary
        let summary = &matrix.summary;
        let counts = [
            ("Passed", summary.passed),
            ("Failed", summary.failed),
            ("Untested", summary.untested),
            ("Normal", summary.normal),
            ("Abnormal", summary.abnormal),
            ("Boundary", summary.boundary),
            ("Total Test Cases", case_count),
        ];
        for (col, (label, count)) in counts.iter().enumerate() {
            sheet.set(row, col + 1, *label);
            sheet.set(row + 1, col + 1, count.to_string());
        }
        row += 3;

        // Grid header
        sheet.set(row, 1, "Condition");
        sheet.set(row, 2, "Precondition");
        for id in &matrix.test_case_ids {
            sheet.set(row, FIRST_CASE_COLUMN + id.index(), id.to_string());
        }
        row += 1;

        // Inputs
        sheet.set(row, 2, "Input condition");
        row += 1;
        for fv in &matrix.field_values {
            sheet.set(row, 2, format!("Input `{}`:", fv.field.name));
            row += 1;
            for assignment in &fv.values {
                sheet.set(row, 2, assignment.value.to_string());
                for id in &assignment.assigned_test_cases {
                    sheet.set(row, FIRST_CASE_COLUMN + id.index(), options.marker.as_str());
                }
                row += 1;
            }
        }

        // Confirm
        sheet.set(row, 1, "Confirm");
        sheet.set(row, 2, "Return");
        row += 1;
        row = Self::condition_rows(&mut sheet, row, &matrix.return_conditions, options);

        sheet.set(row, 2, "Exception");
        row += 1;
        sheet.set(row, 2, "Log message");
        row += 1;
        row = Self::condition_rows(&mut sheet, row, &matrix.log_messages, options);

        // Result
        sheet.set(row, 1, "Result");
        let executed_date = options.executed_date();
        let rows: [(&str, Vec<String>); 4] = [
            (
                TYPE_ROW_LABEL,
                matrix.cases.iter().map(|c| c.classification.code().to_string()).collect(),
            ),
            (
                "Passed/Failed",
                matrix.cases.iter().map(|c| c.outcome.result.to_string()).collect(),
            ),
            ("Executed Date", vec![executed_date; case_count]),
            (
                "Defect ID",
                matrix.cases.iter().map(|c| c.outcome.defect_label().to_string()).collect(),
            ),
        ];
        for (label, cells) in rows {
            sheet.set(row, 2, label);
            for (i, cell) in cells.into_iter().enumerate() {
                sheet.set(row, FIRST_CASE_COLUMN + i, cell);
            }
            row += 1;
        }

        debug!(rows = sheet.row_count(), columns = sheet.column_count(), "laid out sheet");
        sheet
    }

    fn condition_rows(
        sheet: &mut Sheet,
        mut row: usize,
        conditions: &[ConditionAssignment],
        options: &RenderOptions,
    ) -> usize {
        for condition in conditions {
            sheet.set(row, 2, condition.label.as_str());
            for id in &condition.test_cases {
                sheet.set(row, FIRST_CASE_COLUMN + id.index(), options.marker.as_str());
            }
            row += 1;
        }
        row
    }
}
