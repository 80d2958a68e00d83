//! Report rendering for tcgen.
//!
//! A [`TestMatrix`](tcgen_core::TestMatrix) is laid into a fixed sheet shape
//! ([`SheetLayout`]) which can be written as CSV, or summarised as a text or
//! JSON report.

pub mod csv;
pub mod json;
pub mod layout;
pub mod sheet;
pub mod text;

pub use crate::csv::write_csv;
pub use json::JsonReport;
pub use layout::{RenderOptions, SheetLayout};
pub use sheet::Sheet;
pub use text::TextReport;

use chrono::NaiveDateTime;
use tcgen_core::TestMatrix;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Which flow produced the matrix; picks the report file prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    /// Built from a free-text requirement or a direct specification.
    #[default]
    TestCases,
    /// Built from a use-case name.
    UseCase,
}

impl ReportKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReportKind::TestCases => "testcases",
            ReportKind::UseCase => "usecase",
        }
    }
}

/// `<prefix>_<functionCode>_<yyyyMMdd_HHmmss>.<ext>`, with the function code
/// reduced to a single safe path component.
pub fn report_file_name(
    matrix: &TestMatrix,
    kind: ReportKind,
    format: ReportFormat,
    at: NaiveDateTime,
) -> String {
    format!(
        "{}_{}_{}.{}",
        kind.prefix(),
        file_name_component(&matrix.specification.function_code),
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Replace everything but ASCII alphanumerics, `-`, `_` and `.` with `_`.
/// Path separators never survive, so the result cannot leave its directory.
pub fn file_name_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Render `matrix` in `format` into a string.
pub fn render(
    matrix: &TestMatrix,
    format: ReportFormat,
    options: &RenderOptions,
) -> tcgen_core::TestGenResult<String> {
    match format {
        ReportFormat::Csv => {
            let sheet = SheetLayout::render(matrix, options);
            let mut out = Vec::new();
            write_csv(&sheet, &mut out)?;
            String::from_utf8(out).map_err(|e| tcgen_core::TestGenError::Rendering(e.to_string()))
        }
        ReportFormat::Text => Ok(TextReport::generate(matrix)),
        ReportFormat::Json => JsonReport::generate(matrix),
    }
}
