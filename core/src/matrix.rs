//! Matrix types.
//!
//! A [`TestMatrix`] is built once per specification and never mutated
//! afterwards. Per-test-case data is stored in column order, so the
//! `i`-th entry of [`TestMatrix::cases`] belongs to `UTCID{i+1}`.

use crate::{Field, TestCaseId, TestSpecification};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Placeholder shown in the defect column for test cases without a defect.
pub const NO_DEFECT: &str = "-";

/// One generated representative value and the test cases exercising it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAssignment {
    pub value: i64,
    pub assigned_test_cases: BTreeSet<TestCaseId>,
}

impl ValueAssignment {
    pub fn new(value: i64, test_case: TestCaseId) -> Self {
        Self {
            value,
            assigned_test_cases: BTreeSet::from([test_case]),
        }
    }

    pub fn is_assigned_to(&self, id: TestCaseId) -> bool {
        self.assigned_test_cases.contains(&id)
    }
}

/// Generated values for one field, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub field: Field,
    pub values: Vec<ValueAssignment>,
}

impl FieldValues {
    /// Plain values, in row order.
    pub fn raw_values(&self) -> Vec<i64> {
        self.values.iter().map(|v| v.value).collect()
    }
}

/// A return condition or log message and the test cases it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionAssignment {
    pub label: String,
    pub test_cases: Vec<TestCaseId>,
}

/// Why a test case exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Normal,
    Abnormal,
    Boundary,
}

impl Classification {
    /// Single-letter code used in the result row.
    pub fn code(&self) -> &'static str {
        match self {
            Classification::Normal => "N",
            Classification::Abnormal => "A",
            Classification::Boundary => "B",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pass/fail state of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResult {
    Passed,
    Failed,
    Untested,
}

impl TestResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestResult::Passed => "Passed",
            TestResult::Failed => "Failed",
            TestResult::Untested => "Untested",
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a test case plus its defect id. `defect_id` is set iff the
/// result is [`TestResult::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    pub result: TestResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect_id: Option<String>,
}

impl TestOutcome {
    pub fn passed() -> Self {
        Self {
            result: TestResult::Passed,
            defect_id: None,
        }
    }

    pub fn failed(defect_id: impl Into<String>) -> Self {
        Self {
            result: TestResult::Failed,
            defect_id: Some(defect_id.into()),
        }
    }

    /// The defect id, or `-` when there is none.
    pub fn defect_label(&self) -> &str {
        self.defect_id.as_deref().unwrap_or(NO_DEFECT)
    }
}

/// One column of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: TestCaseId,
    /// Synthesized input per field, in field order.
    pub inputs: Vec<i64>,
    pub classification: Classification,
    pub outcome: TestOutcome,
}

/// Aggregate counts across all test cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    pub passed: usize,
    pub failed: usize,
    pub untested: usize,
    pub normal: usize,
    pub abnormal: usize,
    pub boundary: usize,
    pub total: usize,
}

impl MatrixSummary {
    pub fn from_cases(cases: &[TestCase]) -> Self {
        let mut summary = MatrixSummary {
            total: cases.len(),
            ..MatrixSummary::default()
        };
        for case in cases {
            match case.outcome.result {
                TestResult::Passed => summary.passed += 1,
                TestResult::Failed => summary.failed += 1,
                TestResult::Untested => summary.untested += 1,
            }
            match case.classification {
                Classification::Normal => summary.normal += 1,
                Classification::Abnormal => summary.abnormal += 1,
                Classification::Boundary => summary.boundary += 1,
            }
        }
        summary
    }

    /// Fraction of passed test cases, 0.0 for an empty matrix.
    pub fn pass_rate(&self) -> f64 {
        if self.total > 0 {
            self.passed as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

/// The full boundary-value test matrix for one specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMatrix {
    /// The specification the matrix was built from.
    pub specification: TestSpecification,
    pub test_case_ids: Vec<TestCaseId>,
    pub field_values: Vec<FieldValues>,
    pub return_conditions: Vec<ConditionAssignment>,
    pub log_messages: Vec<ConditionAssignment>,
    pub cases: Vec<TestCase>,
    pub summary: MatrixSummary,
}

impl TestMatrix {
    pub fn test_case_count(&self) -> usize {
        self.test_case_ids.len()
    }

    pub fn case(&self, id: TestCaseId) -> Option<&TestCase> {
        self.cases.get(id.index())
    }

    pub fn classification(&self, id: TestCaseId) -> Option<Classification> {
        self.case(id).map(|c| c.classification)
    }

    pub fn outcome(&self, id: TestCaseId) -> Option<&TestOutcome> {
        self.case(id).map(|c| &c.outcome)
    }

    pub fn values_for(&self, field_name: &str) -> Option<&FieldValues> {
        self.field_values.iter().find(|fv| fv.field.name == field_name)
    }
}
