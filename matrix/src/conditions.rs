//! Return conditions and log messages.
//!
//! Supplied conditions are used verbatim. When a list is empty, a fixed trio
//! is picked by matching the test requirement against an ordered keyword
//! table; the first matching entry wins.

use tcgen_core::{ConditionAssignment, TestCaseId, TestSpecification};
use tracing::debug;

/// One row of the default-condition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDefaults {
    pub keywords: &'static [&'static str],
    pub return_conditions: [&'static str; 3],
    pub log_messages: [&'static str; 3],
}

/// Keyword table, checked in order.
pub const KEYWORD_DEFAULTS: &[ConditionDefaults] = &[
    ConditionDefaults {
        keywords: &["age"],
        return_conditions: ["Valid age", "Age too young", "Age too old"],
        log_messages: ["Age is valid", "Age must be at least 10", "Age must not exceed 18"],
    },
    ConditionDefaults {
        keywords: &["salary", "income"],
        return_conditions: ["Valid salary", "Salary too low", "Salary too high"],
        log_messages: [
            "Salary is valid",
            "Salary is below minimum threshold",
            "Salary exceeds maximum limit",
        ],
    },
    ConditionDefaults {
        keywords: &["percentage"],
        return_conditions: ["Valid percentage", "Percentage too low", "Percentage too high"],
        log_messages: [
            "Percentage is valid",
            "Percentage must be at least 0",
            "Percentage must not exceed 100",
        ],
    },
];

/// Used when no keyword matches.
pub const GENERIC_DEFAULTS: ConditionDefaults = ConditionDefaults {
    keywords: &[],
    return_conditions: ["Valid result", "Invalid input", "Calculation error"],
    log_messages: [
        "Operation successful",
        "Invalid input parameters",
        "Calculation error occurred",
    ],
};

/// Pick the default trio for a requirement (case-insensitive substring match).
pub fn defaults_for(requirement: &str) -> &'static ConditionDefaults {
    let lowered = requirement.to_lowercase();
    let chosen = KEYWORD_DEFAULTS
        .iter()
        .find(|d| d.keywords.iter().any(|k| lowered.contains(k)))
        .unwrap_or(&GENERIC_DEFAULTS);
    debug!(keywords = ?chosen.keywords, "selected default conditions");
    chosen
}

fn owned(trio: &[&str; 3]) -> Vec<String> {
    trio.iter().map(|s| s.to_string()).collect()
}

/// Return conditions of `spec`, falling back to the keyword defaults.
pub fn resolve_return_conditions(spec: &TestSpecification) -> Vec<String> {
    if spec.return_conditions.is_empty() {
        owned(&defaults_for(&spec.test_requirement).return_conditions)
    } else {
        spec.return_conditions.clone()
    }
}

/// Log messages of `spec`, falling back to the keyword defaults.
pub fn resolve_log_messages(spec: &TestSpecification) -> Vec<String> {
    if spec.log_messages.is_empty() {
        owned(&defaults_for(&spec.test_requirement).log_messages)
    } else {
        spec.log_messages.clone()
    }
}

/// Round-robin distribution: condition `i` of `condition_count` gets test
/// case indices `i, i + n, i + 2n, ...` below `test_case_count`.
pub fn round_robin(condition_count: usize, test_case_count: usize) -> Vec<Vec<usize>> {
    (0..condition_count)
        .map(|i| (i..test_case_count).step_by(condition_count).collect())
        .collect()
}

/// Attach test cases to each label by [`round_robin`].
pub fn assign_conditions(labels: Vec<String>, test_case_ids: &[TestCaseId]) -> Vec<ConditionAssignment> {
    let slots = round_robin(labels.len(), test_case_ids.len());
    labels
        .into_iter()
        .zip(slots)
        .map(|(label, indices)| ConditionAssignment {
            label,
            test_cases: indices.into_iter().map(|i| test_case_ids[i]).collect(),
        })
        .collect()
}
