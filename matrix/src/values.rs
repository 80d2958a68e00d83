//! Representative value generation.
//!
//! For each field the candidate set covers both boundaries, one value just
//! outside each boundary, and (for ranges wider than one unit) the 25/50/75%
//! interior samples plus the values just inside each boundary. The set is
//! sorted but not de-duplicated.

use tcgen_core::{Field, FieldValues, TestCaseId, ValueAssignment};
use tracing::debug;

/// Candidate values for `field`, sorted ascending. Duplicates are kept.
pub fn candidate_values(field: &Field) -> Vec<i64> {
    let min = i64::from(field.min);
    let max = i64::from(field.max);

    let mut values = vec![min, max];

    if field.min > i32::MIN {
        values.push(min - 1);
    }
    if field.max < i32::MAX {
        values.push(max + 1);
    }

    let range = field.span();
    if range > 1 {
        for fraction in [0.25, 0.5, 0.75] {
            values.push(min + (range as f64 * fraction) as i64);
        }
        if min + 1 < max {
            values.push(min + 1);
        }
        if max - 1 > min {
            values.push(max - 1);
        }
    }

    values.sort_unstable();
    values
}

/// The single test case exercising the value at sorted position `index`.
///
/// Out-of-range values alternate between the first two columns only,
/// whatever the total number of test cases.
pub fn assign_value(field: &Field, index: usize, value: i64) -> TestCaseId {
    let first = TestCaseId::from_index(0);
    let second = TestCaseId::from_index(1);

    if !field.contains(value) {
        if index % 2 == 0 {
            first
        } else {
            second
        }
    } else if field.is_boundary(value) {
        if value == i64::from(field.min) {
            first
        } else {
            second
        }
    } else {
        TestCaseId::from_index(index % 2)
    }
}

/// Generate and assign the representative values of one field.
pub fn generate_field_values(field: &Field) -> FieldValues {
    let values: Vec<ValueAssignment> = candidate_values(field)
        .into_iter()
        .enumerate()
        .map(|(i, v)| ValueAssignment::new(v, assign_value(field, i, v)))
        .collect();

    debug!(
        field = %field.name,
        min = field.min,
        max = field.max,
        count = values.len(),
        "generated representative values"
    );

    FieldValues {
        field: field.clone(),
        values,
    }
}
