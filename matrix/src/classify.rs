//! Test case classification and outcomes.
//!
//! Each test case gets one synthesized input per field, chosen by its column
//! index rather than from the generated value rows. The inputs decide the
//! classification (Abnormal > Boundary > Normal) and the classification
//! decides the outcome.

use rand::Rng;
use tcgen_core::{Classification, Field, TestOutcome};

/// Lowest and highest defect number (inclusive).
pub const DEFECT_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 100..=998;

/// Synthesize the input of one field for test case `index`.
///
/// Index 0 takes `min`, index 1 takes `max`, index 2 takes `min + 1` when
/// there are at least three fields, index 3 takes `max - 1` when there are at
/// least four; everything else is drawn uniformly from `[min, max]`.
pub fn synthesize_value(field: &Field, index: usize, field_count: usize, rng: &mut impl Rng) -> i64 {
    let min = i64::from(field.min);
    let max = i64::from(field.max);
    match index {
        0 => min,
        1 => max,
        2 if field_count > 2 => min + 1,
        3 if field_count > 3 => max - 1,
        _ => rng.gen_range(min..=max),
    }
}

/// Synthesize the inputs of test case `index` for every field, in field order.
pub fn synthesize_inputs(fields: &[Field], index: usize, rng: &mut impl Rng) -> Vec<i64> {
    fields
        .iter()
        .map(|field| synthesize_value(field, index, fields.len(), rng))
        .collect()
}

/// Classify one test case from its inputs. `inputs[i]` belongs to `fields[i]`.
pub fn classify(fields: &[Field], inputs: &[i64]) -> Classification {
    let mut on_boundary = false;
    for (field, &value) in fields.iter().zip(inputs) {
        if !field.contains(value) {
            return Classification::Abnormal;
        }
        on_boundary |= field.is_boundary(value);
    }
    if on_boundary {
        Classification::Boundary
    } else {
        Classification::Normal
    }
}

/// Outcome for a classification. Only Abnormal test cases fail; they get a
/// random `DF-<NNN>` defect id.
pub fn derive_outcome(classification: Classification, rng: &mut impl Rng) -> TestOutcome {
    match classification {
        Classification::Abnormal => {
            let number = rng.gen_range(DEFECT_NUMBER_RANGE);
            TestOutcome::failed(format!("DF-{}", number))
        }
        Classification::Boundary | Classification::Normal => TestOutcome::passed(),
    }
}
