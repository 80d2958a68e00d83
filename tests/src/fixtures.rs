//! Specification fixtures.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tcgen_core::{Field, TestSpecification};

/// Seed used when a test does not care about the exact random draws.
pub const TEST_SEED: u64 = 42;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

/// A single `age` field in `[10, 18]`.
pub fn age_spec() -> TestSpecification {
    TestSpecification::new("AGE_01", "validateAge")
        .with_created_by("Tester")
        .with_requirement("Validate that age is between 10 and 18")
        .with_field(Field::int("age", 10, 18))
}

/// No fields at all, and a requirement matching no keyword.
pub fn empty_spec() -> TestSpecification {
    TestSpecification::new("NOP_01", "noop").with_requirement("Do nothing useful")
}

/// `count` fields with ranges wide enough that random draws practically
/// never land on a boundary.
pub fn wide_spec(count: usize) -> TestSpecification {
    (0..count).fold(
        TestSpecification::new("WIDE", "wide").with_requirement("sum of inputs"),
        |spec, i| spec.with_field(Field::int(format!("in{}", i), -1_000_000, 1_000_000)),
    )
}
