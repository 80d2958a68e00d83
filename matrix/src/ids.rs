//! Test case id allocation.

use tcgen_core::TestCaseId;

/// Every matrix has at least this many test cases.
pub const MIN_TEST_CASES: usize = 2;

/// Number of test cases for a specification with `field_count` fields.
pub fn test_case_count(field_count: usize) -> usize {
    field_count.max(MIN_TEST_CASES)
}

/// Allocate `UTCID01 ..= UTCID<count>` for `field_count` fields.
pub fn allocate_test_case_ids(field_count: usize) -> Vec<TestCaseId> {
    (0..test_case_count(field_count))
        .map(TestCaseId::from_index)
        .collect()
}
