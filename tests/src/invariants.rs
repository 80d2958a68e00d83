//! Structural checks every matrix must pass.

use tcgen_core::{TestMatrix, TestResult};

/// Panics with a descriptive message if `matrix` breaks a structural rule.
pub fn assert_matrix_invariants(matrix: &TestMatrix) {
    let count = matrix.test_case_count();
    let fields = matrix.specification.fields.len();

    assert_eq!(count, fields.max(2), "test case count");
    for (i, id) in matrix.test_case_ids.iter().enumerate() {
        assert_eq!(id.index(), i, "test case ids must be dense and ordered");
    }

    for fv in &matrix.field_values {
        let values = fv.raw_values();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "values of {} unsorted", fv.field.name);
        assert!(values.contains(&i64::from(fv.field.min)));
        assert!(values.contains(&i64::from(fv.field.max)));
        for assignment in &fv.values {
            assert_eq!(assignment.assigned_test_cases.len(), 1);
            for id in &assignment.assigned_test_cases {
                assert!(id.index() < count, "{} outside the matrix", id);
            }
        }
    }

    for conditions in [&matrix.return_conditions, &matrix.log_messages] {
        let mut covered: Vec<usize> = conditions
            .iter()
            .flat_map(|c| c.test_cases.iter().map(|id| id.index()))
            .collect();
        covered.sort_unstable();
        if !conditions.is_empty() {
            assert_eq!(covered, (0..count).collect::<Vec<_>>(), "round robin coverage");
        }
    }

    assert_eq!(matrix.cases.len(), count);
    for case in &matrix.cases {
        assert_eq!(case.inputs.len(), fields);
        assert_eq!(
            case.outcome.defect_id.is_some(),
            case.outcome.result == TestResult::Failed,
            "defect id iff failed"
        );
    }

    let s = &matrix.summary;
    assert_eq!(s.total, count);
    assert_eq!(s.passed + s.failed + s.untested, count);
    assert_eq!(s.normal + s.abnormal + s.boundary, count);
}
