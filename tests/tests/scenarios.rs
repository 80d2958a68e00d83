//! Reference scenarios for the matrix builder.

use tcgen_tests::prelude::*;

fn ids(list: &[TestCaseId]) -> Vec<String> {
    list.iter().map(|id| id.to_string()).collect()
}

mod single_field {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_test_cases() {
        let matrix = build_matrix(&age_spec(), &mut seeded_rng()).unwrap();
        assert_eq!(ids(&matrix.test_case_ids), vec!["UTCID01", "UTCID02"]);
        assert_matrix_invariants(&matrix);
    }

    #[test]
    fn test_value_rows() {
        let matrix = build_matrix(&age_spec(), &mut seeded_rng()).unwrap();
        let age = matrix.values_for("age").unwrap();
        assert_eq!(age.raw_values(), vec![9, 10, 11, 12, 14, 16, 17, 18, 19]);
    }

    #[test]
    fn test_age_defaults() {
        let matrix = build_matrix(&age_spec(), &mut seeded_rng()).unwrap();
        let returns: Vec<&str> = matrix.return_conditions.iter().map(|c| c.label.as_str()).collect();
        let logs: Vec<&str> = matrix.log_messages.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(returns, vec!["Valid age", "Age too young", "Age too old"]);
        assert_eq!(
            logs,
            vec!["Age is valid", "Age must be at least 10", "Age must not exceed 18"]
        );
        assert_eq!(ids(&matrix.return_conditions[0].test_cases), vec!["UTCID01"]);
        assert_eq!(ids(&matrix.return_conditions[1].test_cases), vec!["UTCID02"]);
    }
}

mod no_fields {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generic_defaults() {
        let matrix = build_matrix(&empty_spec(), &mut seeded_rng()).unwrap();
        assert_eq!(matrix.test_case_count(), 2);
        assert!(matrix.field_values.is_empty());
        let returns: Vec<&str> = matrix.return_conditions.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(returns, vec!["Valid result", "Invalid input", "Calculation error"]);
        assert_eq!(matrix.log_messages[0].label, "Operation successful");
        assert_matrix_invariants(&matrix);
    }

    #[test]
    fn test_everything_normal_and_passed() {
        let matrix = build_matrix(&empty_spec(), &mut seeded_rng()).unwrap();
        assert!(matrix.cases.iter().all(|c| c.classification == Classification::Normal));
        assert_eq!(matrix.summary.passed, 2);
    }
}

mod degenerate_range {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_set_collapses() {
        let spec = TestSpecification::new("ONE", "one").with_field(Field::int("level", 7, 7));
        let matrix = build_matrix(&spec, &mut seeded_rng()).unwrap();
        assert_eq!(matrix.field_values[0].raw_values(), vec![6, 7, 7, 8]);
        assert_matrix_invariants(&matrix);
    }
}

mod five_fields {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classification_and_outcomes() {
        let matrix = build_matrix(&wide_spec(5), &mut seeded_rng()).unwrap();
        assert_eq!(matrix.test_case_count(), 5);

        let kinds: Vec<Classification> = matrix.cases.iter().map(|c| c.classification).collect();
        assert_eq!(
            kinds,
            vec![
                Classification::Boundary,
                Classification::Boundary,
                Classification::Normal,
                Classification::Normal,
                Classification::Normal,
            ]
        );
        assert!(matrix.cases.iter().all(|c| c.outcome == TestOutcome::passed()));
        assert_eq!(matrix.summary.passed, 5);
        assert_eq!(matrix.summary.failed, 0);
        assert_matrix_invariants(&matrix);
    }

    #[test]
    fn test_invalid_values_only_reach_first_two_columns() {
        let matrix = build_matrix(&wide_spec(5), &mut seeded_rng()).unwrap();
        for fv in &matrix.field_values {
            for assignment in &fv.values {
                if !fv.field.contains(assignment.value) {
                    let id = assignment.assigned_test_cases.iter().next().unwrap();
                    assert!(id.index() < 2);
                }
            }
        }
    }
}

mod invalid {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inverted_range_is_rejected() {
        let spec = age_spec().with_field(Field::int("height", 200, 100));
        let err = build_matrix(&spec, &mut seeded_rng()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpecification);
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_duplicate_field_name_is_rejected() {
        let spec = TestSpecification::new("DUP", "dup")
            .with_field(Field::int("a", 0, 10))
            .with_field(Field::int("a", 20, 30));
        let err = build_matrix(&spec, &mut seeded_rng()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpecification);
        assert!(err.to_string().contains("`a`"));
    }
}

mod reproducibility {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identical_seed_identical_matrix() {
        let spec = wide_spec(8);
        let first = build_matrix(&spec, &mut seeded_rng()).unwrap();
        let second = build_matrix(&spec, &mut seeded_rng()).unwrap();
        assert_eq!(first, second);
    }
}
