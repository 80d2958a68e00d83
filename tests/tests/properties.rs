//! Property tests over arbitrary specifications.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tcgen_matrix::conditions::round_robin;
use tcgen_tests::prelude::*;

fn field() -> impl Strategy<Value = Field> {
    (any::<i32>(), any::<i32>(), "[a-z]{1,8}").prop_map(|(a, b, name)| {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Field::int(name, min, max)
    })
}

fn spec() -> impl Strategy<Value = TestSpecification> {
    (prop::collection::vec(field(), 0..12), "[a-z ]{0,30}").prop_map(|(fields, requirement)| {
        // Field names must be unique; suffix each with its position.
        fields
            .into_iter()
            .enumerate()
            .map(|(i, field)| Field {
                name: format!("{}{}", field.name, i),
                ..field
            })
            .fold(
                TestSpecification::new("PROP", "prop").with_requirement(requirement),
                TestSpecification::with_field,
            )
    })
}

proptest! {
    #[test]
    fn matrix_invariants_hold(spec in spec(), seed in any::<u64>()) {
        let matrix = build_matrix(&spec, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_matrix_invariants(&matrix);
    }

    #[test]
    fn out_of_range_neighbours_present_unless_overflowing(f in field()) {
        let spec = TestSpecification::new("P", "p").with_field(f.clone());
        let matrix = build_matrix(&spec, &mut StdRng::seed_from_u64(0)).unwrap();
        let values = matrix.field_values[0].raw_values();
        prop_assert_eq!(values.contains(&(i64::from(f.min) - 1)), f.min > i32::MIN);
        prop_assert_eq!(values.contains(&(i64::from(f.max) + 1)), f.max < i32::MAX);
    }

    #[test]
    fn round_robin_counts(n in 1usize..10, c in 0usize..40) {
        let slots = round_robin(n, c);
        prop_assert_eq!(slots.len(), n);
        for (i, slot) in slots.iter().enumerate() {
            let expected = if c > i { (c - i + n - 1) / n } else { 0 };
            prop_assert_eq!(slot.len(), expected);
        }
        let mut all: Vec<usize> = slots.into_iter().flatten().collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..c).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_matrix(spec in spec(), seed in any::<u64>()) {
        let first = build_matrix(&spec, &mut StdRng::seed_from_u64(seed)).unwrap();
        let second = build_matrix(&spec, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
