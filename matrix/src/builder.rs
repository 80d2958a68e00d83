//! Matrix assembly.

use crate::classify::{classify, derive_outcome, synthesize_inputs};
use crate::conditions::{assign_conditions, resolve_log_messages, resolve_return_conditions};
use crate::ids::allocate_test_case_ids;
use crate::values::generate_field_values;
use rand::Rng;
use tcgen_core::{MatrixSummary, TestCase, TestGenResult, TestMatrix, TestSpecification};
use tracing::info;

/// Builds one [`TestMatrix`] from a specification.
pub struct TestMatrixBuilder<'a> {
    spec: &'a TestSpecification,
}

impl<'a> TestMatrixBuilder<'a> {
    pub fn new(spec: &'a TestSpecification) -> Self {
        Self { spec }
    }

    /// Validate the specification and build the matrix.
    ///
    /// Fails with an invalid-specification error before doing any work if a
    /// field has `min > max`.
    pub fn build(&self, rng: &mut impl Rng) -> TestGenResult<TestMatrix> {
        self.spec.validate()?;

        let fields = &self.spec.fields;

        // 1. Test case columns
        let test_case_ids = allocate_test_case_ids(fields.len());

        // 2. Representative values
        let field_values = fields.iter().map(generate_field_values).collect();

        // 3-4. Conditions and messages
        let return_conditions =
            assign_conditions(resolve_return_conditions(self.spec), &test_case_ids);
        let log_messages = assign_conditions(resolve_log_messages(self.spec), &test_case_ids);

        // 5. Synthesize all inputs first, then classify and derive outcomes
        let inputs: Vec<Vec<i64>> = (0..test_case_ids.len())
            .map(|index| synthesize_inputs(fields, index, rng))
            .collect();

        let cases: Vec<TestCase> = test_case_ids
            .iter()
            .zip(inputs)
            .map(|(&id, inputs)| {
                let classification = classify(fields, &inputs);
                let outcome = derive_outcome(classification, rng);
                TestCase {
                    id,
                    inputs,
                    classification,
                    outcome,
                }
            })
            .collect();

        let summary = MatrixSummary::from_cases(&cases);

        info!(
            function = %self.spec.function_code,
            fields = fields.len(),
            test_cases = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "built test matrix"
        );

        Ok(TestMatrix {
            specification: self.spec.clone(),
            test_case_ids,
            field_values,
            return_conditions,
            log_messages,
            cases,
            summary,
        })
    }
}

/// Convenience wrapper around [`TestMatrixBuilder`].
pub fn build_matrix(spec: &TestSpecification, rng: &mut impl Rng) -> TestGenResult<TestMatrix> {
    TestMatrixBuilder::new(spec).build(rng)
}
