//! Boundary-value test matrix builder.
//!
//! Turns a [`TestSpecification`] into a [`TestMatrix`]:
//! - allocates the `UTCID` test case columns
//! - generates representative values per field and assigns them to columns
//! - resolves return conditions and log messages (with keyword defaults)
//! - classifies each test case and derives its outcome
//!
//! The build is pure apart from two random draws (interior sampling for
//! late test cases and defect ids), both taken from the caller's `Rng`.

pub mod builder;
pub mod classify;
pub mod conditions;
pub mod config;
pub mod ids;
pub mod values;

pub use builder::{build_matrix, TestMatrixBuilder};
pub use config::MatrixConfig;
pub use tcgen_core::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded entry point: owns the random source so repeated builds with the
/// same config are reproducible.
pub struct MatrixGenerator {
    pub config: MatrixConfig,
    pub rng: StdRng,
}

impl MatrixGenerator {
    pub fn new(config: MatrixConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Build the matrix for one specification.
    pub fn generate(&mut self, spec: &TestSpecification) -> Result<TestMatrix, TestGenError> {
        TestMatrixBuilder::new(spec).build(&mut self.rng)
    }
}
