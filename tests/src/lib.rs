//! Shared fixtures and invariant checks for the tcgen integration tests.

pub mod fixtures;
pub mod invariants;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::invariants::assert_matrix_invariants;
    pub use tcgen_core::*;
    pub use tcgen_matrix::build_matrix;
}
