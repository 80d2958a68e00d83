//! Configuration for matrix generation

/// Configuration for matrix generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl MatrixConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// A config with a fresh random seed. The seed is kept so the run can be
    /// reproduced later.
    pub fn from_entropy() -> Self {
        Self {
            seed: rand::random(),
        }
    }
}
