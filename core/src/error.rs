//! Common error types for tcgen.

use thiserror::Error;

/// Errors that can occur while producing or rendering a test matrix.
#[derive(Debug, Error)]
pub enum TestGenError {
    /// The specification is malformed (bad range, unparseable input).
    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    /// A field declares `min > max`.
    #[error("Invalid specification: field `{field}` has min {min} greater than max {max}")]
    InvalidRange { field: String, min: i32, max: i32 },

    /// Two fields share a name.
    #[error("Invalid specification: field `{field}` is declared more than once")]
    DuplicateField { field: String },

    /// The spec source (generative service) produced nothing usable.
    #[error("Upstream generation failed: {0}")]
    UpstreamGeneration(String),

    /// The report renderer could not lay out or write the matrix.
    #[error("Rendering failed: {0}")]
    Rendering(String),
}

/// Coarse error category, used by callers to tell failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSpecification,
    UpstreamGeneration,
    Rendering,
}

impl TestGenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TestGenError::InvalidSpecification(_)
            | TestGenError::InvalidRange { .. }
            | TestGenError::DuplicateField { .. } => {
                ErrorKind::InvalidSpecification
            }
            TestGenError::UpstreamGeneration(_) => ErrorKind::UpstreamGeneration,
            TestGenError::Rendering(_) => ErrorKind::Rendering,
        }
    }

    pub fn is_invalid_specification(&self) -> bool {
        self.kind() == ErrorKind::InvalidSpecification
    }
}

impl From<std::io::Error> for TestGenError {
    fn from(e: std::io::Error) -> Self {
        TestGenError::Rendering(e.to_string())
    }
}

/// Result type for tcgen operations.
pub type TestGenResult<T> = Result<T, TestGenError>;
