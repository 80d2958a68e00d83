//! tcgen Core Types
//!
//! This crate provides the types shared by every tcgen component:
//! - Specification types (Field, FieldType, TestSpecification)
//! - Identity types (TestCaseId)
//! - Matrix types (ValueAssignment, Classification, TestOutcome, TestMatrix)
//! - Common error types

mod error;
mod id;
mod matrix;
mod spec;

pub use error::*;
pub use id::*;
pub use matrix::*;
pub use spec::*;
