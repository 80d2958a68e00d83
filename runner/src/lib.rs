//! Runner for tcgen.
//!
//! Reads a specification (direct JSON, generated text, or a raw response
//! envelope), builds the matrix with a seeded random source and writes the
//! report.

pub mod config;
pub mod run;

pub use config::{FormatName, RunnerConfig};
pub use run::{load_specification, run_build, BuildOutput, SpecInput};
