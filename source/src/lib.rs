//! Spec source for tcgen.
//!
//! The generative service itself is reached by the caller; this crate covers
//! the offline half of that exchange:
//! - building the generation prompt for a free-text requirement or a use case
//! - decoding the service's response envelope
//! - pulling the JSON object out of generated text and validating it
//! - parsing specifications supplied directly by a user

pub mod envelope;
pub mod parse;
pub mod prompt;

pub use envelope::GenerationEnvelope;
pub use parse::{extract_json_object, specification_from_generated, specification_from_json};
pub use prompt::{build_prompt, build_use_case_prompt, GenerationRequest, UseCaseRequest};
