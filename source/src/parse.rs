//! Specification parsing.
//!
//! Generated text often wraps the JSON in prose or code fences, so the
//! object is cut out from the first `{` to the last `}` before decoding.
//! Failures on generated text are upstream errors; failures on direct user
//! input are specification errors.

use tcgen_core::{TestGenError, TestGenResult, TestSpecification};
use tracing::{debug, warn};

/// Slice `text` from the first `{` through the last `}`.
pub fn extract_json_object(text: &str) -> TestGenResult<&str> {
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(&text[start..=end]),
        _ => Err(TestGenError::UpstreamGeneration(format!(
            "Could not extract JSON from generated text. Raw response: {}",
            text
        ))),
    }
}

/// Parse and validate a specification from generated text.
pub fn specification_from_generated(text: &str) -> TestGenResult<TestSpecification> {
    let json = extract_json_object(text)?;
    let spec: TestSpecification = serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "generated specification did not decode");
        TestGenError::UpstreamGeneration(format!(
            "Error parsing generated specification: {}. Raw response: {}",
            e, text
        ))
    })?;
    spec.validate()?;
    debug!(
        function = %spec.function_code,
        fields = spec.fields.len(),
        "parsed generated specification"
    );
    Ok(spec)
}

/// Parse and validate a specification supplied directly as JSON.
pub fn specification_from_json(json: &str) -> TestGenResult<TestSpecification> {
    let spec: TestSpecification = serde_json::from_str(json)
        .map_err(|e| TestGenError::InvalidSpecification(format!("malformed JSON: {}", e)))?;
    spec.validate()?;
    Ok(spec)
}
