//! Response envelope of the generative service.
//!
//! Only the first part of the first candidate carries the generated text:
//! `{"candidates": [{"content": {"parts": [{"text": "..."}]}}]}`.

use serde::Deserialize;
use tcgen_core::{TestGenError, TestGenResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationEnvelope {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

impl GenerationEnvelope {
    /// Decode a raw response body.
    pub fn from_json(body: &str) -> TestGenResult<Self> {
        serde_json::from_str(body).map_err(|e| {
            TestGenError::UpstreamGeneration(format!("undecodable response envelope: {}", e))
        })
    }

    /// Text of the first part of the first candidate.
    pub fn generated_text(&self) -> TestGenResult<&str> {
        let candidate = self.candidates.first().ok_or_else(|| {
            TestGenError::UpstreamGeneration("No candidates found in response".to_string())
        })?;
        candidate
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                TestGenError::UpstreamGeneration("First candidate has no content parts".to_string())
            })
    }
}
