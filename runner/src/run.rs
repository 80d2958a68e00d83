//! The `build` pipeline: load, build, render, write.

use crate::config::RunnerConfig;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tcgen_core::{MatrixSummary, TestSpecification};
use tcgen_matrix::{MatrixConfig, MatrixGenerator};
use tcgen_report::{render, report_file_name, RenderOptions, ReportFormat, ReportKind};
use tcgen_source::{specification_from_generated, specification_from_json, GenerationEnvelope};
use tracing::{debug, info};

/// How the specification file is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecInput {
    /// A specification JSON document.
    #[default]
    Json,
    /// Generated text with the JSON object embedded somewhere in it.
    Generated,
    /// The raw response body of the generative service.
    Envelope,
}

/// Parse a specification from `source`.
pub fn parse_specification(source: &str, input: SpecInput) -> Result<TestSpecification> {
    let spec = match input {
        SpecInput::Json => specification_from_json(source)?,
        SpecInput::Generated => specification_from_generated(source)?,
        SpecInput::Envelope => {
            let envelope = GenerationEnvelope::from_json(source)?;
            specification_from_generated(envelope.generated_text()?)?
        }
    };
    Ok(spec)
}

/// Read and parse the specification at `path`.
pub fn load_specification(path: &Path, input: SpecInput) -> Result<TestSpecification> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read specification {}", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), ?input, "read specification");
    parse_specification(&source, input)
        .with_context(|| format!("failed to load specification {}", path.display()))
}

/// What a build run produced.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub report_path: PathBuf,
    pub seed: u64,
    pub summary: MatrixSummary,
}

/// Build the matrix for `spec` and write the report into the configured
/// output directory. `kind` picks the file prefix; `now` stamps both the file
/// name and the executed date.
pub fn run_build(
    mut spec: TestSpecification,
    kind: ReportKind,
    config: &RunnerConfig,
    now: NaiveDateTime,
) -> Result<BuildOutput> {
    if let Some(executed_by) = &config.executed_by {
        spec.executed_by = Some(executed_by.clone());
    }

    let matrix_config = match config.seed {
        Some(seed) => MatrixConfig::default().with_seed(seed),
        None => MatrixConfig::from_entropy(),
    };
    let seed = matrix_config.seed;
    info!(seed, function = %spec.function_code, "building test matrix");

    let mut generator = MatrixGenerator::new(matrix_config);
    let matrix = generator.generate(&spec)?;

    let format: ReportFormat = config.format.into();
    let options = RenderOptions::default()
        .with_marker(config.marker.as_str())
        .with_executed_at(now);
    let content = render(&matrix, format, &options)?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;
    let report_path = config
        .output_dir
        .join(report_file_name(&matrix, kind, format, now));
    fs::write(&report_path, content)
        .with_context(|| format!("failed to write report {}", report_path.display()))?;

    info!(path = %report_path.display(), "wrote report");

    Ok(BuildOutput {
        report_path,
        seed,
        summary: matrix.summary,
    })
}
