//! tcgen - boundary-value test matrix generator
//!
//! Usage:
//!   tcgen build --spec <FILE> [--generated | --envelope] [--seed N] [--format csv|text|json]
//!   tcgen prompt <REQUIREMENT>
//!   tcgen prompt --use-case <NAME> [--context <TEXT>]

use anyhow::Result;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tcgen_report::ReportKind;
use tcgen_runner::{load_specification, run_build, FormatName, RunnerConfig, SpecInput};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tcgen")]
#[command(author, version, about = "Boundary-value test matrix generator")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a test matrix from a specification and write the report
    Build(BuildArgs),
    /// Print the generation prompt for a requirement or a use case
    Prompt {
        /// The requirement, e.g. "age must be between 10 and 18", or the
        /// use-case name with --use-case
        text: String,

        /// Treat the text as a use-case name, e.g. "User Login"
        #[arg(long)]
        use_case: bool,

        /// Additional context for a use case
        #[arg(long, requires = "use_case")]
        context: Option<String>,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Specification file
    #[arg(short, long)]
    spec: PathBuf,

    /// The file is generated text with an embedded JSON object
    #[arg(long, conflicts_with = "envelope")]
    generated: bool,

    /// The file is a raw generative-service response body
    #[arg(long)]
    envelope: bool,

    /// Runner configuration (TOML)
    #[arg(short, long, env = "TCGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<FormatName>,

    /// Output directory for reports
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name shown in the "Executed By" header
    #[arg(long)]
    executed_by: Option<String>,

    /// The specification was generated from a use case
    #[arg(long)]
    use_case: bool,
}

impl BuildArgs {
    fn input(&self) -> SpecInput {
        if self.envelope {
            SpecInput::Envelope
        } else if self.generated {
            SpecInput::Generated
        } else {
            SpecInput::Json
        }
    }

    fn kind(&self) -> ReportKind {
        if self.use_case {
            ReportKind::UseCase
        } else {
            ReportKind::TestCases
        }
    }

    fn apply(&self, mut config: RunnerConfig) -> RunnerConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if self.executed_by.is_some() {
            config.executed_by = self.executed_by.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Command::Build(args) => build(args),
        Command::Prompt {
            text,
            use_case,
            context,
        } => {
            let prompt = if use_case {
                tcgen_source::build_use_case_prompt(&text, context.as_deref())
            } else {
                tcgen_source::build_prompt(&text)
            };
            println!("{}", prompt);
            Ok(())
        }
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config = args.apply(RunnerConfig::load_or_default(args.config.as_deref())?);
    let spec = load_specification(&args.spec, args.input())?;
    info!(
        "Loaded {} ({} fields)",
        spec.function_code,
        spec.fields.len()
    );

    let output = run_build(spec, args.kind(), &config, Local::now().naive_local())?;
    let summary = output.summary;

    println!("Report: {}", output.report_path.display());
    println!("Seed:   {}", output.seed);
    println!(
        "Result: {}/{} passed, {} failed ({} normal, {} abnormal, {} boundary)",
        summary.passed, summary.total, summary.failed, summary.normal, summary.abnormal, summary.boundary
    );
    Ok(())
}
