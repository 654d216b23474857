//! Implementation of the `soligen generate` command.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;
use soligen::llm::{AnnotatedTextGenerator, GenerateError, ModelSpec, TextGenerator};
use soligen::{AnnotatedText, GeneratorConfig, TemplateFormatter};
use tracing::{info, warn};

use super::{load_taxonomy, random_sources};

/// Kind of sample to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationType {
    /// Plain text from random background facts
    Text,
    /// Text with spans for every sampled value
    Annotated,
}

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Taxonomy document (JSON)
    #[arg(long, env = "SOLIGEN_TAXONOMY")]
    pub taxonomy: PathBuf,

    /// Model to use: vllm[:name], openai[:name], or anthropic[:name]
    #[arg(long, default_value = "vllm")]
    pub model: String,

    /// Kind of sample to generate
    #[arg(long = "type", value_enum, default_value_t = GenerationType::Annotated)]
    pub generation_type: GenerationType,

    /// JSONL file to append samples to
    #[arg(long, default_value = "output.jsonl")]
    pub output: PathBuf,

    /// Number of samples to generate
    #[arg(long, default_value_t = 10)]
    pub samples: usize,

    /// Generator configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible prompts and sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One line of output.
#[derive(Serialize)]
#[serde(untagged)]
enum GeneratedSample {
    Text { text: String },
    Annotated(AnnotatedText),
}

/// Produces one sample per call.
trait SampleSource {
    fn next_sample(&mut self) -> Result<GeneratedSample, GenerateError>;
}

impl SampleSource for TextGenerator<'_> {
    fn next_sample(&mut self) -> Result<GeneratedSample, GenerateError> {
        Ok(GeneratedSample::Text {
            text: self.generate()?,
        })
    }
}

impl SampleSource for AnnotatedTextGenerator<'_> {
    fn next_sample(&mut self) -> Result<GeneratedSample, GenerateError> {
        Ok(GeneratedSample::Annotated(self.generate()?))
    }
}

/// Run the generate command.
///
/// Each sample is independent: a failed sample is logged and skipped.
pub fn run_generate(args: GenerateArgs) -> miette::Result<i32> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path).map_err(|e| miette!("{}", e))?,
        None => GeneratorConfig::default(),
    };
    config.validate().map_err(|e| miette!("{}", e))?;

    let spec = ModelSpec::parse(&args.model).map_err(|e| miette!("{}", e))?;
    let model = spec.build().map_err(|e| miette!("{}", e))?;
    let graph = load_taxonomy(&args.taxonomy)?;

    let (rng, records) = random_sources(args.seed);
    let formatter = TemplateFormatter::builder()
        .taxonomy(&graph)
        .records(Box::new(records))
        .rng(Box::new(rng))
        .max_depth(config.max_depth)
        .build();

    let mut generator: Box<dyn SampleSource + '_> = match args.generation_type {
        GenerationType::Text => Box::new(
            TextGenerator::builder()
                .model(model.as_ref())
                .formatter(formatter)
                .config(config)
                .build(),
        ),
        GenerationType::Annotated => Box::new(
            AnnotatedTextGenerator::builder()
                .model(model.as_ref())
                .formatter(formatter)
                .config(config)
                .build(),
        ),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.output)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot open {}: {}", args.output.display(), e))?;
    let mut writer = BufWriter::new(file);

    let mut written = 0;
    for index in 0..args.samples {
        let sample = match generator.next_sample() {
            Ok(sample) => sample,
            Err(e) => {
                warn!(sample = index, error = %e, "skipping failed sample");
                continue;
            }
        };
        serde_json::to_writer(&mut writer, &sample).into_diagnostic()?;
        writeln!(writer).into_diagnostic()?;
        writer.flush().into_diagnostic()?;
        written += 1;
        info!(sample = index, "wrote sample");
    }

    eprintln!(
        "Wrote {} of {} sample(s) to {}",
        written,
        args.samples,
        args.output.display()
    );
    Ok(exitcode::OK)
}
