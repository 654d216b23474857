//! Implementation of the `soligen format` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;
use soligen::{TemplateFormatter, DEFAULT_MAX_DEPTH};

use super::{load_taxonomy, random_sources};
use crate::output::table::format_span_table;

/// Arguments for the format command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Taxonomy document (JSON)
    #[arg(long, env = "SOLIGEN_TAXONOMY")]
    pub taxonomy: PathBuf,

    /// Template string to format
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub template: Option<String>,

    /// File containing the template
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Also report the span of every substituted value
    #[arg(long)]
    pub spans: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Depth limit when listing taxonomy category members
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

/// JSON output for plain formatting.
#[derive(Serialize)]
struct FormatResult {
    text: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let template = match (&args.template, &args.file) {
        (Some(template), _) => template.clone(),
        (None, Some(file)) => read_to_string(file)
            .into_diagnostic()
            .map_err(|e| miette!("Cannot read template file {}: {}", file.display(), e))?,
        (None, None) => return Err(miette!("either --template or --file is required")),
    };

    let graph = load_taxonomy(&args.taxonomy)?;
    let (rng, records) = random_sources(args.seed);
    let mut formatter = TemplateFormatter::builder()
        .taxonomy(&graph)
        .records(Box::new(records))
        .rng(Box::new(rng))
        .max_depth(args.max_depth)
        .build();

    let outcome = if args.spans {
        formatter.format_spans(&template).map(|annotated| {
            if args.json {
                serde_json::to_string_pretty(&annotated).into_diagnostic()
            } else {
                Ok(format!(
                    "{}\n\n{}",
                    annotated.text,
                    format_span_table(&annotated.spans)
                ))
            }
        })
    } else {
        formatter.format(&template).map(|text| {
            if args.json {
                serde_json::to_string_pretty(&FormatResult { text }).into_diagnostic()
            } else {
                Ok(text)
            }
        })
    };

    match outcome {
        Ok(rendered) => {
            println!("{}", rendered?);
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Formatting error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
