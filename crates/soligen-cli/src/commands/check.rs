//! Implementation of the `soligen check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use soligen::{lint_template, Vocabulary};

use crate::output::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Template files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one warning.
#[derive(Debug, Serialize)]
struct WarningJson {
    file: String,
    start: usize,
    end: usize,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

/// Run the check command.
///
/// Exits with `DATAERR` if any file has warnings.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let vocabulary = Vocabulary::builtin();
    let mut json_warnings = Vec::new();
    let mut total = 0;

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))?;

        let warnings = lint_template(&content, vocabulary);
        total += warnings.len();

        if args.json {
            json_warnings.extend(warnings.iter().map(|warning| {
                let range = warning.range();
                WarningJson {
                    file: path.display().to_string(),
                    start: range.start,
                    end: range.end,
                    message: warning.to_string(),
                    help: warning.help(),
                }
            }));
        } else if warnings.is_empty() {
            println!("{} {}", "ok".green(), path.display());
        } else {
            for warning in &warnings {
                let diagnostic = TemplateDiagnostic::from_warning(path, &content, warning);
                eprintln!("{:?}", Report::new(diagnostic));
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_warnings).into_diagnostic()?);
    } else if total > 0 {
        eprintln!(
            "{}",
            format!("{} warning(s) in {} file(s)", total, args.files.len()).yellow()
        );
    }

    if total > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
