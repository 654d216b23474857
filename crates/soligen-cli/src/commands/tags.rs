//! Implementation of the `soligen tags` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use soligen::resolver::ValueSource;
use soligen::Vocabulary;
use soligen_vocab::{resolve_tag, TagKind};

use crate::output::table::{format_tag_table, TagRow};

/// Arguments for the tags command.
#[derive(Debug, Args)]
pub struct TagsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one tag.
#[derive(Debug, Serialize)]
struct TagJson {
    name: String,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    placeholder: String,
}

/// Run the tags command.
pub fn run_tags(args: TagsArgs) -> Result<i32> {
    let rows: Vec<TagRow> = Vocabulary::builtin()
        .registry()
        .specs()
        .map(|spec| TagRow {
            name: spec.name.clone(),
            source: match spec.source {
                ValueSource::Taxonomy { .. } => "taxonomy",
                ValueSource::Synthetic { .. } => "synthetic",
            },
            category: match resolve_tag(&spec.name) {
                Some(TagKind::Taxonomy(category)) => Some(category.label()),
                Some(TagKind::Synthetic(_)) | None => None,
            },
        })
        .collect();

    if args.json {
        let json: Vec<TagJson> = rows
            .iter()
            .map(|row| TagJson {
                name: row.name.clone(),
                source: row.source,
                category: row.category,
                placeholder: format!("<|{}|>", row.name),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_tag_table(&rows));
    }

    Ok(exitcode::OK)
}
