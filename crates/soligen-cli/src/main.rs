//! soligen CLI entry point.
//!
//! Provides command-line tools for working with soligen templates:
//! - `soligen format` - Fill a template from a taxonomy
//! - `soligen check` - Lint template files
//! - `soligen tags` - List recognized tags
//! - `soligen generate` - Generate a JSONL corpus with a text model

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_format, run_generate, run_tags, CheckArgs, FormatArgs, GenerateArgs, TagsArgs,
};
use tracing_subscriber::EnvFilter;

/// Synthetic legal text tools.
#[derive(Debug, Parser)]
#[command(name = "soligen")]
#[command(about = "Template-driven synthetic legal text tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill a template with values sampled from a taxonomy
    Format(FormatArgs),
    /// Lint template files for placeholders that will not be substituted
    Check(CheckArgs),
    /// List the recognized tags
    Tags(TagsArgs),
    /// Generate text samples with a language model
    Generate(GenerateArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {}
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(stderr)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Format(args) => run_format(args),
        Commands::Check(args) => run_check(args),
        Commands::Tags(args) => run_tags(args),
        Commands::Generate(args) => run_generate(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
