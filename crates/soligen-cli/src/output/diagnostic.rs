//! Miette diagnostic wrapper for template lint warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use soligen::TemplateWarning;
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for one template warning.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(soligen::template), severity(Warning))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("not substituted")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic pointing at the offending placeholder.
    pub fn from_warning(path: &Path, content: &str, warning: &TemplateWarning) -> Self {
        let range = warning.range();
        let start = range.start.min(content.len());
        let len = range.end.min(content.len()).saturating_sub(start);

        TemplateDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (start, len).into(),
            message: warning.to_string(),
            help: warning.help(),
        }
    }
}
