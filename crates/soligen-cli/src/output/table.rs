//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use soligen::Span;

/// One row of the tag listing.
pub struct TagRow {
    /// Normalized tag name.
    pub name: String,
    /// Value source kind ("taxonomy" or "synthetic").
    pub source: &'static str,
    /// Taxonomy category label, for taxonomy-backed tags.
    pub category: Option<&'static str>,
}

/// Format the recognized tags as an ASCII table.
pub fn format_tag_table(rows: &[TagRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Placeholder", "Source", "Category"]);

    for row in rows {
        table.add_row(vec![
            format!("<|{}|>", row.name),
            row.source.to_string(),
            row.category.unwrap_or("").to_string(),
        ]);
    }

    table
}

/// Format the spans of an annotated text as an ASCII table.
pub fn format_span_table(spans: &[Span]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Range", "Tag", "Text", "Identity"]);

    for span in spans {
        table.add_row(vec![
            format!("{}..{}", span.start, span.end),
            span.tag.clone(),
            span.text.clone(),
            span.class_identity.clone(),
        ]);
    }

    table
}
