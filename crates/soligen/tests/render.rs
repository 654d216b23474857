//! Tests for substitution over hand-built value maps.

use chrono::NaiveDate;
use soligen::render::{annotate, substitute};
use soligen::resolver::ValueMap;
use soligen::{Occurrence, Sample, Vocabulary};

fn values() -> ValueMap {
    let mut values = ValueMap::new();
    values.insert(
        Occurrence::keyed("company", "1"),
        Sample::new("Acme LLC", "company"),
    );
    values.insert(
        Occurrence::keyed("company", "2"),
        Sample::new("Globex Corp", "company"),
    );
    values.insert(
        Occurrence::new("date"),
        Sample::new(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(), "date:past"),
    );
    values
}

#[test]
fn replacement_is_keyed_on_the_exact_placeholder() {
    let grammar = Vocabulary::builtin().grammar();
    let text = substitute(
        "<|company:2|> acquired <|company:1|> on <|date|>.",
        grammar,
        &values(),
    );
    assert_eq!(text, "Globex Corp acquired Acme LLC on 2023-11-02.");
}

#[test]
fn placeholders_without_values_pass_through() {
    let grammar = Vocabulary::builtin().grammar();
    let template = "<|company:1|> and <|company:3|> and <|company|>";
    assert_eq!(
        substitute(template, grammar, &values()),
        "Acme LLC and <|company:3|> and <|company|>"
    );

    let annotated = annotate(template, grammar, &values());
    assert_eq!(annotated.text, "Acme LLC and <|company:3|> and <|company|>");
    assert_eq!(annotated.spans.len(), 1);
}

#[test]
fn annotate_tracks_output_coordinates() {
    let grammar = Vocabulary::builtin().grammar();
    let annotated = annotate(
        "<|date|>: <|company:1|> v. <|company:2|>",
        grammar,
        &values(),
    );

    assert_eq!(annotated.text, "2023-11-02: Acme LLC v. Globex Corp");
    let coordinates: Vec<_> = annotated
        .spans
        .iter()
        .map(|span| (span.start, span.end, span.class_identity.as_str()))
        .collect();
    assert_eq!(
        coordinates,
        vec![(0, 10, "date:past"), (12, 20, "company"), (24, 35, "company")]
    );
}

#[test]
fn annotated_text_serializes_spans() {
    let grammar = Vocabulary::builtin().grammar();
    let annotated = annotate("By <|company:1|>", grammar, &values());
    let json = serde_json::to_value(&annotated).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "text": "By Acme LLC",
            "spans": [{
                "start": 3,
                "end": 11,
                "tag": "company",
                "class_identity": "company",
                "text": "Acme LLC"
            }]
        })
    );
}
