//! Tests for the in-memory class graph.

#[expect(dead_code)]
mod common;

use std::io::Write;

use common::{SAMPLE_TAXONOMY, sample_graph};
use soligen::sources::{ClassGraph, ClassRecord, TaxonomyError, TaxonomyHandle};
use soligen_vocab::TaxonomyCategory;
use tempfile::NamedTempFile;

fn iris(members: &[&ClassRecord]) -> Vec<String> {
    members.iter().map(|class| class.iri.clone()).collect()
}

#[test]
fn sample_taxonomy_covers_every_category() {
    let graph = sample_graph();
    for category in TaxonomyCategory::ALL {
        assert!(
            !graph.list_members(category.tag_name(), 3).is_empty(),
            "{} has no members",
            category.tag_name()
        );
    }
}

#[test]
fn members_are_breadth_first_and_depth_limited() {
    let graph = ClassGraph::from_json_str(
        r#"{
        "categories": {"event": "ex:Event"},
        "classes": [
            {"iri": "ex:Event", "label": "Event"},
            {"iri": "ex:Hearing", "label": "Hearing", "sub_class_of": ["ex:Event"]},
            {"iri": "ex:Trial", "label": "Trial", "sub_class_of": ["ex:Event"]},
            {"iri": "ex:Sentencing", "label": "Sentencing Hearing", "sub_class_of": ["ex:Hearing"]},
            {"iri": "ex:Remand", "label": "Remand", "sub_class_of": ["ex:Sentencing", "ex:Trial"]}
        ]
    }"#,
    )
    .unwrap();

    assert!(graph.list_members("event", 0).is_empty());
    assert_eq!(
        iris(&graph.list_members("event", 1)),
        vec!["ex:Hearing", "ex:Trial"]
    );
    assert_eq!(
        iris(&graph.list_members("event", 2)),
        vec!["ex:Hearing", "ex:Trial", "ex:Sentencing", "ex:Remand"]
    );
    assert_eq!(graph.list_members("event", 16).len(), 4);
    assert!(graph.list_members("industry", 16).is_empty());
}

#[test]
fn label_choices_skip_missing_and_blank() {
    let class = ClassRecord {
        iri: "ex:Nda".to_string(),
        label: Some("Non-Disclosure Agreement".to_string()),
        preferred_label: Some(" ".to_string()),
        alternative_labels: vec!["NDA".to_string(), String::new()],
        ..ClassRecord::default()
    };
    assert_eq!(class.label_choices(), vec!["Non-Disclosure Agreement", "NDA"]);
    assert!(ClassRecord::default().label_choices().is_empty());
}

#[test]
fn category_names_are_normalized() {
    let graph = sample_graph();
    assert!(graph.category_root("forums_and_venues").is_some());
    assert!(graph.category_root("Forums and Venues").is_none());
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_TAXONOMY.as_bytes()).unwrap();

    let graph = ClassGraph::load(file.path()).unwrap();
    assert_eq!(graph.len(), sample_graph().len());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = ClassGraph::load(&path).unwrap_err();
    assert!(matches!(err, TaxonomyError::Io { path: ref p, .. } if p == &path));
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(matches!(
        ClassGraph::from_json_str("{\"classes\": 3}"),
        Err(TaxonomyError::Json { .. })
    ));
    assert!(matches!(
        ClassGraph::from_json_str(
            r#"{"classes": [{"iri": "ex:A"}, {"iri": "ex:A"}]}"#
        ),
        Err(TaxonomyError::DuplicateClass { iri }) if iri == "ex:A"
    ));
    assert!(matches!(
        ClassGraph::from_json_str(
            r#"{"classes": [{"iri": "ex:B", "sub_class_of": ["ex:Missing"]}]}"#
        ),
        Err(TaxonomyError::UnknownParent { iri, parent }) if iri == "ex:B" && parent == "ex:Missing"
    ));
    assert!(matches!(
        ClassGraph::from_json_str(r#"{"categories": {"event": "ex:Event"}}"#),
        Err(TaxonomyError::UnknownRoot { category, .. }) if category == "event"
    ));
}
