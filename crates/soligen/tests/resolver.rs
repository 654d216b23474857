//! Tests for value resolution and the tag registry.

#[expect(dead_code)]
mod common;

use common::{CountingRecords, EmptyTaxonomy, StubRecords, single_member_graph};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use soligen::resolver::{
    ResolveError, SampleContext, TagRegistry, TagSpec, ValueSource, Vocabulary, resolve,
};
use soligen::template::OccurrenceSet;
use soligen::{
    Occurrence, RegistryError, Sample, TemplateFormatter, Value, compute_suggestions,
};

fn occurrences(items: &[Occurrence]) -> OccurrenceSet {
    items.iter().cloned().collect()
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn one_value_per_occurrence() {
    let graph = single_member_graph();
    let mut records = CountingRecords::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let set = occurrences(&[
        Occurrence::keyed("name", "1"),
        Occurrence::keyed("name", "2"),
        Occurrence::new("name"),
    ]);
    let values = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap();

    assert_eq!(values.len(), 3);
    assert_eq!(
        values.get(&Occurrence::keyed("name", "1")).unwrap().value,
        Value::from("Name 1")
    );
    assert_eq!(
        values.get(&Occurrence::keyed("name", "2")).unwrap().value,
        Value::from("Name 2")
    );
    assert_eq!(
        values.get(&Occurrence::new("name")).unwrap().value,
        Value::from("Name 3")
    );
    assert_eq!(records.calls, 3);
}

#[test]
fn taxonomy_samples_carry_class_identity() {
    let graph = single_member_graph();
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let set = occurrences(&[Occurrence::new("industry")]);
    let values = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap();
    let sample = values.get(&Occurrence::new("industry")).unwrap();

    assert_eq!(sample, &Sample::new("Legal Services", "ex:Legal"));
}

#[test]
fn synthetic_samples_carry_field_identity() {
    let graph = EmptyTaxonomy;
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let set = occurrences(&[Occurrence::new("address"), Occurrence::new("time")]);
    let values = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap();

    let address = values.get(&Occurrence::new("address")).unwrap();
    assert_eq!(address.value.to_string(), "123 Main St");
    assert_eq!(address.identity, "address");
    let time = values.get(&Occurrence::new("time")).unwrap();
    assert_eq!(time.value.to_string(), "09:30:00");
}

#[test]
fn dates_pick_one_of_three_variants() {
    let graph = EmptyTaxonomy;
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(3);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let set: OccurrenceSet = (0..30)
        .map(|i| Occurrence::keyed("date", i.to_string()))
        .collect();
    let values = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap();

    for (_, sample) in values.iter() {
        let expected = match sample.identity.as_str() {
            "date:past" => "2024-01-15",
            "date:future" => "2024-03-15",
            "date:this_decade" => "2021-06-01",
            other => panic!("unexpected identity {other}"),
        };
        assert_eq!(sample.value.to_string(), expected);
        assert!(sample.value.as_date().is_some());
    }
}

#[test]
fn empty_template_resolves_to_empty_map() {
    let graph = EmptyTaxonomy;
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let values = resolve(
        &OccurrenceSet::new(),
        Vocabulary::builtin().registry(),
        &mut ctx,
    )
    .unwrap();
    assert!(values.is_empty());
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn unknown_tag_suggests_close_names() {
    let graph = EmptyTaxonomy;
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let set = occurrences(&[Occurrence::new("industy")]);
    let err = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap_err();
    match &err {
        ResolveError::UnknownTag { tag, suggestions } => {
            assert_eq!(tag, "industy");
            assert_eq!(suggestions, &vec!["industry".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "unknown tag 'industy', did you mean: industry?"
    );
}

#[test]
fn unknown_category_is_empty() {
    let graph = EmptyTaxonomy;
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::with_max_depth(&graph, &mut records, &mut rng, 4);

    let set = occurrences(&[Occurrence::new("currency")]);
    let err = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::EmptyCategory { ref category, max_depth: 4 } if category == "currency"
    ));
}

#[test]
fn zero_depth_lists_no_members() {
    let graph = single_member_graph();
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::with_max_depth(&graph, &mut records, &mut rng, 0);

    let set = occurrences(&[Occurrence::new("industry")]);
    let err = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap_err();
    assert!(matches!(err, ResolveError::EmptyCategory { .. }));
}

#[test]
fn blank_labels_are_an_empty_label_set() {
    let graph = single_member_graph();
    let mut records = StubRecords;
    let mut rng = StdRng::seed_from_u64(1);
    let mut ctx = SampleContext::new(&graph, &mut records, &mut rng);

    let set = occurrences(&[Occurrence::new("area_of_law")]);
    let err = resolve(&set, Vocabulary::builtin().registry(), &mut ctx).unwrap_err();
    match err {
        ResolveError::EmptyLabelSet { tag, iri } => {
            assert_eq!(tag, "area_of_law");
            assert_eq!(iri, "ex:Unlabeled");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn builtin_registry_lists_categories_then_fields() {
    let registry = TagRegistry::builtin();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(registry.len(), 34);
    assert_eq!(names.first(), Some(&"actor_player"));
    assert_eq!(names.last(), Some(&"job"));
    assert_eq!(
        registry.get("service").unwrap().source,
        ValueSource::Taxonomy {
            category: "service".to_string()
        }
    );
    assert_eq!(registry.get("email").unwrap().source.category(), None);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = TagRegistry::builtin();
    let err = registry.register(TagSpec::taxonomy("Industry")).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateTag { name } if name == "industry"));
}

fn sample_docket(
    spec: &TagSpec,
    ctx: &mut SampleContext<'_>,
) -> Result<Sample, ResolveError> {
    let number = ctx.rng().gen_range(1000..10000);
    Ok(Sample::new(format!("No. {number}"), spec.name.as_str()))
}

#[test]
fn custom_tags_extend_the_grammar() {
    let mut registry = TagRegistry::builtin();
    registry
        .register(TagSpec::custom(
            "Docket Number",
            ValueSource::Synthetic {
                field: "docket".to_string(),
            },
            sample_docket,
        ))
        .unwrap();
    let vocabulary = Vocabulary::new(registry).unwrap();
    assert!(vocabulary.grammar().is_match("<|docket_number:1|>"));

    let graph = EmptyTaxonomy;
    let mut formatter = TemplateFormatter::builder()
        .taxonomy(&graph)
        .vocabulary(&vocabulary)
        .records(Box::new(StubRecords))
        .rng(Box::new(StdRng::seed_from_u64(9)))
        .build();
    let text = formatter.format("Case <|docket_number|>").unwrap();
    assert!(text.starts_with("Case No. "), "{text}");
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggestions_respect_distance_budget() {
    let names = ["name", "date", "job", "industry", "first_name"];
    assert_eq!(compute_suggestions("nme", names), vec!["name"]);
    assert_eq!(compute_suggestions("jb", names), vec!["job"]);
    assert!(compute_suggestions("xyz", names).is_empty());
    assert!(compute_suggestions("name", names).is_empty());
    assert_eq!(compute_suggestions("first_nam", names), vec!["first_name"]);
}
