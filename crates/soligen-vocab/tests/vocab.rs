use std::collections::HashSet;

use soligen_vocab::{
    SyntheticField, TagKind, TaxonomyCategory, accepted_tag_names, normalize_tag, resolve_tag,
};

#[test]
fn normalization_matrix() {
    assert_eq!(normalize_tag("Actor / Player"), "actor_player");
    assert_eq!(normalize_tag("Forums and Venues"), "forums_and_venues");
    assert_eq!(normalize_tag("Document / Artifact"), "document_artifact");
    assert_eq!(normalize_tag("SOLI Type"), "soli_type");
    assert_eq!(normalize_tag("  Area of   Law  "), "area_of_law");
    assert_eq!(normalize_tag("__first__name__"), "first_name");
    assert_eq!(normalize_tag("a-b_c.d"), "a_b_c_d");
    assert_eq!(normalize_tag("///"), "");
    assert_eq!(normalize_tag(""), "");
}

#[test]
fn category_tag_names_are_normalized_labels() {
    for category in TaxonomyCategory::ALL {
        assert_eq!(
            normalize_tag(category.label()),
            category.tag_name(),
            "label {:?} should normalize to its tag name",
            category.label()
        );
    }
}

#[test]
fn resolution_covers_every_name() {
    let mut covered = HashSet::new();
    for name in accepted_tag_names() {
        let kind = resolve_tag(name).unwrap_or_else(|| panic!("{name} should resolve"));
        assert_eq!(kind.tag_name(), name);
        covered.insert(kind);
    }
    assert_eq!(covered.len(), 34);
}

#[test]
fn resolution_distinguishes_sources() {
    assert_eq!(
        resolve_tag("industry"),
        Some(TagKind::Taxonomy(TaxonomyCategory::Industry))
    );
    assert_eq!(
        resolve_tag("first_name"),
        Some(TagKind::Synthetic(SyntheticField::FirstName))
    );
    assert_eq!(resolve_tag("Industry"), None);
    assert_eq!(resolve_tag("player_actor"), None);
    assert_eq!(resolve_tag("services"), None);
}

#[test]
fn names_are_unique() {
    let names = accepted_tag_names();
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}
