//! Shared fixtures for integration tests.

use chrono::{NaiveDate, NaiveTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use soligen::sources::{ClassGraph, SyntheticRecordSource, TaxonomyHandle};
use soligen::{ClassRecord, TemplateFormatter};

pub const SAMPLE_TAXONOMY: &str = include_str!("../../../../data/sample-taxonomy.json");

pub fn sample_graph() -> ClassGraph {
    ClassGraph::from_json_str(SAMPLE_TAXONOMY).unwrap()
}

/// A taxonomy with one member per category used by the tests.
pub fn single_member_graph() -> ClassGraph {
    ClassGraph::from_json_str(
        r#"{
        "categories": {
            "Industry": "ex:Industry",
            "Document / Artifact": "ex:Document",
            "Actor / Player": "ex:Actor",
            "Area of Law": "ex:AreaOfLaw"
        },
        "classes": [
            {"iri": "ex:Industry", "label": "Industry"},
            {"iri": "ex:Legal", "label": "Legal Services", "sub_class_of": ["ex:Industry"]},
            {"iri": "ex:Document", "label": "Document / Artifact"},
            {"iri": "ex:Motion", "label": "Motion to Dismiss", "sub_class_of": ["ex:Document"]},
            {"iri": "ex:Actor", "label": "Actor / Player"},
            {"iri": "ex:Plaintiff", "label": "Plaintiff", "sub_class_of": ["ex:Actor"]},
            {"iri": "ex:AreaOfLaw", "label": "Area of Law"},
            {"iri": "ex:Unlabeled", "label": "  ", "sub_class_of": ["ex:AreaOfLaw"]}
        ]
    }"#,
    )
    .unwrap()
}

/// A taxonomy that knows no categories at all.
pub struct EmptyTaxonomy;

impl TaxonomyHandle for EmptyTaxonomy {
    fn list_members(&self, _category: &str, _max_depth: usize) -> Vec<&ClassRecord> {
        Vec::new()
    }
}

/// Fixed record values.
pub struct StubRecords;

impl SyntheticRecordSource for StubRecords {
    fn address(&mut self) -> String {
        "123 Main St".to_string()
    }
    fn company(&mut self) -> String {
        "Acme LLC".to_string()
    }
    fn past_date(&mut self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }
    fn future_date(&mut self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }
    fn date_this_decade(&mut self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()
    }
    fn time(&mut self) -> NaiveTime {
        NaiveTime::from_hms_opt(9, 30, 0).unwrap()
    }
    fn email(&mut self) -> String {
        "jane.doe@example.com".to_string()
    }
    fn file_name(&mut self) -> String {
        "report.pdf".to_string()
    }
    fn first_name(&mut self) -> String {
        "Jane".to_string()
    }
    fn last_name(&mut self) -> String {
        "Doe".to_string()
    }
    fn name(&mut self) -> String {
        "Jane Doe".to_string()
    }
    fn job(&mut self) -> String {
        "Paralegal".to_string()
    }
}

/// Records that number every value they hand out, so tests can count
/// samples and tell them apart.
#[derive(Default)]
pub struct CountingRecords {
    pub calls: usize,
}

impl CountingRecords {
    fn next(&mut self, field: &str) -> String {
        self.calls += 1;
        format!("{field} {}", self.calls)
    }
}

impl SyntheticRecordSource for CountingRecords {
    fn address(&mut self) -> String {
        self.next("Address")
    }
    fn company(&mut self) -> String {
        self.next("Company")
    }
    fn past_date(&mut self) -> NaiveDate {
        self.calls += 1;
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }
    fn future_date(&mut self) -> NaiveDate {
        self.calls += 1;
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }
    fn date_this_decade(&mut self) -> NaiveDate {
        self.calls += 1;
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
    }
    fn time(&mut self) -> NaiveTime {
        self.calls += 1;
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }
    fn email(&mut self) -> String {
        self.next("Email")
    }
    fn file_name(&mut self) -> String {
        self.next("File")
    }
    fn first_name(&mut self) -> String {
        self.next("First")
    }
    fn last_name(&mut self) -> String {
        self.next("Last")
    }
    fn name(&mut self) -> String {
        self.next("Name")
    }
    fn job(&mut self) -> String {
        self.next("Job")
    }
}

/// A formatter over `taxonomy` with fixed records and a seeded RNG.
pub fn stub_formatter(taxonomy: &dyn TaxonomyHandle) -> TemplateFormatter<'_> {
    TemplateFormatter::builder()
        .taxonomy(taxonomy)
        .records(Box::new(StubRecords))
        .rng(Box::new(StdRng::seed_from_u64(7)))
        .build()
}

/// A formatter over `taxonomy` with counting records and a seeded RNG.
pub fn counting_formatter(taxonomy: &dyn TaxonomyHandle) -> TemplateFormatter<'_> {
    TemplateFormatter::builder()
        .taxonomy(taxonomy)
        .records(Box::new(CountingRecords::default()))
        .rng(Box::new(StdRng::seed_from_u64(7)))
        .build()
}
