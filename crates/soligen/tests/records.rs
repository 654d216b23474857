//! Tests for the word-list record generator.

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use soligen::sources::{FakeRecords, SyntheticRecordSource};

fn records(seed: u64) -> FakeRecords<StdRng> {
    FakeRecords::with_today(
        StdRng::seed_from_u64(seed),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
}

#[test]
fn dates_stay_in_their_windows() {
    let mut records = records(1);
    let today = records.today();
    let decade_start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    for _ in 0..200 {
        let past = records.past_date();
        assert!(past < today && (today - past).num_days() <= 30);

        let future = records.future_date();
        assert!(future > today && (future - today).num_days() <= 30);

        let decade = records.date_this_decade();
        assert!(decade >= decade_start && decade <= today);
        assert_eq!(decade.year() / 10, 202);
    }
}

#[test]
fn same_seed_same_records() {
    let mut a = records(42);
    let mut b = records(42);
    for _ in 0..10 {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.address(), b.address());
        assert_eq!(a.time(), b.time());
    }
}

#[test]
fn fields_have_the_expected_shape() {
    let mut records = records(3);
    for _ in 0..50 {
        let email = records.email();
        let (local, domain) = email.split_once('@').unwrap();
        assert!(local.contains('.') && domain.contains('.'), "{email}");

        let file = records.file_name();
        assert!(file.contains('.'), "{file}");

        let name = records.name();
        assert_eq!(name.split(' ').count(), 2, "{name}");

        assert!(!records.first_name().is_empty());
        assert!(!records.last_name().is_empty());
        assert!(!records.company().is_empty());
        assert!(!records.job().is_empty());
        assert!(records.address().contains(", "));
    }
}
