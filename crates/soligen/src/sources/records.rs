//! Synthetic record fields (names, addresses, dates, ...).

use chrono::{Datelike, Days, Local, NaiveDate, NaiveTime};
use rand::Rng;
use rand::seq::SliceRandom;

/// A generator of realistic values for named record fields.
///
/// Implementations own whatever randomness they need; the engine only calls
/// one method per resolved occurrence.
pub trait SyntheticRecordSource {
    fn address(&mut self) -> String;
    fn company(&mut self) -> String;
    /// A date within the recent past.
    fn past_date(&mut self) -> NaiveDate;
    /// A date within the near future.
    fn future_date(&mut self) -> NaiveDate;
    /// A date between the start of the current decade and today.
    fn date_this_decade(&mut self) -> NaiveDate;
    fn time(&mut self) -> NaiveTime;
    fn email(&mut self) -> String;
    fn file_name(&mut self) -> String;
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    /// A full personal name.
    fn name(&mut self) -> String;
    /// A job title.
    fn job(&mut self) -> String;
}

/// Days covered by [`SyntheticRecordSource::past_date`] and
/// [`SyntheticRecordSource::future_date`].
const DATE_WINDOW_DAYS: u64 = 30;

/// Word-list driven record generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use soligen::sources::{FakeRecords, SyntheticRecordSource};
///
/// let mut records = FakeRecords::new(StdRng::seed_from_u64(7));
/// assert!(records.email().contains('@'));
/// ```
#[derive(Debug, Clone)]
pub struct FakeRecords<R> {
    rng: R,
    today: NaiveDate,
}

impl<R: Rng> FakeRecords<R> {
    /// Create a generator anchored at the local current date.
    pub fn new(rng: R) -> Self {
        Self::with_today(rng, Local::now().date_naive())
    }

    /// Create a generator anchored at a fixed date.
    pub fn with_today(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    /// The date treated as "today".
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn digits(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }
}

impl<R: Rng> SyntheticRecordSource for FakeRecords<R> {
    fn address(&mut self) -> String {
        let number = self.rng.gen_range(1..10_000);
        let street = self.pick(STREET_NAMES);
        let suffix = self.pick(STREET_SUFFIXES);
        let city = self.pick(CITIES);
        let state = self.pick(STATES);
        let zip = self.digits(5);
        if self.rng.gen_bool(0.3) {
            let unit = self.rng.gen_range(1..1_000);
            format!("{number} {street} {suffix} Apt. {unit}, {city}, {state} {zip}")
        } else {
            format!("{number} {street} {suffix}, {city}, {state} {zip}")
        }
    }

    fn company(&mut self) -> String {
        let first = self.pick(LAST_NAMES);
        match self.rng.gen_range(0..3) {
            0 => format!("{first} {}", self.pick(COMPANY_SUFFIXES)),
            1 => format!("{first}-{}", self.pick(LAST_NAMES)),
            _ => format!(
                "{first}, {} and {}",
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES)
            ),
        }
    }

    fn past_date(&mut self) -> NaiveDate {
        let days = self.rng.gen_range(1..=DATE_WINDOW_DAYS);
        self.today
            .checked_sub_days(Days::new(days))
            .unwrap_or(self.today)
    }

    fn future_date(&mut self) -> NaiveDate {
        let days = self.rng.gen_range(1..=DATE_WINDOW_DAYS);
        self.today
            .checked_add_days(Days::new(days))
            .unwrap_or(self.today)
    }

    fn date_this_decade(&mut self) -> NaiveDate {
        let decade_start_year = self.today.year() - self.today.year().rem_euclid(10);
        let Some(start) = NaiveDate::from_ymd_opt(decade_start_year, 1, 1) else {
            return self.today;
        };
        let span = (self.today - start).num_days().max(0).unsigned_abs();
        let offset = self.rng.gen_range(0..=span);
        start.checked_add_days(Days::new(offset)).unwrap_or(self.today)
    }

    fn time(&mut self) -> NaiveTime {
        let seconds = self.rng.gen_range(0..86_400u32);
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
    }

    fn email(&mut self) -> String {
        let first = self.pick(FIRST_NAMES).to_ascii_lowercase();
        let last = self.pick(LAST_NAMES).to_ascii_lowercase();
        let domain = self.pick(EMAIL_DOMAINS);
        format!("{first}.{last}@{domain}")
    }

    fn file_name(&mut self) -> String {
        let word = self.pick(FILE_WORDS);
        let extension = self.pick(FILE_EXTENSIONS);
        format!("{word}.{extension}")
    }

    fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    fn name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        format!("{first} {last}")
    }

    fn job(&mut self) -> String {
        self.pick(JOB_TITLES).to_string()
    }
}

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Margaret", "Mark",
    "Sandra", "Steven", "Ashley", "Andrew", "Emily", "Joshua", "Michelle", "Kevin", "Amanda",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
];

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Sunset", "Highland", "Jefferson", "Lincoln", "Church", "Mill", "River", "Spring",
];

const STREET_SUFFIXES: &[&str] = &[
    "St", "Ave", "Rd", "Blvd", "Ln", "Dr", "Ct", "Way", "Pl", "Ter",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Burlington", "Dover",
];

const STATES: &[&str] = &[
    "AL", "AZ", "CA", "CO", "CT", "FL", "GA", "IL", "IN", "MA", "MD", "MI", "MN", "NC", "NJ",
    "NY", "OH", "OR", "PA", "TX", "VA", "WA", "WI",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "PLC", "and Sons", "Ltd"];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.example.com", "law.example.com",
];

const FILE_WORDS: &[&str] = &[
    "agreement", "brief", "contract", "memo", "exhibit", "invoice", "summary", "notice",
    "filing", "report", "minutes", "schedule", "draft", "letter",
];

const FILE_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "xlsx", "csv", "json", "eml", "png"];

const JOB_TITLES: &[&str] = &[
    "Paralegal",
    "Associate Attorney",
    "General Counsel",
    "Compliance Officer",
    "Contract Manager",
    "Legal Secretary",
    "Court Reporter",
    "Financial Analyst",
    "Chief Operating Officer",
    "Tax Advisor",
    "Claims Adjuster",
    "Software Engineer",
    "Human Resources Manager",
    "Accountant",
    "Mediator",
];
