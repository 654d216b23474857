use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{NaiveDate, NaiveTime};

/// A resolved scalar substituted into a template.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use soligen::Value;
///
/// let date: Value = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().into();
/// assert_eq!(date.to_string(), "2024-03-09");
///
/// let label: Value = "Legal Services".into();
/// assert_eq!(label.as_text(), Some("Legal Services"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text (labels, names, addresses).
    Text(String),

    /// An integer.
    Integer(i64),

    /// A calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),

    /// A wall-clock time, rendered as `HH:MM:SS`.
    Time(NaiveTime),
}

impl Value {
    /// Get this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a date, if it is one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

/// A sampled value together with the identity of what produced it.
///
/// For taxonomy tags the identity is the IRI of the sampled class; for
/// synthetic fields it is the field name (dates also carry the variant,
/// e.g. `date:past`).
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub value: Value,
    pub identity: String,
}

impl Sample {
    pub fn new(value: impl Into<Value>, identity: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            identity: identity.into(),
        }
    }
}
