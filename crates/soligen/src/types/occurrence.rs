use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// The distinguishing label of a repeated placeholder (`1` in `<|name:1|>`).
///
/// Keys are compared by their literal text, so `1` and `01` name two
/// independent occurrences, just as they name two different placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OccurrenceKey(String);

impl OccurrenceKey {
    /// Create a new occurrence key from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the key is a numeric index rather than a letter.
    pub fn is_index(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Deref for OccurrenceKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for OccurrenceKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OccurrenceKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OccurrenceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// One distinct `(tag, key)` pair found in a template.
///
/// Every placeholder sharing an occurrence resolves to the same sampled value
/// within one formatting call. An absent key is its own occurrence, distinct
/// from every keyed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Occurrence {
    /// Normalized tag name.
    pub tag: String,
    /// Optional distinguishing key.
    pub key: Option<OccurrenceKey>,
}

impl Occurrence {
    /// An occurrence without a key (`<|tag|>`).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
        }
    }

    /// An occurrence with a key (`<|tag:key|>`).
    pub fn keyed(tag: impl Into<String>, key: impl Into<OccurrenceKey>) -> Self {
        Self {
            tag: tag.into(),
            key: Some(key.into()),
        }
    }

    /// The literal placeholder text for this occurrence.
    pub fn placeholder(&self) -> String {
        self.to_string()
    }
}

impl Display for Occurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.key {
            Some(key) => write!(f, "<|{}:{}|>", self.tag, key),
            None => write!(f, "<|{}|>", self.tag),
        }
    }
}
