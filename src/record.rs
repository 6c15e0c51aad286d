//! Job records and salary field parsing.
//!
//! A [`JobRecord`] is a flat mapping from column name to raw string value,
//! exactly as it came out of the data source. Salary fields are kept as text
//! and only interpreted through [`parse_salary`].

use std::collections::BTreeMap;

/// Column holding the lower bound of a job's salary range.
pub const MIN_SALARY: &str = "min_salary";
/// Column holding the upper bound of a job's salary range.
pub const MAX_SALARY: &str = "max_salary";

/// One job posting as read from a tabular source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    fields: BTreeMap<String, String>,
}

impl JobRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, value)` pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `min_salary` field, if it is a numeric string.
    pub fn min_salary(&self) -> Option<u64> {
        self.get(MIN_SALARY).and_then(parse_salary)
    }

    /// The `max_salary` field, if it is a numeric string.
    pub fn max_salary(&self) -> Option<u64> {
        self.get(MAX_SALARY).and_then(parse_salary)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JobRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Parse a numeric string: one or more ASCII digits, nothing else.
///
/// Signs, decimal points, whitespace, thousands separators and values that
/// overflow `u64` are all rejected.
pub fn parse_salary(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
