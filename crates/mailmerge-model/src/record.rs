//! Ingested table data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered column names taken from the header row.
///
/// Duplicates are kept as they appear; lookups by name return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet(Vec<String>);

impl ColumnSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }

    /// First column whose name equals `name` ignoring case.
    pub fn find_ignore_case(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.0
            .iter()
            .find(|column| column.to_lowercase() == wanted)
            .map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One data row as column name to cell value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(column, value)` pairs; a repeated column keeps the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// The value for `column` unless it is missing or empty.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.is_empty())
    }

    /// First non-empty value among `columns`, in order.
    pub fn first_non_empty(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|column| self.non_empty(column))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything produced by ingestion: the header columns and one record per data line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub columns: ColumnSet,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(columns: ColumnSet, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record by 1-based ordinal.
    pub fn by_ordinal(&self, ordinal: usize) -> Option<&Record> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
    }
}
