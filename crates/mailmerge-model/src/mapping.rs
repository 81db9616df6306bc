use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::placeholder::Placeholder;

/// Placeholder to source column associations chosen by the user.
///
/// Not required to be total; see [`FieldMapping::missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    entries: BTreeMap<Placeholder, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column for a placeholder, returning the previous column if any.
    pub fn insert(&mut self, placeholder: Placeholder, column: impl Into<String>) -> Option<String> {
        self.entries.insert(placeholder, column.into())
    }

    pub fn remove(&mut self, placeholder: &Placeholder) -> Option<String> {
        self.entries.remove(placeholder)
    }

    pub fn get(&self, placeholder: &Placeholder) -> Option<&str> {
        self.entries.get(placeholder).map(String::as_str)
    }

    pub fn contains(&self, placeholder: &Placeholder) -> bool {
        self.entries.contains_key(placeholder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Placeholder, &str)> {
        self.entries.iter().map(|(p, c)| (p, c.as_str()))
    }

    /// Non-reserved placeholders from `placeholders` that have no entry.
    pub fn missing<'a>(&self, placeholders: &'a [Placeholder]) -> Vec<&'a Placeholder> {
        placeholders
            .iter()
            .filter(|p| !p.is_reserved() && !self.contains(p))
            .collect()
    }

    /// True when every non-reserved placeholder has an entry.
    pub fn covers(&self, placeholders: &[Placeholder]) -> bool {
        self.missing(placeholders).is_empty()
    }
}

impl FromIterator<(Placeholder, String)> for FieldMapping {
    fn from_iter<T: IntoIterator<Item = (Placeholder, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
