//! Mapping state management for the interactive mapping step.
//!
//! The state holds the template placeholders, the table columns and the mapping
//! the user is building. It can be edited freely until generation starts; the
//! generation step takes a frozen copy via [`MappingState::freeze`].

use mailmerge_model::{ColumnSet, FieldMapping, Placeholder};

use crate::engine::MappingEngine;
use crate::error::MappingError;

/// Counts shown to the user while mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MappingSummary {
    /// Placeholders that need a column (reserved ones excluded).
    pub required: usize,
    pub mapped: usize,
    pub reserved: usize,
}

impl MappingSummary {
    pub fn unmapped(&self) -> usize {
        self.required.saturating_sub(self.mapped)
    }
}

#[derive(Debug, Clone)]
pub struct MappingState {
    placeholders: Vec<Placeholder>,
    columns: ColumnSet,
    mapping: FieldMapping,
}

impl MappingState {
    /// Start with an empty mapping.
    pub fn new(placeholders: Vec<Placeholder>, columns: ColumnSet) -> Self {
        Self {
            placeholders,
            columns,
            mapping: FieldMapping::new(),
        }
    }

    /// Start with the auto-mapping suggestions already applied.
    pub fn with_suggestions(placeholders: Vec<Placeholder>, columns: ColumnSet) -> Self {
        let mut state = Self::new(placeholders, columns);
        state.apply_suggestions();
        state
    }

    /// Replace the current mapping with the engine's suggestions.
    ///
    /// Returns the number of placeholders that were matched.
    pub fn apply_suggestions(&mut self) -> usize {
        let result = MappingEngine::new(self.columns.clone()).suggest(&self.placeholders);
        self.mapping = result.mapping;
        self.mapping.len()
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Placeholders the user is expected to map.
    pub fn mappable(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders.iter().filter(|p| !p.is_reserved())
    }

    /// Map a placeholder to a column, replacing any previous choice.
    pub fn assign(&mut self, placeholder: &Placeholder, column: &str) -> Result<(), MappingError> {
        if placeholder.is_reserved() {
            return Err(MappingError::ReservedPlaceholder(placeholder.to_string()));
        }
        if !self.placeholders.contains(placeholder) {
            return Err(MappingError::PlaceholderNotFound(placeholder.to_string()));
        }
        if !self.columns.contains(column) {
            return Err(MappingError::ColumnNotFound(column.to_string()));
        }
        self.mapping.insert(placeholder.clone(), column);
        Ok(())
    }

    /// Apply every entry of `mapping` that refers to a known placeholder and column.
    ///
    /// Entries that do not fit this template or table are returned as errors and
    /// left out, so a mapping file can be reused with a slightly different table.
    pub fn apply_mapping(&mut self, mapping: &FieldMapping) -> Vec<MappingError> {
        let mut rejected = Vec::new();
        for (placeholder, column) in mapping.iter() {
            if let Err(err) = self.assign(placeholder, column) {
                rejected.push(err);
            }
        }
        rejected
    }

    pub fn clear(&mut self, placeholder: &Placeholder) -> Option<String> {
        self.mapping.remove(placeholder)
    }

    /// Placeholders still lacking a column.
    pub fn missing(&self) -> Vec<&Placeholder> {
        self.mapping.missing(&self.placeholders)
    }

    pub fn is_complete(&self) -> bool {
        self.mapping.covers(&self.placeholders)
    }

    pub fn summary(&self) -> MappingSummary {
        let reserved = self.placeholders.iter().filter(|p| p.is_reserved()).count();
        let required = self.placeholders.len() - reserved;
        let mapped = self.mappable().filter(|p| self.mapping.contains(p)).count();
        MappingSummary {
            required,
            mapped,
            reserved,
        }
    }

    /// Copy of the mapping handed to generation; later edits do not affect it.
    pub fn freeze(&self) -> FieldMapping {
        self.mapping.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MappingState {
        MappingState::new(
            vec![
                Placeholder::new("{{name}}").unwrap(),
                Placeholder::new("{{course}}").unwrap(),
                Placeholder::new("{{date}}").unwrap(),
            ],
            ColumnSet::new(vec!["Name".to_string(), "Program".to_string()]),
        )
    }

    #[test]
    fn suggestions_leave_unmatched_placeholders_missing() {
        let mut state = state();
        assert_eq!(state.apply_suggestions(), 1);
        assert!(!state.is_complete());
        let missing: Vec<&str> = state.missing().iter().map(|p| p.as_str()).collect();
        assert_eq!(missing, vec!["{{course}}"]);
    }

    #[test]
    fn assign_completes_mapping() {
        let mut state = state();
        state.apply_suggestions();
        let course = Placeholder::new("{{course}}").unwrap();
        state.assign(&course, "Program").unwrap();
        assert!(state.is_complete());
        assert_eq!(
            state.summary(),
            MappingSummary {
                required: 2,
                mapped: 2,
                reserved: 1
            }
        );
    }

    #[test]
    fn assign_validates_inputs() {
        let mut state = state();
        let name = Placeholder::new("{{name}}").unwrap();
        let other = Placeholder::new("{{other}}").unwrap();
        let date = Placeholder::new("{{date}}").unwrap();
        assert_eq!(
            state.assign(&name, "Missing"),
            Err(MappingError::ColumnNotFound("Missing".to_string()))
        );
        assert_eq!(
            state.assign(&other, "Name"),
            Err(MappingError::PlaceholderNotFound("{{other}}".to_string()))
        );
        assert_eq!(
            state.assign(&date, "Name"),
            Err(MappingError::ReservedPlaceholder("{{date}}".to_string()))
        );
    }

    #[test]
    fn frozen_mapping_ignores_later_edits() {
        let mut state = state();
        state.apply_suggestions();
        let frozen = state.freeze();
        state.clear(&Placeholder::new("{{name}}").unwrap());
        assert_eq!(frozen.len(), 1);
        assert!(state.mapping().is_empty());
    }
}
