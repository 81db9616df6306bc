//! Auto-mapping of template placeholders to table columns.
//!
//! A placeholder is matched to a column when its brace-free name equals the column
//! name ignoring case. When several columns match, the first one in header order
//! wins. Nothing else is guessed: suggestions are advisory and the user may
//! override every entry.

use mailmerge_model::{ColumnSet, FieldMapping, Placeholder};
use tracing::debug;

use crate::utils::match_key;

/// Outcome of an auto-mapping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingResult {
    /// Placeholders that matched a column.
    pub mapping: FieldMapping,
    /// Non-reserved placeholders with no matching column.
    pub unmapped: Vec<Placeholder>,
}

#[derive(Debug, Clone)]
pub struct MappingEngine {
    columns: ColumnSet,
}

impl MappingEngine {
    pub fn new(columns: ColumnSet) -> Self {
        Self { columns }
    }

    /// Suggest a column for every non-reserved placeholder.
    pub fn suggest(&self, placeholders: &[Placeholder]) -> MappingResult {
        let mut result = MappingResult::default();
        for placeholder in placeholders {
            if placeholder.is_reserved() {
                continue;
            }
            match self.columns.find_ignore_case(&match_key(placeholder)) {
                Some(column) => {
                    debug!(placeholder = %placeholder, column, "auto-mapped placeholder");
                    result.mapping.insert(placeholder.clone(), column);
                }
                None => result.unmapped.push(placeholder.clone()),
            }
        }
        result
    }
}

/// Convenience wrapper returning only the suggested mapping.
pub fn auto_map(placeholders: &[Placeholder], columns: &ColumnSet) -> FieldMapping {
    MappingEngine::new(columns.clone()).suggest(placeholders).mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> ColumnSet {
        ColumnSet::new(names.iter().map(|n| (*n).to_string()).collect())
    }

    fn placeholders(tokens: &[&str]) -> Vec<Placeholder> {
        tokens
            .iter()
            .map(|t| Placeholder::new(*t).unwrap())
            .collect()
    }

    #[test]
    fn matches_ignoring_case() {
        let placeholders = placeholders(&["{{name}}", "{{Ref_number}}"]);
        let mapping = auto_map(&placeholders, &columns(&["Name", "Ref_number"]));
        assert_eq!(mapping.get(&placeholders[0]), Some("Name"));
        assert_eq!(mapping.get(&placeholders[1]), Some("Ref_number"));
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn first_matching_column_wins() {
        let placeholders = placeholders(&["{{name}}"]);
        let mapping = auto_map(&placeholders, &columns(&["NAME", "name"]));
        assert_eq!(mapping.get(&placeholders[0]), Some("NAME"));
    }

    #[test]
    fn inner_whitespace_prevents_match() {
        let placeholders = placeholders(&["{{ name }}"]);
        let result = MappingEngine::new(columns(&["name"])).suggest(&placeholders);
        assert!(result.mapping.is_empty());
        assert_eq!(result.unmapped, placeholders);
    }

    #[test]
    fn reserved_tokens_are_never_suggested() {
        let placeholders = placeholders(&["{{date}}", "{{today}}"]);
        let result = MappingEngine::new(columns(&["date", "today"])).suggest(&placeholders);
        assert!(result.mapping.is_empty());
        assert!(result.unmapped.is_empty());
    }
}
