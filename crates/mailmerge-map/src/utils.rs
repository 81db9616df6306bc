//! Utility functions for mapping operations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mailmerge_model::{FieldMapping, Placeholder};

use crate::error::MappingError;

/// Key used to compare a placeholder with column names: braces removed, lowercased.
pub fn match_key(placeholder: &Placeholder) -> String {
    placeholder.bare_name().to_lowercase()
}

/// Parse a `PLACEHOLDER=COLUMN` assignment.
///
/// The placeholder may be written with or without braces: `name=Name` and
/// `{{name}}=Name` are equivalent. The column is taken verbatim after the first `=`.
pub fn parse_assignment(raw: &str) -> std::result::Result<(Placeholder, String), MappingError> {
    let invalid = || MappingError::InvalidAssignment(raw.to_string());
    let (left, column) = raw.split_once('=').ok_or_else(invalid)?;
    if left.is_empty() || column.is_empty() {
        return Err(invalid());
    }
    let placeholder = if left.starts_with("{{") {
        Placeholder::new(left)
    } else {
        Placeholder::from_name(left)
    }
    .map_err(|_| invalid())?;
    Ok((placeholder, column.to_string()))
}

/// Read a mapping from a JSON object of `"{{placeholder}}": "Column"` pairs.
///
/// The file is input only; nothing is ever written back.
pub fn load_mapping_file(path: &Path) -> Result<FieldMapping> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mapping from {}", path.display()))?;
    let mapping: FieldMapping = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse mapping from {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = mapping.len(), "mapping file loaded");
    Ok(mapping)
}
