//! Error types for mapping operations.

use std::fmt;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Placeholder does not occur in the template.
    PlaceholderNotFound(String),
    /// Column not found in source data.
    ColumnNotFound(String),
    /// Reserved placeholders are resolved automatically and cannot be mapped.
    ReservedPlaceholder(String),
    /// Assignment text that is not `PLACEHOLDER=COLUMN`.
    InvalidAssignment(String),
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaceholderNotFound(p) => write!(f, "Placeholder not found in template: {p}"),
            Self::ColumnNotFound(c) => write!(f, "Column not found: {c}"),
            Self::ReservedPlaceholder(p) => {
                write!(f, "Placeholder '{p}' is reserved and filled in automatically")
            }
            Self::InvalidAssignment(raw) => {
                write!(f, "Invalid mapping '{raw}': expected PLACEHOLDER=COLUMN")
            }
        }
    }
}

impl std::error::Error for MappingError {}
