//! Error types for document generation.

use thiserror::Error;

use mailmerge_model::ModelError;

use crate::wizard::WizardStep;

/// Errors raised while generating documents.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Generation was requested without any template text.
    #[error("no template content: load a template before generating documents")]
    MissingTemplate,

    /// Template placeholders without a mapping entry.
    #[error("mapping incomplete, no column chosen for: {}", missing.join(", "))]
    IncompleteMapping { missing: Vec<String> },

    /// Page geometry that cannot hold content.
    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] ModelError),

    /// Requested record does not exist.
    #[error("record {ordinal} does not exist ({total} records loaded)")]
    RecordNotFound { ordinal: usize, total: usize },

    /// The artifact for a single record could not be produced.
    #[error("failed to generate {file_name} (record {ordinal}): {message}")]
    Output {
        ordinal: usize,
        file_name: String,
        message: String,
    },

    /// The sink failed after all records were processed.
    #[error("failed to finish output: {message}")]
    Finish { message: String },
}

/// Errors raised when wizard steps are taken out of order.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("cannot {action} during the {current} step")]
    WrongStep {
        action: &'static str,
        current: WizardStep,
    },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
