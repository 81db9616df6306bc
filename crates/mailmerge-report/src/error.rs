//! Error types for output writers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF could not be assembled or serialized.
    #[error("failed to build PDF: {0}")]
    Pdf(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact name would escape the output directory.
    #[error("invalid artifact name {0:?}: names must be a single file name")]
    InvalidName(String),

    #[error("nothing to render: no pages")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ReportError>;
