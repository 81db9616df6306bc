//! Error types for mail-merge ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading tables and templates.
///
/// Row shape problems are not errors: short rows are padded and long rows truncated.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Table file with an extension other than the supported text formats.
    #[error("unsupported table file {path}: only CSV text tables can be parsed")]
    UnsupportedTable { path: PathBuf },

    /// Word-processor template that cannot be read as text.
    #[error(
        "unsupported template file {path}: save the document as plain text (.txt) \
         keeping its {{{{placeholders}}}} and try again"
    )]
    UnsupportedTemplate { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Quoted CSV parsing failed.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let message = match err.position() {
            Some(position) => format!("line {}: {err}", position.line()),
            None => err.to_string(),
        };
        Self::CsvParse { message }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
