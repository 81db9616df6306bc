//! Record ingestion for the mail-merge workflow.
//!
//! This crate turns raw input files into plain data for the template engine:
//!
//! - **Tables**: delimited text parsed into a [`RecordSet`] (header row plus one
//!   record per data line), either with the lenient comma splitter or with full
//!   CSV quoting
//! - **Templates**: free-form text read from disk; word-processor files are
//!   refused rather than guessed at
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mailmerge_ingest::{read_table, read_template};
//! use mailmerge_model::CsvMode;
//!
//! let records = read_table(Path::new("students.csv"), CsvMode::Naive)?;
//! let template = read_template(Path::new("offer.txt"))?;
//! ```
//!
//! [`RecordSet`]: mailmerge_model::RecordSet

mod delimited;
mod error;
mod files;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Parsing ===
pub use delimited::{clean_field, parse_naive, parse_quoted, parse_records};

// === File Loading ===
pub use files::{TABLE_EXTENSIONS, read_table, read_template};
