//! Output writers for generated documents.
//!
//! - [`pdf`]: A4 PDF pages with header, rule and footer (printpdf)
//! - [`text`]: the same pages as plain text
//! - [`writer`]: [`FileSink`], the [`mailmerge_core::DocumentSink`] that writes files

pub mod error;
pub mod pdf;
pub mod text;
pub mod writer;

pub use error::{ReportError, Result};
pub use pdf::{render_combined_pdf, render_pdf};
pub use text::{PAGE_BREAK, render_combined_text, render_text};
pub use writer::{COMBINED_STEM, FileSink, WriterOptions, validate_file_name};
