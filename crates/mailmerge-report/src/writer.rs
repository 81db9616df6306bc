//! Writing generated documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use mailmerge_core::DocumentSink;
use mailmerge_model::{NamedDocument, OutputFormat};

use crate::error::{ReportError, Result};
use crate::pdf::{render_combined_pdf, render_pdf};
use crate::text::{render_combined_text, render_text};

/// Stem of the combined artifact written by [`FileSink::finish`].
pub const COMBINED_STEM: &str = "all_documents";

/// Options controlling where and how documents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Also write every document into one combined file.
    pub combined: bool,
    /// Render everything but write nothing.
    pub dry_run: bool,
}

impl WriterOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: OutputFormat::default(),
            combined: false,
            dry_run: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_combined(mut self, combined: bool) -> Self {
        self.combined = combined;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Render documents in the configured format and write them under the output directory.
///
/// Documents are rendered even in dry-run mode so rendering failures still show up.
/// A later document with the same file name overwrites the earlier one.
#[derive(Debug)]
pub struct FileSink {
    options: WriterOptions,
    combined: Vec<NamedDocument>,
}

impl FileSink {
    pub fn new(options: WriterOptions) -> Self {
        Self {
            options,
            combined: Vec::new(),
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn render(&self, document: &NamedDocument) -> Result<Vec<u8>> {
        match self.options.format {
            OutputFormat::Pdf => render_pdf(&document.document, &document.display_name),
            OutputFormat::Text => Ok(render_text(&document.document).into_bytes()),
        }
    }

    fn persist(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let dir = &self.options.output_dir;
        fs::create_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(file_name);
        fs::write(&path, bytes).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl DocumentSink for FileSink {
    type Error = ReportError;

    fn write(&mut self, document: &NamedDocument) -> Result<Option<PathBuf>> {
        validate_file_name(&document.file_name)?;
        let bytes = self.render(document)?;
        if self.options.combined {
            self.combined.push(document.clone());
        }
        if self.options.dry_run {
            debug!(ordinal = document.ordinal, bytes = bytes.len(), "dry run, not written");
            return Ok(None);
        }
        let path = self.persist(&document.file_name, &bytes)?;
        debug!(ordinal = document.ordinal, path = %path.display(), "document written");
        Ok(Some(path))
    }

    fn finish(&mut self) -> Result<Option<PathBuf>> {
        if !self.options.combined {
            return Ok(None);
        }
        let documents = std::mem::take(&mut self.combined);
        if documents.is_empty() {
            warn!("no documents generated, combined file skipped");
            return Ok(None);
        }
        let file_name = format!("{COMBINED_STEM}.{}", self.options.format.extension());
        let bytes = match self.options.format {
            OutputFormat::Pdf => render_combined_pdf(&documents, COMBINED_STEM)?,
            OutputFormat::Text => render_combined_text(&documents).into_bytes(),
        };
        if self.options.dry_run {
            return Ok(None);
        }
        let path = self.persist(&file_name, &bytes)?;
        info!(
            documents = documents.len(),
            path = %path.display(),
            "combined document written"
        );
        Ok(Some(path))
    }
}

/// Reject names that are empty or would resolve outside the output directory.
pub fn validate_file_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    let single_component = path.components().count() == 1 && path.file_name().is_some();
    if name.is_empty() || name.contains(['/', '\\']) || !single_component {
        return Err(ReportError::InvalidName(name.to_string()));
    }
    Ok(())
}
