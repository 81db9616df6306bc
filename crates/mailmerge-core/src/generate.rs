//! Document generation.
//!
//! A [`Generator`] owns the template text, a frozen [`FieldMapping`] and the
//! [`GenerationContext`]. It turns each record into a laid-out
//! [`NamedDocument`] and hands it to a [`DocumentSink`], which decides what
//! "writing" means (files, memory, nothing at all).
//!
//! Bulk runs are sequential. A record whose artifact cannot be produced is
//! logged and recorded as failed; the remaining records still run.

use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDateTime;
use tracing::{debug, error, info, info_span};

use mailmerge_model::{
    Document, FieldMapping, GenerationProgress, GenerationReport, LayoutOptions, NamedDocument,
    OutputFormat, PageHeader, Placeholder, Record, RecordOutcome, RecordSet, RecordStatus,
};

use crate::dates::{format_date, format_timestamp};
use crate::error::{GenerationError, Result};
use crate::layout::layout_document;
use crate::naming::{artifact_name, display_name, header_reference};
use crate::placeholders::extract_placeholders;
use crate::substitute::substitute;

/// Inputs shared by every record of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationContext {
    /// Moment the run started. Drives `{{date}}`, the header date and the footer.
    pub generated_at: NaiveDateTime,
    pub layout: LayoutOptions,
    pub format: OutputFormat,
}

impl GenerationContext {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at,
            layout: LayoutOptions::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Short date used for reserved tokens and the header.
    pub fn date(&self) -> String {
        format_date(self.generated_at.date())
    }

    /// Timestamp printed in page footers.
    pub fn timestamp(&self) -> String {
        format_timestamp(self.generated_at)
    }
}

/// Destination for generated documents.
pub trait DocumentSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist one document. Returns where it went, or `None` when nothing was written.
    fn write(&mut self, document: &NamedDocument) -> std::result::Result<Option<PathBuf>, Self::Error>;

    /// Called once after the last record. Returns the combined artifact, if any.
    fn finish(&mut self) -> std::result::Result<Option<PathBuf>, Self::Error> {
        Ok(None)
    }
}

/// Sink that keeps documents in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub documents: Vec<NamedDocument>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for CollectingSink {
    type Error = Infallible;

    fn write(&mut self, document: &NamedDocument) -> std::result::Result<Option<PathBuf>, Infallible> {
        self.documents.push(document.clone());
        Ok(None)
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    template: String,
    placeholders: Vec<Placeholder>,
    mapping: FieldMapping,
    context: GenerationContext,
}

impl Generator {
    /// Check the inputs of a run before any record is touched.
    ///
    /// Fails with [`GenerationError::MissingTemplate`] for empty template text and
    /// with [`GenerationError::IncompleteMapping`] when a non-reserved placeholder
    /// has no mapping entry.
    pub fn new(
        template: impl Into<String>,
        mapping: FieldMapping,
        context: GenerationContext,
    ) -> Result<Self> {
        let template = template.into();
        if template.is_empty() {
            return Err(GenerationError::MissingTemplate);
        }
        context.layout.validate()?;

        let placeholders = extract_placeholders(&template);
        let missing: Vec<String> = mapping
            .missing(&placeholders)
            .into_iter()
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(GenerationError::IncompleteMapping { missing });
        }

        Ok(Self {
            template,
            placeholders,
            mapping,
            context,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Personalized text for one record.
    pub fn render_text(&self, record: &Record) -> String {
        substitute(&self.template, record, &self.mapping, &self.context.date())
    }

    /// Paginated document for one record, footers included.
    pub fn render_document(&self, record: &Record) -> Document {
        let text = self.render_text(record);
        let header = PageHeader {
            reference: header_reference(record),
            date: self.context.date(),
        };
        layout_document(
            &text,
            header,
            &self.context.layout,
            &self.context.timestamp(),
        )
    }

    /// Document together with its artifact name. `ordinal` is 1-based.
    pub fn render_named(&self, record: &Record, ordinal: usize) -> NamedDocument {
        NamedDocument {
            ordinal,
            display_name: display_name(record, ordinal),
            file_name: artifact_name(record, ordinal, self.context.format.extension()),
            document: self.render_document(record),
        }
    }

    /// Generate the record at 1-based `ordinal`. Every failure is returned.
    pub fn generate_one<S: DocumentSink>(
        &self,
        records: &RecordSet,
        ordinal: usize,
        sink: &mut S,
    ) -> Result<GenerationReport> {
        let record = records
            .by_ordinal(ordinal)
            .ok_or(GenerationError::RecordNotFound {
                ordinal,
                total: records.len(),
            })?;
        let outcome = self.process(record, ordinal, sink)?;
        let combined = sink.finish().map_err(|err| GenerationError::Finish {
            message: err.to_string(),
        })?;
        Ok(GenerationReport {
            total: 1,
            outcomes: vec![outcome],
            combined,
            finish_error: None,
        })
    }

    /// Generate every record in order.
    ///
    /// `progress` is called after each record with the running counts. A record
    /// that fails is logged and recorded in the report; it does not stop the run.
    /// A failure of [`DocumentSink::finish`] is logged and kept in
    /// [`GenerationReport::finish_error`] so the per-record outcomes survive.
    pub fn generate_all<S, F>(
        &self,
        records: &RecordSet,
        sink: &mut S,
        mut progress: F,
    ) -> Result<GenerationReport>
    where
        S: DocumentSink,
        F: FnMut(&GenerationProgress),
    {
        let total = records.len();
        let span = info_span!("generate", records = total, format = ?self.context.format);
        let _guard = span.enter();
        let start = Instant::now();

        let mut counts = GenerationProgress::new(total);
        let mut outcomes = Vec::with_capacity(total);
        for (idx, record) in records.records.iter().enumerate() {
            let ordinal = idx + 1;
            let outcome = match self.process(record, ordinal, sink) {
                Ok(outcome) => {
                    counts.completed += 1;
                    outcome
                }
                Err(err) => {
                    error!(ordinal, error = %err, "record generation failed");
                    counts.failed += 1;
                    RecordOutcome {
                        ordinal,
                        display_name: display_name(record, ordinal),
                        file_name: artifact_name(record, ordinal, self.context.format.extension()),
                        status: RecordStatus::Failed(err.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
            progress(&counts);
        }

        let (combined, finish_error) = match sink.finish() {
            Ok(combined) => (combined, None),
            Err(err) => {
                let err = GenerationError::Finish {
                    message: err.to_string(),
                };
                error!(error = %err, "finishing the run failed");
                (None, Some(err.to_string()))
            }
        };
        info!(
            completed = counts.completed,
            failed = counts.failed,
            combined = combined.is_some(),
            duration_ms = start.elapsed().as_millis(),
            "generation complete"
        );
        Ok(GenerationReport {
            total,
            outcomes,
            combined,
            finish_error,
        })
    }

    fn process<S: DocumentSink>(
        &self,
        record: &Record,
        ordinal: usize,
        sink: &mut S,
    ) -> Result<RecordOutcome> {
        let named = self.render_named(record, ordinal);
        debug!(
            ordinal,
            pages = named.document.page_count(),
            "record rendered"
        );
        let status = match sink.write(&named) {
            Ok(Some(path)) => RecordStatus::Written(path),
            Ok(None) => RecordStatus::Rendered,
            Err(err) => {
                return Err(GenerationError::Output {
                    ordinal,
                    file_name: named.file_name,
                    message: err.to_string(),
                });
            }
        };
        Ok(RecordOutcome {
            ordinal,
            display_name: named.display_name,
            file_name: named.file_name,
            status,
        })
    }
}
