//! The steps behind each command, free of argument parsing and printing.
//!
//! 1. Read the table and the template into a [`Wizard`]
//! 2. Build the mapping: auto-map, mapping file, `--map` assignments
//! 3. Freeze the mapping and generate through a [`FileSink`]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info, info_span, warn};

use mailmerge_core::{GenerationContext, Wizard};
use mailmerge_ingest::{read_table, read_template};
use mailmerge_map::{load_mapping_file, parse_assignment};
use mailmerge_model::{CsvMode, GenerationProgress, LayoutOptions, OutputFormat, RecordSet};
use mailmerge_report::{FileSink, WriterOptions};

use crate::logging::redact_value;
use crate::types::{FieldRow, GenerateResult};

/// Inputs of one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub table: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub csv_mode: CsvMode,
    pub layout: LayoutOptions,
    /// Mapping file applied on top of the auto-mapping.
    pub mapping_file: Option<PathBuf>,
    /// `PLACEHOLDER=COLUMN` assignments, applied last.
    pub assignments: Vec<String>,
    pub auto_map: bool,
    /// Generate only this 1-based record.
    pub record: Option<usize>,
    pub combined: bool,
    pub dry_run: bool,
    pub generated_at: NaiveDateTime,
}

impl GenerateRequest {
    pub fn new(
        table: impl Into<PathBuf>,
        template: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            table: table.into(),
            template: template.into(),
            output_dir: output_dir.into(),
            format: OutputFormat::default(),
            csv_mode: CsvMode::default(),
            layout: LayoutOptions::default(),
            mapping_file: None,
            assignments: Vec::new(),
            auto_map: true,
            record: None,
            combined: false,
            dry_run: false,
            generated_at,
        }
    }
}

/// Read page geometry from TOML. Missing keys keep their defaults.
pub fn load_layout(path: &Path) -> Result<LayoutOptions> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read layout {}", path.display()))?;
    let layout: LayoutOptions =
        toml::from_str(&text).with_context(|| format!("parse layout {}", path.display()))?;
    layout
        .validate()
        .with_context(|| format!("check layout {}", path.display()))?;
    Ok(layout)
}

pub fn load_records(table: &Path, csv_mode: CsvMode) -> Result<RecordSet> {
    let span = info_span!("ingest", table = %table.display(), mode = ?csv_mode);
    let _guard = span.enter();
    let start = Instant::now();
    let records =
        read_table(table, csv_mode).with_context(|| format!("read table {}", table.display()))?;
    debug!(
        records = records.len(),
        columns = records.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "table parsed"
    );
    Ok(records)
}

/// Wizard with records and template loaded, waiting in the mapping stage.
pub fn open_wizard(table: &Path, template: &Path, csv_mode: CsvMode) -> Result<Wizard> {
    let records = load_records(table, csv_mode)?;
    let text = read_template(template)
        .with_context(|| format!("read template {}", template.display()))?;
    let mut wizard = Wizard::new();
    wizard.load_records(records)?;
    wizard.load_template(text)?;
    Ok(wizard)
}

/// Build the mapping in order: auto-map, mapping file, assignments.
///
/// Mapping file entries that do not fit are skipped and returned as messages.
/// Assignments given on the command line must all apply.
pub fn apply_mapping_inputs(wizard: &mut Wizard, request: &GenerateRequest) -> Result<Vec<String>> {
    let from_file = request
        .mapping_file
        .as_deref()
        .map(load_mapping_file)
        .transpose()?;

    let state = wizard.mapping_mut()?;
    if request.auto_map {
        let matched = state.apply_suggestions();
        info!(matched, "auto-mapped placeholders");
    }

    let mut rejected = Vec::new();
    if let Some(mapping) = &from_file {
        for error in state.apply_mapping(mapping) {
            warn!(%error, "mapping file entry skipped");
            rejected.push(error.to_string());
        }
    }

    for raw in &request.assignments {
        let (placeholder, column) = parse_assignment(raw)?;
        state
            .assign(&placeholder, &column)
            .with_context(|| format!("apply mapping {raw}"))?;
    }

    let summary = state.summary();
    info!(
        required = summary.required,
        mapped = summary.mapped,
        reserved = summary.reserved,
        "mapping ready"
    );
    Ok(rejected)
}

/// Run the whole pipeline. `progress` is called after every record of a bulk run.
pub fn generate<F>(request: &GenerateRequest, progress: F) -> Result<GenerateResult>
where
    F: FnMut(&GenerationProgress),
{
    let mut wizard = open_wizard(&request.table, &request.template, request.csv_mode)?;
    let rejected = apply_mapping_inputs(&mut wizard, request)?;

    let context = GenerationContext::new(request.generated_at)
        .with_layout(request.layout.clone())
        .with_format(request.format);
    let generator = wizard.start_generation(context)?;
    let mapping = generator.mapping().clone();

    let records = wizard.records().context("no records loaded")?;
    let options = WriterOptions::new(&request.output_dir)
        .with_format(request.format)
        .with_combined(request.combined)
        .with_dry_run(request.dry_run);
    let mut sink = FileSink::new(options);

    let report = match request.record {
        Some(ordinal) => generator.generate_one(records, ordinal, &mut sink)?,
        None => generator.generate_all(records, &mut sink, progress)?,
    };
    for failure in report.failures() {
        warn!(
            ordinal = failure.ordinal,
            recipient = %redact_value(&failure.display_name),
            "record skipped"
        );
    }

    Ok(GenerateResult {
        output_dir: request.output_dir.clone(),
        format: request.format,
        dry_run: request.dry_run,
        mapping,
        rejected,
        report,
    })
}

/// Placeholders of the template with their auto-mapped columns.
pub fn describe_fields(table: &Path, template: &Path, csv_mode: CsvMode) -> Result<Vec<FieldRow>> {
    let mut wizard = open_wizard(table, template, csv_mode)?;
    wizard.auto_map()?;
    let state = wizard.mapping().context("template not loaded")?;
    Ok(state
        .placeholders()
        .iter()
        .map(|placeholder| FieldRow {
            placeholder: placeholder.to_string(),
            column: state.mapping().get(placeholder).map(str::to_string),
            reserved: placeholder.is_reserved(),
        })
        .collect())
}
