use std::path::PathBuf;

use mailmerge_model::{FieldMapping, GenerationReport, OutputFormat};

/// Everything the `generate` command reports back.
#[derive(Debug)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub dry_run: bool,
    pub mapping: FieldMapping,
    /// Mapping file entries that did not fit this table or template.
    pub rejected: Vec<String>,
    pub report: GenerationReport,
}

impl GenerateResult {
    pub fn has_failures(&self) -> bool {
        self.report.has_failures()
    }
}

/// One template placeholder as listed by the `fields` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub placeholder: String,
    /// Auto-mapped column, if any.
    pub column: Option<String>,
    pub reserved: bool,
}
