pub mod document;
pub mod error;
pub mod mapping;
pub mod options;
pub mod placeholder;
pub mod processing;
pub mod record;

pub use document::{Document, NamedDocument, Page, PageFooter, PageHeader, PlacedLine};
pub use error::{ModelError, Result};
pub use mapping::FieldMapping;
pub use options::{CsvMode, LayoutOptions};
pub use placeholder::{DATE_TOKEN, Placeholder, RESERVED_TOKENS, TODAY_TOKEN};
pub use processing::{
    GenerationProgress, GenerationReport, OutputFormat, RecordOutcome, RecordStatus,
};
pub use record::{ColumnSet, Record, RecordSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_outcomes() {
        let report = GenerationReport {
            total: 3,
            outcomes: vec![
                RecordOutcome {
                    ordinal: 1,
                    display_name: "Alice".to_string(),
                    file_name: "Alice_REF001.pdf".to_string(),
                    status: RecordStatus::Rendered,
                },
                RecordOutcome {
                    ordinal: 2,
                    display_name: "Bob".to_string(),
                    file_name: "Bob_REF002.pdf".to_string(),
                    status: RecordStatus::Failed("boom".to_string()),
                },
            ],
            combined: None,
            finish_error: None,
        };
        assert_eq!(report.completed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.has_failures());
    }
}
