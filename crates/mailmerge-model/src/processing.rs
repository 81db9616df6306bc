use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Persisted to the given path.
    Written(PathBuf),
    /// Rendered but not persisted (dry run).
    Rendered,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub ordinal: usize,
    pub display_name: String,
    pub file_name: String,
    pub status: RecordStatus,
}

impl RecordOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, RecordStatus::Failed(_))
    }
}

/// Counts reported after each record of a bulk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationProgress {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

impl GenerationProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn processed(&self) -> usize {
        self.completed + self.failed
    }

    /// Share of records processed, between 0.0 and 1.0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed() as f64 / self.total as f64
        }
    }

    /// Whole-number percentage of records processed.
    pub fn percent(&self) -> u64 {
        (self.fraction() * 100.0).round() as u64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub total: usize,
    pub outcomes: Vec<RecordOutcome>,
    /// Path of the combined document, when one was requested and written.
    pub combined: Option<PathBuf>,
    /// Why the run could not be finished after the last record (combined output).
    /// Files already written for individual records are still listed in `outcomes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_error: Option<String>,
}

impl GenerationReport {
    pub fn completed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.finish_error.is_some() || self.outcomes.iter().any(RecordOutcome::is_failure)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }
}
