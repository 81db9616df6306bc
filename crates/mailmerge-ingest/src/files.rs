use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use mailmerge_model::{CsvMode, RecordSet};

use crate::delimited::parse_records;
use crate::error::{IngestError, Result};

/// Extensions accepted for table files.
pub const TABLE_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Read and parse a table file.
pub fn read_table(path: &Path, mode: CsvMode) -> Result<RecordSet> {
    let supported = extension(path).is_some_and(|ext| TABLE_EXTENSIONS.contains(&ext.as_str()));
    if !supported {
        return Err(IngestError::UnsupportedTable {
            path: path.to_path_buf(),
        });
    }
    let text = read_text(path)?;
    let records = parse_records(&text, mode)?;
    info!(
        path = %path.display(),
        columns = records.columns.len(),
        records = records.len(),
        "table loaded"
    );
    Ok(records)
}

/// Read a template file as text.
///
/// Word-processor files (`.doc`, `.docx`, `.docm`) are refused; everything else is
/// treated as text, whatever its suffix.
pub fn read_template(path: &Path) -> Result<String> {
    if extension(path).is_some_and(|ext| ext.starts_with("doc")) {
        return Err(IngestError::UnsupportedTemplate {
            path: path.to_path_buf(),
        });
    }
    let text = read_text(path)?;
    info!(path = %path.display(), bytes = text.len(), "template loaded");
    Ok(text)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), "invalid UTF-8 replaced");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    match text.strip_prefix('\u{feff}') {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}
