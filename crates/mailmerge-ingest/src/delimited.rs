use csv::{ReaderBuilder, Trim};
use tracing::debug;

use mailmerge_model::{ColumnSet, CsvMode, Record, RecordSet};

use crate::error::Result;

const DELIMITER: char = ',';

/// Parse delimited text with the requested mode.
///
/// Only [`CsvMode::Quoted`] can fail; the naive splitter accepts any input.
pub fn parse_records(text: &str, mode: CsvMode) -> Result<RecordSet> {
    match mode {
        CsvMode::Naive => Ok(parse_naive(text)),
        CsvMode::Quoted => parse_quoted(text),
    }
}

/// Strip surrounding whitespace, then drop every `"` character.
pub fn clean_field(raw: &str) -> String {
    raw.trim_matches(is_trimmable).replace('"', "")
}

fn is_trimmable(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Best-effort comma splitter.
///
/// Empty lines are skipped and the first remaining line is the header. Fields are
/// matched to headers by position: missing trailing fields become empty strings and
/// extra fields are dropped. Quotes are stripped, not interpreted, so a quoted field
/// containing a comma is split in two.
pub fn parse_naive(text: &str) -> RecordSet {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty());

    let Some(header_line) = lines.next() else {
        return RecordSet::default();
    };
    let headers: Vec<String> = header_line.split(DELIMITER).map(clean_field).collect();

    let mut records = Vec::new();
    for (line_idx, line) in lines.enumerate() {
        let fields: Vec<String> = line.split(DELIMITER).map(clean_field).collect();
        if fields.len() != headers.len() {
            debug!(
                row = line_idx + 1,
                fields = fields.len(),
                columns = headers.len(),
                "row shape differs from header"
            );
        }
        records.push(zip_record(&headers, &fields));
    }

    debug!(
        columns = headers.len(),
        records = records.len(),
        "parsed table"
    );
    RecordSet::new(ColumnSet::new(headers), records)
}

/// Parse with full CSV quoting rules.
///
/// Row shape is handled like [`parse_naive`]; rows with only empty fields are skipped.
pub fn parse_quoted(text: &str) -> Result<RecordSet> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields: Vec<String> = row.iter().map(str::to_string).collect();
        if fields.iter().all(String::is_empty) {
            continue;
        }
        rows.push(fields);
    }

    let mut rows = rows.into_iter();
    let Some(headers) = rows.next() else {
        return Ok(RecordSet::default());
    };
    let records: Vec<Record> = rows.map(|fields| zip_record(&headers, &fields)).collect();

    debug!(
        columns = headers.len(),
        records = records.len(),
        "parsed quoted table"
    );
    Ok(RecordSet::new(ColumnSet::new(headers), records))
}

fn zip_record(headers: &[String], fields: &[String]) -> Record {
    Record::from_pairs(headers.iter().enumerate().map(|(idx, header)| {
        let value = fields.get(idx).cloned().unwrap_or_default();
        (header.clone(), value)
    }))
}
