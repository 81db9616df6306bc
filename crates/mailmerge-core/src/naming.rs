//! Artifact naming for generated documents.
//!
//! Names follow `{sanitized display name}_{reference}.{extension}`. Two records that
//! produce the same name are not told apart; the later artifact replaces the earlier.

use mailmerge_model::Record;

/// Columns holding the recipient's display name, in lookup order.
pub const NAME_COLUMNS: [&str; 2] = ["name", "Name"];

/// Columns holding the reference number, in lookup order.
pub const REFERENCE_COLUMNS: [&str; 2] = ["Ref_number", "ref_number"];

/// Reference printed in the document header when the record has none.
pub const MISSING_REFERENCE: &str = "N/A";

/// Display name for a record, or `Student_{ordinal}` when it has none.
pub fn display_name(record: &Record, ordinal: usize) -> String {
    record
        .first_non_empty(&NAME_COLUMNS)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Student_{ordinal}"))
}

/// Reference token for a file name, or `REF{ordinal:03}` when the record has none.
pub fn reference_token(record: &Record, ordinal: usize) -> String {
    record
        .first_non_empty(&REFERENCE_COLUMNS)
        .map(str::to_string)
        .unwrap_or_else(|| format!("REF{ordinal:03}"))
}

/// Reference shown in the document header.
pub fn header_reference(record: &Record) -> String {
    record
        .first_non_empty(&REFERENCE_COLUMNS)
        .unwrap_or(MISSING_REFERENCE)
        .to_string()
}

/// Keep ASCII letters, digits and whitespace, then turn each whitespace run into `_`.
pub fn sanitize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
        } else if ch.is_ascii_alphanumeric() {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// File name for the record at 1-based `ordinal`.
pub fn artifact_name(record: &Record, ordinal: usize, extension: &str) -> String {
    format!(
        "{}_{}.{extension}",
        sanitize_name(&display_name(record, ordinal)),
        reference_token(record, ordinal)
    )
}
