use std::fs;

use mailmerge_ingest::{IngestError, read_table, read_template};
use mailmerge_model::CsvMode;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_csv_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "students.CSV", b"\xEF\xBB\xBFname,Ref_number\nAlice,REF001\n");
    let set = read_table(&path, CsvMode::Naive).expect("read table");
    assert_eq!(set.columns.as_slice(), ["name", "Ref_number"]);
    assert_eq!(set.records[0].get("Ref_number"), Some("REF001"));
}

#[test]
fn rejects_spreadsheet_binaries() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "students.xlsx", b"PK\x03\x04");
    let err = read_table(&path, CsvMode::Naive).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedTable { .. }));
}

#[test]
fn missing_table_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_table(&dir.path().join("absent.csv"), CsvMode::Naive).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn reads_text_template_verbatim() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "offer.txt", b"Dear {{ name }},\n\nWelcome.\n");
    let template = read_template(&path).expect("read template");
    assert_eq!(template, "Dear {{ name }},\n\nWelcome.\n");
}

#[test]
fn template_without_extension_is_text() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "OFFER", b"Hello {{name}}");
    assert_eq!(read_template(&path).expect("read template"), "Hello {{name}}");
}

#[test]
fn rejects_word_documents() {
    let dir = TempDir::new().expect("temp dir");
    for name in ["offer.doc", "offer.DOCX"] {
        let path = write(&dir, name, b"binary");
        let err = read_template(&path).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedTemplate { .. }));
    }
}
