use std::fs;

use mailmerge_map::load_mapping_file;
use mailmerge_model::Placeholder;
use tempfile::TempDir;

#[test]
fn reads_plain_json_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mapping.json");
    fs::write(&path, r#"{"{{name}}": "Name", "{{course}}": "Program"}"#).unwrap();

    let mapping = load_mapping_file(&path).unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get(&Placeholder::new("{{course}}").unwrap()), Some("Program"));
}

#[test]
fn reports_missing_and_malformed_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let err = load_mapping_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read mapping"));

    let malformed = dir.path().join("bad.json");
    fs::write(&malformed, r#"{"name": "Name"}"#).unwrap();
    let err = load_mapping_file(&malformed).unwrap_err();
    assert!(err.to_string().contains("Failed to parse mapping"));
}

#[test]
fn loading_leaves_the_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mapping.json");
    let contents = r#"{"{{name}}":"Name"}"#;
    fs::write(&path, contents).unwrap();

    load_mapping_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
