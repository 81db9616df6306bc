//! Tests for mailmerge-model types.

use mailmerge_model::{
    ColumnSet, FieldMapping, GenerationProgress, LayoutOptions, OutputFormat, Placeholder, Record,
    RecordSet,
};

fn placeholder(token: &str) -> Placeholder {
    Placeholder::new(token).expect("valid placeholder")
}

#[test]
fn mapping_serializes_as_plain_object() {
    let mut mapping = FieldMapping::new();
    mapping.insert(placeholder("{{name}}"), "Name");
    mapping.insert(placeholder("{{Ref_number}}"), "Ref_number");

    let json = serde_json::to_string(&mapping).expect("serialize mapping");
    assert_eq!(
        json,
        r#"{"{{Ref_number}}":"Ref_number","{{name}}":"Name"}"#
    );

    let round: FieldMapping = serde_json::from_str(&json).expect("deserialize mapping");
    assert_eq!(round, mapping);
}

#[test]
fn mapping_rejects_malformed_keys() {
    let result = serde_json::from_str::<FieldMapping>(r#"{"name":"Name"}"#);
    assert!(result.is_err());
}

#[test]
fn missing_ignores_reserved_tokens() {
    let mut mapping = FieldMapping::new();
    mapping.insert(placeholder("{{name}}"), "name");
    let placeholders = vec![
        placeholder("{{name}}"),
        placeholder("{{date}}"),
        placeholder("{{today}}"),
        placeholder("{{course}}"),
    ];

    let missing = mapping.missing(&placeholders);
    assert_eq!(missing, vec![&placeholders[3]]);
    assert!(!mapping.covers(&placeholders));

    mapping.insert(placeholder("{{course}}"), "course");
    assert!(mapping.covers(&placeholders));
}

#[test]
fn record_lookup_treats_empty_as_missing() {
    let record = Record::from_pairs([("name", ""), ("Name", "Jane")]);
    assert_eq!(record.get("name"), Some(""));
    assert_eq!(record.non_empty("name"), None);
    assert_eq!(record.first_non_empty(&["name", "Name"]), Some("Jane"));
    assert_eq!(record.first_non_empty(&["missing"]), None);
}

#[test]
fn column_lookup_ignores_case_and_prefers_first() {
    let columns = ColumnSet::new(vec![
        "NAME".to_string(),
        "name".to_string(),
        "Ref_number".to_string(),
    ]);
    assert_eq!(columns.find_ignore_case("Name"), Some("NAME"));
    assert_eq!(columns.find_ignore_case("ref_NUMBER"), Some("Ref_number"));
    assert_eq!(columns.find_ignore_case("city"), None);
}

#[test]
fn record_set_ordinals_are_one_based() {
    let set = RecordSet::new(
        ColumnSet::new(vec!["name".to_string()]),
        vec![
            Record::from_pairs([("name", "Alice")]),
            Record::from_pairs([("name", "Bob")]),
        ],
    );
    assert_eq!(set.by_ordinal(0), None);
    assert_eq!(set.by_ordinal(2).and_then(|r| r.get("name")), Some("Bob"));
    assert_eq!(set.by_ordinal(3), None);
}

#[test]
fn progress_fraction() {
    let mut progress = GenerationProgress::new(4);
    progress.completed = 2;
    progress.failed = 1;
    assert_eq!(progress.processed(), 3);
    assert!((progress.fraction() - 0.75).abs() < 1e-9);
    assert!((GenerationProgress::new(0).fraction() - 1.0).abs() < 1e-9);
    assert_eq!(progress.percent(), 75);
}

#[test]
fn layout_deserializes_partial_overrides() {
    let layout: LayoutOptions =
        serde_json::from_str(r#"{"line_height": 5.0}"#).expect("deserialize layout");
    assert_eq!(layout.line_height, 5.0);
    assert_eq!(layout.page_height, LayoutOptions::default().page_height);
}

#[test]
fn output_format_extensions() {
    assert_eq!(OutputFormat::Pdf.extension(), "pdf");
    assert_eq!(OutputFormat::Text.extension(), "txt");
}
