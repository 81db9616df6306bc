use mailmerge_ingest::{parse_naive, parse_quoted, parse_records};
use mailmerge_model::CsvMode;

#[test]
fn header_defines_columns_and_keys() {
    let set = parse_naive("name,Ref_number\nAlice,REF001\nBob,REF002\n");
    assert_eq!(set.columns.as_slice(), ["name", "Ref_number"]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.records[0].get("name"), Some("Alice"));
    assert_eq!(set.records[0].get("Ref_number"), Some("REF001"));
    assert_eq!(set.records[1].get("name"), Some("Bob"));
}

#[test]
fn short_rows_pad_with_empty_values() {
    let set = parse_naive("a,b,c\n1\n");
    let record = &set.records[0];
    assert_eq!(record.get("a"), Some("1"));
    assert_eq!(record.get("b"), Some(""));
    assert_eq!(record.get("c"), Some(""));
}

#[test]
fn long_rows_drop_extra_fields() {
    let set = parse_naive("a,b\n1,2,3,4\n");
    let record = &set.records[0];
    assert_eq!(record.len(), 2);
    assert_eq!(record.get("b"), Some("2"));
}

#[test]
fn quotes_and_whitespace_are_stripped() {
    let set = parse_naive("\"name\" , \"city\"\n  \"Alice\" ,  Paris \n");
    assert_eq!(set.columns.as_slice(), ["name", "city"]);
    assert_eq!(set.records[0].get("name"), Some("Alice"));
    assert_eq!(set.records[0].get("city"), Some("Paris"));
}

#[test]
fn naive_mode_splits_quoted_commas() {
    let set = parse_naive("name,city\n\"Doe, Jane\",Paris\n");
    let record = &set.records[0];
    assert_eq!(record.get("name"), Some("Doe"));
    assert_eq!(record.get("city"), Some("Jane"));
}

#[test]
fn duplicate_headers_keep_last_value() {
    let set = parse_naive("name,name\nfirst,second\n");
    assert_eq!(set.columns.as_slice(), ["name", "name"]);
    assert_eq!(set.records[0].get("name"), Some("second"));
}

#[test]
fn whitespace_only_lines_become_records() {
    let set = parse_naive("name,ref\n   \nAlice,1\n");
    assert_eq!(set.len(), 2);
    assert_eq!(set.records[0].get("name"), Some(""));
}

#[test]
fn quoted_mode_honours_embedded_delimiters() {
    let set = parse_quoted("name,city\n\"Doe, Jane\",\"Paris\nFrance\"\n").expect("parse");
    let record = &set.records[0];
    assert_eq!(record.get("name"), Some("Doe, Jane"));
    assert_eq!(record.get("city"), Some("Paris\nFrance"));
}

#[test]
fn quoted_mode_pads_short_rows() {
    let set = parse_records("a,b,c\n1,2\n", CsvMode::Quoted).expect("parse");
    assert_eq!(set.records[0].get("c"), Some(""));
}

#[test]
fn quoted_mode_skips_blank_rows() {
    let set = parse_records("a,b\n,\n1,2\n", CsvMode::Quoted).expect("parse");
    assert_eq!(set.len(), 1);
    assert_eq!(set.records[0].get("a"), Some("1"));
}
