use honors_core::{
    all_honors, from_json_str, to_json_string, write_json, CollectionValidationError, ExportError,
    HonorRecord,
};
use std::fs;

#[test]
fn canonical_json_uses_page_schema_fields() {
    let text = to_json_string(all_honors(), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let items = value.as_array().expect("top-level array");
    assert_eq!(items.len(), 11);

    let tpctf = &items[0];
    assert_eq!(tpctf["id"], "tpctf_2025");
    assert_eq!(tpctf["name"], "TPCTF 2025");
    assert_eq!(tpctf["date"], "2025-03-08");
    assert_eq!(tpctf["rank"], "6th Place");
    assert!(tpctf.get("isMilestone").is_none());

    let nkctf = items
        .iter()
        .find(|item| item["id"] == "nkctf_2023")
        .expect("nkctf_2023 present");
    assert_eq!(nkctf["isMilestone"], true);
}

#[test]
fn exported_json_decodes_back_to_same_records() {
    let text = to_json_string(all_honors(), true).unwrap();
    let decoded = from_json_str(&text).unwrap();
    assert_eq!(decoded.as_slice(), all_honors());
}

#[test]
fn explicit_false_milestone_equals_absent() {
    let decoded = from_json_str(
        r#"[
            {"id":"a","name":"A CTF","date":"2024-01-01","rank":"1st Place","isMilestone":false},
            {"id":"b","name":"B CTF","date":"2024-01-02","rank":"2nd Place"}
        ]"#,
    )
    .unwrap();
    assert!(!decoded[0].is_milestone);
    assert!(!decoded[1].is_milestone);
    assert_eq!(
        decoded[0],
        HonorRecord::new("a", "A CTF", "2024-01-01", "1st Place")
    );
}

#[test]
fn decode_rejects_duplicate_ids() {
    let err = from_json_str(
        r#"[
            {"id":"a","name":"A CTF","date":"2024-01-01","rank":"1st Place"},
            {"id":"a","name":"A CTF again","date":"2024-02-01","rank":"2nd Place"}
        ]"#,
    )
    .unwrap_err();
    match err {
        ExportError::Validation(CollectionValidationError::DuplicateId(id)) => assert_eq!(id, "a"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decode_rejects_bad_dates_and_wrong_types() {
    let err = from_json_str(r#"[{"id":"a","name":"A","date":"2024/01/01","rank":"1st"}]"#)
        .unwrap_err();
    assert!(matches!(err, ExportError::Validation(_)));
    assert!(err.to_string().contains("malformed"));

    let err = from_json_str(
        r#"[{"id":"a","name":"A","date":"2024-01-01","rank":"1st","isMilestone":"yes"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::Json(_)));
}

#[test]
fn write_json_to_file_produces_decodable_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("honors.json");
    let file = fs::File::create(&path).unwrap();
    write_json(file, all_honors(), true).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    assert!(text.contains("强网杯 S8 Qual"));
    assert_eq!(from_json_str(&text).unwrap().len(), 11);
}
