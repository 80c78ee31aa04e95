//! Loading catalogs and pre-built record lists from disk.

use super::common::{fixture_records, FIXTURE_CATALOG};
use catalog_search::{load_records, Catalog, CatalogError, Language};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_fixture_catalog() {
    let catalog = Catalog::load(FIXTURE_CATALOG).unwrap();
    let subjects: Vec<&str> = catalog.subjects.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(subjects, vec!["math", "physics"]);
    let groups: Vec<&str> = catalog.course_groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(groups, vec!["coding", "office"]);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    match Catalog::load(&path) {
        Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{ \"subjects\": [ { \"id\": 1 } ] }").unwrap();
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    assert!(err.to_string().starts_with("invalid catalog JSON"));
}

#[test]
fn test_load_minimal_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"subjects": [{"id": "chemistry", "title": {"en": "Chemistry"}}]}"#,
    )
    .unwrap();
    let catalog = Catalog::load(&path).unwrap();
    let records = catalog.records(Language::En);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "subject:chemistry");
}

#[test]
fn test_records_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    let records = fixture_records(Language::De);
    fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let loaded = load_records(&path).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_records_file_must_be_an_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, r#"{"id": "a"}"#).unwrap();
    assert!(matches!(load_records(&path), Err(CatalogError::Json(_))));
}
