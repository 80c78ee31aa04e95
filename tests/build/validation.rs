//! Record validation.

use super::common::{fixture_records, make_record};
use catalog_search::{validate_records, Language, RecordError};

#[test]
fn test_fixture_valid_in_every_language() {
    for lang in Language::ALL {
        let records = fixture_records(lang);
        assert_eq!(validate_records(&records), Ok(()), "language {}", lang);
    }
}

#[test]
fn test_empty_haystack_rejected() {
    let records = vec![make_record("a", "", "   ")];
    assert_eq!(
        validate_records(&records),
        Err(RecordError::EmptyHaystack { id: "a".into() })
    );
}

#[test]
fn test_title_missing_from_haystack_rejected() {
    let records = vec![make_record("a", "Weather App", "Programming JavaScript fetch api")];
    assert_eq!(
        validate_records(&records),
        Err(RecordError::TitleNotInHaystack {
            id: "a".into(),
            title: "Weather App".into(),
        })
    );
}

#[test]
fn test_title_check_ignores_case() {
    let records = vec![make_record("a", "WEATHER app", "Programming weather APP")];
    assert_eq!(validate_records(&records), Ok(()));
}

#[test]
fn test_duplicate_ids_rejected() {
    let records = vec![
        make_record("a", "One", "One"),
        make_record("b", "Two", "Two"),
        make_record("a", "Three", "Three"),
    ];
    assert_eq!(
        validate_records(&records),
        Err(RecordError::DuplicateId { id: "a".into() })
    );
}

#[test]
fn test_error_messages_name_the_record() {
    let err = validate_records(&[make_record("quiz:x", "Quiz", "")]).unwrap_err();
    assert_eq!(err.to_string(), "record 'quiz:x' has an empty haystack");
}
