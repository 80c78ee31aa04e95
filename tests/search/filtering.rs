//! Structured filters applied before scoring.

use super::common::{ids, make_scoped_record, make_section_record};
use catalog_search::{
    run_search, FilterState, SearchFilters, SearchRecord, LEVEL_SCHOOL, LEVEL_UNIVERSITY,
};

fn mixed_records() -> Vec<SearchRecord> {
    vec![
        make_section_record("m-s-theory", "Motion", "Mathematics School Motion graphs", "math", "school", "theory"),
        make_section_record("p-s-theory", "Motion", "Physics School Motion and forces", "physics", "school", "theory"),
        make_section_record("p-s-quiz", "Motion quiz", "Physics School Motion quiz", "physics", "school", "quiz"),
        make_section_record("p-u-theory", "Motion", "Physics University Motion tensors", "physics", "university", "theory"),
        make_scoped_record("m-u-module", "Motion", "Mathematics University Motion", "math", "university"),
    ]
}

#[test]
fn test_subject_filter_is_exclusive() {
    let items = mixed_records();
    let results = run_search(&items, "motion", &SearchFilters::none().with_subject("math"));
    assert_eq!(ids(&results).len(), 2);
    assert!(results.iter().all(|r| r.record.subject_id.as_deref() == Some("math")));
}

#[test]
fn test_level_filter_is_exclusive() {
    let items = mixed_records();
    let results = run_search(&items, "motion", &SearchFilters::none().with_level(LEVEL_UNIVERSITY));
    let mut got = ids(&results);
    got.sort_unstable();
    assert_eq!(got, vec!["m-u-module", "p-u-theory"]);
}

#[test]
fn test_section_filter_excludes_records_without_section() {
    let items = mixed_records();
    let results = run_search(&items, "motion", &SearchFilters::none().with_section_type("theory"));
    let mut got = ids(&results);
    got.sort_unstable();
    // The module record has no section type, so it never passes a section filter
    assert_eq!(got, vec!["m-s-theory", "p-s-theory", "p-u-theory"]);
}

#[test]
fn test_dimensions_combine_with_and() {
    let items = mixed_records();
    let filters = SearchFilters::none()
        .with_subject("physics")
        .with_level(LEVEL_SCHOOL)
        .with_section_type("quiz");
    let results = run_search(&items, "motion", &filters);
    assert_eq!(ids(&results), vec!["p-s-quiz"]);
}

#[test]
fn test_filter_beats_a_strong_text_match() {
    let items = mixed_records();
    // "physics" only appears in physics haystacks; a math filter still wins
    let results = run_search(&items, "physics", &SearchFilters::none().with_subject("math"));
    assert!(results.is_empty());
}

#[test]
fn test_filters_that_exclude_everything() {
    let items = mixed_records();
    let results = run_search(&items, "motion", &SearchFilters::none().with_subject("chemistry"));
    assert!(results.is_empty());
}

#[test]
fn test_empty_string_filter_is_ignored() {
    let items = mixed_records();
    let unfiltered = run_search(&items, "motion", &SearchFilters::none());
    let blank = run_search(
        &items,
        "motion",
        &SearchFilters::none().with_subject("").with_level("").with_section_type(""),
    );
    assert_eq!(blank, unfiltered);
}

#[test]
fn test_filter_state_drives_search() {
    let items = mixed_records();
    let mut state = FilterState::new();
    state.toggle_subject("physics");
    state.toggle_section_type("theory");
    let results = run_search(&items, "motion", &state.effective());
    let mut got = ids(&results);
    got.sort_unstable();
    assert_eq!(got, vec!["p-s-theory", "p-u-theory"]);

    // Re-selecting the active chip clears that dimension
    state.toggle_section_type("theory");
    let results = run_search(&items, "motion", &state.effective());
    assert_eq!(results.len(), 3);
}

#[test]
fn test_scoped_state_cannot_escape_its_subject() {
    let items = mixed_records();
    let mut state = FilterState::scoped("math");
    state.toggle_subject("physics");
    let results = run_search(&items, "motion", &state.effective());
    assert!(results.iter().all(|r| r.record.subject_id.as_deref() == Some("math")));
    assert_eq!(results.len(), 2);
}
