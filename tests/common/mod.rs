//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catalog_search::{Catalog, Language, SearchRecord, SearchResult};
use std::sync::LazyLock;

// Re-export canonical record constructors from catalog_search::testing
pub use catalog_search::testing::{make_record, make_scoped_record, make_section_record};

// ============================================================================
// FIXTURES
// ============================================================================

/// The checked-in sample catalog (math, physics, coding and office).
pub const FIXTURE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures/catalog.json");

/// Parsed once per test binary.
static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load(FIXTURE_CATALOG)
        .unwrap_or_else(|e| panic!("fixture catalog at {} failed to load: {}", FIXTURE_CATALOG, e))
});

pub fn fixture_catalog() -> &'static Catalog {
    &CATALOG
}

/// Records built from the fixture catalog.
pub fn fixture_records(language: Language) -> Vec<SearchRecord> {
    fixture_catalog().records(language)
}

/// The two-record scenario: a coding module and a math module.
pub fn scenario_items() -> Vec<SearchRecord> {
    vec![
        make_scoped_record(
            "a",
            "Weather App",
            "Programming JavaScript Weather App fetch api",
            "coding",
            "js",
        ),
        make_scoped_record(
            "b",
            "Algebra basics",
            "Mathematics Algebra basics equations",
            "math",
            "school",
        ),
    ]
}

/// `n` records that all match the token "topic", at increasing positions.
///
/// Record `i` has `i` filler words in front of "topic", so lower `i` scores
/// higher. Ids are `t00`, `t01`, ...
pub fn staggered_records(n: usize) -> Vec<SearchRecord> {
    (0..n)
        .map(|i| {
            let filler = "xx ".repeat(i);
            make_record(
                &format!("t{:02}", i),
                &format!("Topic {}", i),
                &format!("{}Topic {}", filler, i),
            )
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id()).collect()
}

/// Limit, ordering and highlight invariants that every result list must hold.
pub fn assert_results_well_formed(results: &[SearchResult], limit: usize) {
    assert!(
        results.len() <= limit,
        "{} results exceed limit {}",
        results.len(),
        limit
    );
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "'{}' ({}) ranked above '{}' ({})",
            pair[0].id(),
            pair[0].score,
            pair[1].id(),
            pair[1].score
        );
    }
    for result in results {
        let title_len = result.record.title.chars().count();
        for range in &result.match_ranges {
            assert!(
                range.start < range.end && range.end <= title_len,
                "range {:?} outside title '{}'",
                range,
                result.record.title
            );
        }
        for pair in result.match_ranges.windows(2) {
            assert!(
                pair[0].end < pair[1].start,
                "ranges {:?} and {:?} of '{}' not merged",
                pair[0],
                pair[1],
                result.id()
            );
        }
    }
}
