//! Title highlight ranges on search results.

use super::common::{make_record, scenario_items};
use catalog_search::{
    find_match_ranges, merge_ranges, run_search, segments, MatchRange, SearchFilters, Segment,
};

#[test]
fn test_weather_app_range() {
    assert_eq!(find_match_ranges("Weather App", "app"), vec![MatchRange::new(8, 11)]);
}

#[test]
fn test_merge_adjacent_and_gapped() {
    assert_eq!(
        merge_ranges(&[MatchRange::new(0, 3), MatchRange::new(3, 6)]),
        vec![MatchRange::new(0, 6)]
    );
    assert_eq!(
        merge_ranges(&[MatchRange::new(0, 3), MatchRange::new(5, 6)]),
        vec![MatchRange::new(0, 3), MatchRange::new(5, 6)]
    );
}

#[test]
fn test_result_ranges_cover_whole_query() {
    let items = scenario_items();
    let results = run_search(&items, "  Weather App ", &SearchFilters::none());
    assert_eq!(results[0].match_ranges, vec![MatchRange::new(0, 11)]);
}

#[test]
fn test_multi_token_query_highlights_only_contiguous_phrase() {
    // Tokens match separately in the haystack, but the whole phrase isn't in the title
    let items = vec![make_record("w", "Weather App", "Programming Weather App fetch")];
    let results = run_search(&items, "app weather", &SearchFilters::none());
    assert_eq!(results.len(), 1);
    assert!(results[0].match_ranges.is_empty());
}

#[test]
fn test_haystack_only_match_has_no_ranges() {
    let items = scenario_items();
    let results = run_search(&items, "javascript", &SearchFilters::none());
    assert_eq!(results.len(), 1);
    assert!(results[0].match_ranges.is_empty());
}

#[test]
fn test_repeated_occurrences_all_highlighted() {
    let items = vec![make_record("d", "Data and data", "Data and data")];
    let results = run_search(&items, "data", &SearchFilters::none());
    assert_eq!(
        results[0].match_ranges,
        vec![MatchRange::new(0, 4), MatchRange::new(9, 13)]
    );
}

#[test]
fn test_decomposed_query_ranks_without_highlight() {
    let items = vec![make_record("c", "Caf\u{e9} culture", "Caf\u{e9} culture")];
    let results = run_search(&items, "cafe\u{301}", &SearchFilters::none());
    assert_eq!(results.len(), 1);
    assert!(results[0].match_ranges.is_empty());
}

#[test]
fn test_ranges_render_as_segments() {
    let items = scenario_items();
    let results = run_search(&items, "app", &SearchFilters::none());
    let result = &results[0];
    assert_eq!(
        segments(&result.record.title, &result.match_ranges),
        vec![
            Segment { text: "Weather ", marked: false },
            Segment { text: "App", marked: true },
        ]
    );
}

#[test]
fn test_ranges_slice_the_title() {
    let items = vec![make_record("u", "\u{dc}bungen zur Algebra", "Mathematik \u{dc}bungen zur Algebra")];
    let results = run_search(&items, "algebra", &SearchFilters::none());
    let range = results[0].match_ranges[0];
    assert_eq!(range, MatchRange::new(12, 19));
    assert_eq!(range.slice(&results[0].record.title), Some("Algebra"));
}
