//! Inclusion rules: what makes a record a match at all.
//!
//! - Empty and whitespace-only queries return nothing
//! - Every token must appear in the haystack (AND semantics)
//! - Case and surrounding whitespace don't change inclusion or score

use super::common::{ids, make_record, scenario_items};
use catalog_search::{run_search, tokenize, SearchFilters, SearchIndex};

#[test]
fn test_empty_query_returns_nothing() {
    let items = scenario_items();
    for query in ["", " ", "   \t  ", "\n"] {
        assert!(run_search(&items, query, &SearchFilters::none()).is_empty());
        assert!(run_search(&items, query, &SearchFilters::none().with_subject("math")).is_empty());
    }
}

#[test]
fn test_empty_items_return_nothing() {
    assert!(run_search(&[], "weather", &SearchFilters::none()).is_empty());
}

#[test]
fn test_all_tokens_must_match() {
    let items = vec![make_record("p", "Python module quiz", "Python module quiz")];

    let results = run_search(&items, "python zzznomatch", &SearchFilters::none());
    assert!(results.is_empty());

    let results = run_search(&items, "python quiz", &SearchFilters::none());
    assert_eq!(ids(&results), vec!["p"]);
}

#[test]
fn test_token_order_does_not_matter() {
    let items = vec![make_record("p", "Python module quiz", "Python module quiz")];
    let forward = run_search(&items, "python quiz", &SearchFilters::none());
    let backward = run_search(&items, "quiz python", &SearchFilters::none());
    assert_eq!(forward[0].score, backward[0].score);
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let items = vec![make_record("p", "Python module quiz", "Python module quiz")];
    let baseline = run_search(&items, "python", &SearchFilters::none());
    assert_eq!(baseline.len(), 1);

    for query in ["PYTHON", "  python  ", "PyThOn", "\tpython\n"] {
        let results = run_search(&items, query, &SearchFilters::none());
        assert_eq!(ids(&results), ids(&baseline), "query {:?}", query);
        assert_eq!(results[0].score, baseline[0].score, "query {:?}", query);
    }
}

#[test]
fn test_substring_tokens_match_inside_words() {
    let items = vec![make_record("m", "Mechanics", "Physics School Mechanics")];
    let results = run_search(&items, "chan", &SearchFilters::none());
    assert_eq!(ids(&results), vec!["m"]);
}

#[test]
fn test_precomposed_and_decomposed_spellings_match() {
    // "Übungen" precomposed in the haystack, decomposed in the query
    let items = vec![make_record("u", "\u{dc}bungen", "Mathematik \u{dc}bungen")];
    let results = run_search(&items, "U\u{308}bungen", &SearchFilters::none());
    assert_eq!(ids(&results), vec!["u"]);
}

#[test]
fn test_tokenizer_normalizes() {
    assert_eq!(tokenize("  Weather   APP "), vec!["weather", "app"]);
    assert!(tokenize(" \t ").is_empty());
}

#[test]
fn test_scenario_weather() {
    let items = scenario_items();
    let results = run_search(&items, "weather", &SearchFilters::none());
    assert_eq!(ids(&results), vec!["a"]);
    assert_eq!(results[0].match_ranges.len(), 1);
    assert_eq!(results[0].match_ranges[0].start, 0);
    assert_eq!(results[0].match_ranges[0].end, 7);
}

#[test]
fn test_scenario_algebra_filtered_out() {
    let items = scenario_items();
    let filters = SearchFilters::none().with_subject("coding");
    assert!(run_search(&items, "algebra", &filters).is_empty());

    // Same query without the filter finds it
    let results = run_search(&items, "algebra", &SearchFilters::none());
    assert_eq!(ids(&results), vec!["b"]);
}

#[test]
fn test_index_agrees_on_scenario() {
    let items = scenario_items();
    let index = SearchIndex::build(items.clone());
    for query in ["weather", "algebra", "a", "zzz", ""] {
        assert_eq!(
            index.search(query, &SearchFilters::none()),
            run_search(&items, query, &SearchFilters::none()),
            "query {:?}",
            query
        );
    }
}
