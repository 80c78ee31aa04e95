// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: records + query + filters in, ranked results out.
//!
//! Pipeline:
//!
//! ```text
//! trim ─▶ tokenize ─▶ filter ─▶ score (AND) ─▶ stable sort ─▶ cap ─▶ highlight titles
//! ```
//!
//! Pure function of its inputs. No caching, no state between calls; the caller
//! re-invokes on every keystroke and throws away stale results itself. For a
//! version that normalizes haystacks once up front, see [`SearchIndex`].
//!
//! Empty query, empty record list, filters that exclude everything: all three
//! give an empty `Vec`. Nothing here returns an error.
//!
//! [`SearchIndex`]: crate::SearchIndex

use crate::contracts;
use crate::highlight::{find_match_ranges, merge_ranges};
use crate::scoring::score_item;
use crate::types::{SearchFilters, SearchRecord, SearchResult};
use crate::util::normalize::normalize;

/// Hard cap on returned results.
pub const MAX_RESULTS: usize = 12;

/// Knobs for a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results returned.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { limit: MAX_RESULTS }
    }
}

/// Split a query into normalized tokens.
///
/// ```
/// use catalog_search::tokenize;
///
/// assert_eq!(tokenize("  Python   QUIZ "), vec!["python", "quiz"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query.trim())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Search `items` with the default cap of [`MAX_RESULTS`].
///
/// ```
/// use catalog_search::{run_search, RecordKind, SearchFilters, SearchRecord};
///
/// let items = vec![SearchRecord::new(
///     "a",
///     RecordKind::Module,
///     "Weather App",
///     "/platform/coding/js/3",
///     "Programming JavaScript Weather App fetch api",
/// )];
///
/// let results = run_search(&items, "weather", &SearchFilters::none());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].match_ranges[0].start, 0);
/// assert_eq!(results[0].match_ranges[0].end, 7);
/// ```
pub fn run_search(items: &[SearchRecord], query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
    run_search_with(items, query, filters, &SearchOptions::default())
}

/// Search `items` with explicit options.
pub fn run_search_with(
    items: &[SearchRecord],
    query: &str,
    filters: &SearchFilters,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let scored: Vec<(&SearchRecord, u32)> = items
        .iter()
        .filter(|record| filters.matches(record))
        .filter_map(|record| score_item(&record.haystack, &tokens).map(|score| (record, score)))
        .collect();

    tracing::debug!(
        tokens = tokens.len(),
        records = items.len(),
        matched = scored.len(),
        "ran search"
    );

    rank(scored, query, options.limit)
}

/// Sort, cap and highlight. Shared with the index so both paths rank the same way.
///
/// `query` must already be trimmed. The sort is stable: equal scores keep the
/// order the records were given in.
pub(crate) fn rank(mut scored: Vec<(&SearchRecord, u32)>, query: &str, limit: usize) -> Vec<SearchResult> {
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);

    let results: Vec<SearchResult> = scored
        .into_iter()
        .map(|(record, score)| SearchResult {
            record: record.clone(),
            score,
            match_ranges: merge_ranges(&find_match_ranges(&record.title, query)),
        })
        .collect();

    contracts::check_results_well_formed(&results, limit);
    results
}
