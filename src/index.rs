// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A record list with its haystacks normalized up front.
//!
//! [`run_search`](crate::run_search) normalizes every candidate haystack on
//! every call. That's fine for a few hundred records and a search box, but the
//! work is the same each time, so `SearchIndex` does it once per build.
//!
//! # Invariants
//!
//! 1. **SAME_RESULTS**: for any records, query, filters and options,
//!    `SearchIndex::build(records).search_with(q, f, o)` equals
//!    `run_search_with(&records, q, f, o)`. Checked by a differential property
//!    test.
//! 2. **IMMUTABLE**: an index never changes after `build`. A language switch
//!    means building a new index from freshly built records.
//!
//! With the `parallel` feature, candidate scoring fans out over rayon.
//! `collect` on an indexed parallel iterator preserves input order, so the
//! stable tie-break is the same as the sequential path.

use crate::contracts;
use crate::query::{rank, tokenize, SearchOptions};
use crate::scoring::score_normalized;
use crate::types::{SearchFilters, SearchRecord, SearchResult};
use crate::util::normalize::normalize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Records plus their normalized haystacks, ready to search.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    /// `normalized[i] == normalize(&records[i].haystack)`
    normalized: Vec<String>,
}

impl SearchIndex {
    /// Normalize every haystack once.
    ///
    /// Debug builds also validate the records and log (not panic) on the first
    /// violation; use [`contracts::validate_records`] for a hard check.
    pub fn build(records: Vec<SearchRecord>) -> Self {
        if cfg!(debug_assertions) {
            if let Err(err) = contracts::validate_records(&records) {
                tracing::warn!(%err, "building index over invalid records");
            }
        }

        let normalized: Vec<String> = {
            #[cfg(feature = "parallel")]
            {
                records.par_iter().map(|r| normalize(&r.haystack)).collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                records.iter().map(|r| normalize(&r.haystack)).collect()
            }
        };

        tracing::debug!(records = records.len(), "built search index");
        Self {
            records,
            normalized,
        }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Search with the default cap.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SearchResult> {
        self.search_with(query, filters, &SearchOptions::default())
    }

    /// Search with explicit options.
    pub fn search_with(
        &self,
        query: &str,
        filters: &SearchFilters,
        options: &SearchOptions,
    ) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() || self.records.is_empty() {
            return Vec::new();
        }
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let scored: Vec<(&SearchRecord, u32)> = {
            #[cfg(feature = "parallel")]
            {
                self.records
                    .par_iter()
                    .zip(self.normalized.par_iter())
                    .filter_map(|(record, haystack)| score_candidate(record, haystack, filters, &tokens))
                    .collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                self.records
                    .iter()
                    .zip(self.normalized.iter())
                    .filter_map(|(record, haystack)| score_candidate(record, haystack, filters, &tokens))
                    .collect()
            }
        };

        tracing::debug!(
            tokens = tokens.len(),
            records = self.records.len(),
            matched = scored.len(),
            "searched index"
        );

        rank(scored, query, options.limit)
    }
}

fn score_candidate<'a>(
    record: &'a SearchRecord,
    haystack: &str,
    filters: &SearchFilters,
    tokens: &[String],
) -> Option<(&'a SearchRecord, u32)> {
    if !filters.matches(record) {
        return None;
    }
    score_normalized(haystack, tokens).map(|score| (record, score))
}

impl From<Vec<SearchRecord>> for SearchIndex {
    fn from(records: Vec<SearchRecord>) -> Self {
        Self::build(records)
    }
}
