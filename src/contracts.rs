// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for records and search output.
//!
//! Two kinds of check live here:
//!
//! 1. [`validate_records`] is a real validation pass that returns errors. The
//!    CLI runs it on every catalog it loads; callers building their own record
//!    lists should too.
//! 2. The `check_*` functions are `debug_assert!`s. They cost nothing in
//!    release builds and catch ranking or highlighting regressions early in
//!    tests.
//!
//! | Contract                      | Property                                         |
//! |-------------------------------|--------------------------------------------------|
//! | `validate_records`            | haystack non-empty, title ⊆ haystack, unique ids |
//! | `check_results_well_formed`   | within limit, score descending, ranges merged    |

use std::collections::HashSet;

use crate::error::RecordError;
use crate::types::{SearchRecord, SearchResult};
use crate::util::normalize::fold_case;

/// Check every record invariant; stops at the first violation.
pub fn validate_records(records: &[SearchRecord]) -> Result<(), RecordError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        validate_record(record)?;
        if !seen.insert(record.id.as_str()) {
            return Err(RecordError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}

/// Check the per-record invariants (not id uniqueness).
pub fn validate_record(record: &SearchRecord) -> Result<(), RecordError> {
    if record.haystack.trim().is_empty() {
        return Err(RecordError::EmptyHaystack {
            id: record.id.clone(),
        });
    }
    if !fold_case(&record.haystack).contains(&fold_case(&record.title)) {
        return Err(RecordError::TitleNotInHaystack {
            id: record.id.clone(),
            title: record.title.clone(),
        });
    }
    Ok(())
}

/// Debug-only: results respect the limit, are sorted by score descending, and
/// carry merged title ranges that stay inside the title.
#[inline]
pub fn check_results_well_formed(results: &[SearchResult], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "{} results exceed limit {}",
        results.len(),
        limit
    );
    debug_assert!(
        results.windows(2).all(|w| w[0].score >= w[1].score),
        "results not sorted by descending score"
    );
    #[cfg(debug_assertions)]
    for result in results {
        let title_len = result.record.title.chars().count();
        debug_assert!(
            result.match_ranges.iter().all(|r| r.start < r.end && r.end <= title_len),
            "match range outside title of '{}'",
            result.record.id
        );
        debug_assert!(
            crate::highlight::merge_ranges(&result.match_ranges) == result.match_ranges,
            "match ranges of '{}' are not merged",
            result.record.id
        );
    }
}
