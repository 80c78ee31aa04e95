// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of search: records, filters, ranges, results.
//!
//! A `SearchRecord` is one navigable unit of the catalog, already resolved to a
//! display language. The record builder produces them, the query engine scores
//! them, and rendering surfaces consume `SearchResult`s.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchRecord**: `haystack` is non-empty and contains `title`
//!   (case-insensitively). Ranking looks at the haystack, highlighting looks at
//!   the title; if the title isn't in the haystack the two disagree.
//!
//! - **Record lists**: ids are unique within one built list. Records are never
//!   patched in place; a language change builds a fresh list.
//!
//! - **MatchRange**: `start < end`, offsets in chars of the field they were
//!   computed over. Lists of ranges on a result are merged and sorted.
//!
//! `contracts::validate_records` checks the record invariants.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// RECORD KIND
// =============================================================================

/// What a search record represents in the catalog.
///
/// Closed set. Rendering code picks icons and labels off this instead of
/// string-matching ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Subject,
    Course,
    Module,
    Section,
    Quiz,
    Worksheet,
    Homework,
    Material,
}

impl RecordKind {
    /// Every kind, in catalog nesting order.
    pub const ALL: [RecordKind; 8] = [
        RecordKind::Subject,
        RecordKind::Course,
        RecordKind::Module,
        RecordKind::Section,
        RecordKind::Quiz,
        RecordKind::Worksheet,
        RecordKind::Homework,
        RecordKind::Material,
    ];

    /// Stable wire name (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Subject => "subject",
            RecordKind::Course => "course",
            RecordKind::Module => "module",
            RecordKind::Section => "section",
            RecordKind::Quiz => "quiz",
            RecordKind::Worksheet => "worksheet",
            RecordKind::Homework => "homework",
            RecordKind::Material => "material",
        }
    }

    /// Short badge for terminal output.
    pub fn badge(self) -> &'static str {
        match self {
            RecordKind::Subject => "SUBJ",
            RecordKind::Course => "CRSE",
            RecordKind::Module => "MOD",
            RecordKind::Section => "SECT",
            RecordKind::Quiz => "QUIZ",
            RecordKind::Worksheet => "WKST",
            RecordKind::Homework => "HW",
            RecordKind::Material => "MAT",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One indexed, navigable unit of content.
///
/// Not every kind fills every dimension: a subject record has no level, a
/// module record has no section type. The `*_title` fields are breadcrumb
/// labels in the record's language; the `*_id` fields are what filters compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub kind: RecordKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
    pub href: String,
    pub haystack: String,
}

impl SearchRecord {
    /// A record with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        kind: RecordKind,
        title: impl Into<String>,
        href: impl Into<String>,
        haystack: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            snippet: None,
            subject_id: None,
            subject_title: None,
            level_id: None,
            level_title: None,
            module_id: None,
            module_title: None,
            section_type: None,
            href: href.into(),
            haystack: haystack.into(),
        }
    }

    /// "Subject · Level · Module", skipping whatever is missing.
    pub fn breadcrumb(&self) -> String {
        [&self.subject_title, &self.level_title, &self.module_title]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

// =============================================================================
// FILTERS
// =============================================================================

/// Structured filters applied before scoring.
///
/// Every field is optional; `None` means no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
}

// =============================================================================
// RESULTS
// =============================================================================

/// Half-open `[start, end)` span over a displayed field, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The substring of `text` this range covers, if it lies within `text`.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.is_empty() {
            return None;
        }
        let mut boundaries = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()));
        let start = boundaries.nth(self.start)?;
        let end = boundaries.nth(self.end - self.start - 1)?;
        text.get(start..end)
    }
}

/// A matched record with its relevance score and title highlight spans.
///
/// Serializes flat: the record's fields plus `score` and `matchRanges`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub record: SearchRecord,
    pub score: u32,
    pub match_ranges: Vec<MatchRange>,
}

impl SearchResult {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}
