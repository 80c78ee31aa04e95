// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured filters: which records are even candidates?
//!
//! Filtering runs before scoring. Each dimension (subject, level, section
//! type) is optional and independent. A record failing any *set* dimension is
//! out, no matter how well its haystack matches.
//!
//! [`FilterState`] is the chip-bar side of the same thing: one selection per
//! dimension, selecting replaces, re-selecting a chip clears it. It owns no
//! search logic; callers hand [`FilterState::effective`] to the query engine.

use crate::types::{SearchFilters, SearchRecord};

/// Level id for school-level content.
pub const LEVEL_SCHOOL: &str = "school";

/// Level id for university-level content.
pub const LEVEL_UNIVERSITY: &str = "university";

/// Display order of section-type chips.
pub const SECTION_TYPE_ORDER: [&str; 14] = [
    "theory",
    "examples",
    "practice",
    "demo",
    "video",
    "steps",
    "interactive",
    "exercises",
    "visuals",
    "quiz",
    "worksheets",
    "homework",
    "materials",
    "notes",
];

/// A filter value only constrains when present and non-empty.
fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn dimension_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match constraint(wanted) {
        Some(wanted) => actual.as_deref() == Some(wanted),
        None => true,
    }
}

impl SearchFilters {
    /// No constraint on any dimension.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    pub fn with_level(mut self, level_id: impl Into<String>) -> Self {
        self.level_id = Some(level_id.into());
        self
    }

    pub fn with_section_type(mut self, section_type: impl Into<String>) -> Self {
        self.section_type = Some(section_type.into());
        self
    }

    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        constraint(&self.subject_id).is_none()
            && constraint(&self.level_id).is_none()
            && constraint(&self.section_type).is_none()
    }

    /// Does `record` satisfy every set dimension?
    pub fn matches(&self, record: &SearchRecord) -> bool {
        dimension_matches(&self.subject_id, &record.subject_id)
            && dimension_matches(&self.level_id, &record.level_id)
            && dimension_matches(&self.section_type, &record.section_type)
    }
}

/// Chip-bar selection state for one search box.
///
/// A box can be scoped to a subject (the subject page's own search). Scoped
/// state reports its subject from [`effective`](Self::effective) no matter
/// what was toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: SearchFilters,
    scope_subject: Option<String>,
}

impl FilterState {
    /// Unscoped, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pinned to one subject.
    pub fn scoped(subject_id: impl Into<String>) -> Self {
        let subject_id = subject_id.into();
        Self {
            filters: SearchFilters::none().with_subject(subject_id.clone()),
            scope_subject: Some(subject_id),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope_subject.as_deref()
    }

    /// `None` is the "all levels" chip. Selecting the active level keeps it.
    pub fn select_level(&mut self, level_id: Option<&str>) {
        self.filters.level_id = level_id.map(str::to_string);
    }

    /// Select `subject_id`, or clear it if it's already selected.
    ///
    /// No-op on a scoped state.
    pub fn toggle_subject(&mut self, subject_id: &str) {
        if self.scope_subject.is_some() {
            return;
        }
        toggle(&mut self.filters.subject_id, subject_id);
    }

    /// Select `section_type`, or clear it if it's already selected.
    pub fn toggle_section_type(&mut self, section_type: &str) {
        toggle(&mut self.filters.section_type, section_type);
    }

    /// Drop level and section selections; a scoped subject stays.
    pub fn clear(&mut self) {
        self.filters = match &self.scope_subject {
            Some(subject) => SearchFilters::none().with_subject(subject.clone()),
            None => SearchFilters::none(),
        };
    }

    /// Filters to hand to the query engine.
    pub fn effective(&self) -> SearchFilters {
        SearchFilters {
            subject_id: self
                .scope_subject
                .clone()
                .or_else(|| self.filters.subject_id.clone()),
            ..self.filters.clone()
        }
    }
}

fn toggle(slot: &mut Option<String>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(value.to_string());
    }
}
