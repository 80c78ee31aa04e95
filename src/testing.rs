//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record constructors so tests don't each grow their own.

#![doc(hidden)]

use crate::types::{RecordKind, SearchRecord};

/// A module record with just id, title and haystack.
pub fn make_record(id: &str, title: &str, haystack: &str) -> SearchRecord {
    SearchRecord::new(id, RecordKind::Module, title, format!("/r/{}", id), haystack)
}

/// A module record with subject and level dimensions set.
pub fn make_scoped_record(
    id: &str,
    title: &str,
    haystack: &str,
    subject_id: &str,
    level_id: &str,
) -> SearchRecord {
    let mut record = make_record(id, title, haystack);
    record.subject_id = Some(subject_id.to_string());
    record.level_id = Some(level_id.to_string());
    record
}

/// A section record with every filter dimension set.
pub fn make_section_record(
    id: &str,
    title: &str,
    haystack: &str,
    subject_id: &str,
    level_id: &str,
    section_type: &str,
) -> SearchRecord {
    let mut record = make_scoped_record(id, title, haystack, subject_id, level_id);
    record.kind = RecordKind::Section;
    record.section_type = Some(section_type.to_string());
    record
}
