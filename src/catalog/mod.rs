// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content catalog and the record builder that flattens it.
//!
//! The catalog is the localized content tree of the platform, read from JSON.
//! Search never sees it directly: [`build_search_records`] resolves one
//! language and emits a flat `Vec<SearchRecord>`, which is what the query
//! engine and [`SearchIndex`] work on.
//!
//! ```text
//! catalog.json ──► Catalog ──build_search_records(lang)──► Vec<SearchRecord>
//!                                                             │
//!                                          SearchIndex::build ▼
//! ```
//!
//! Records are rebuilt, never patched, when the language changes.

mod language;
mod model;
mod records;

pub use language::{Language, LocalizedText, UnknownLanguage};
pub use model::{
    Assignment, Course, CourseGroup, CourseModule, Level, Module, Section, Subject, Worksheet,
};
pub use records::build_search_records;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::index::SearchIndex;
use crate::types::SearchRecord;

/// Root of the content tree.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub course_groups: Vec<CourseGroup>,
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = read(path)?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            subjects = catalog.subjects.len(),
            course_groups = catalog.course_groups.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Flat search records in `language`.
    pub fn records(&self, language: Language) -> Vec<SearchRecord> {
        build_search_records(self, language)
    }

    /// Build records in `language` and index them.
    pub fn build_index(&self, language: Language) -> SearchIndex {
        SearchIndex::build(self.records(language))
    }
}

/// Read a pre-built record list (a JSON array of `SearchRecord`).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SearchRecord>> {
    let path = path.as_ref();
    let raw = read(path)?;
    let records: Vec<SearchRecord> = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
