// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for catalog loading and record validation.
//!
//! Searching itself never fails; these only come up at the edges, when a
//! catalog is read from disk or a record list is checked before use.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load or parse a content catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog (or records) file couldn't be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file isn't valid catalog JSON.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A built record list violates a record invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record '{id}' has an empty haystack")]
    EmptyHaystack { id: String },

    #[error("record '{id}': title '{title}' does not appear in its haystack")]
    TitleNotInHaystack { id: String, title: String },

    #[error("duplicate record id '{id}'")]
    DuplicateId { id: String },
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
