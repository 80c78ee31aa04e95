// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for catalog-search.
//!
//! Three subcommands: `search` to query a catalog (or a pre-built record
//! list), `records` to dump the flattened records as JSON, and `check` to
//! validate that a catalog builds clean records in every language.
//!
//! The catalog path and language fall back to `CATALOG_SEARCH_CATALOG` and
//! `CATALOG_SEARCH_LANG`.

pub mod display;

use std::path::PathBuf;

use catalog_search::{Language, RecordKind, SearchFilters, MAX_RESULTS};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "Search a localized learning-platform catalog",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search catalog records and print ranked results
    Search {
        /// Search query (whitespace-separated tokens, all must match)
        query: String,

        /// Catalog JSON file
        #[arg(long, env = "CATALOG_SEARCH_CATALOG")]
        catalog: Option<PathBuf>,

        /// Pre-built records JSON file (array of records); wins over --catalog
        #[arg(long)]
        records: Option<PathBuf>,

        /// Display language used to build records from the catalog
        #[arg(long, env = "CATALOG_SEARCH_LANG", default_value = "en")]
        lang: Language,

        /// Only records of this subject (or course group)
        #[arg(long)]
        subject: Option<String>,

        /// Only records of this level (or course)
        #[arg(long)]
        level: Option<String>,

        /// Only records of this section type
        #[arg(long)]
        section: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the records a catalog builds, as JSON
    Records {
        /// Catalog JSON file
        #[arg(long, env = "CATALOG_SEARCH_CATALOG")]
        catalog: PathBuf,

        /// Display language
        #[arg(long, env = "CATALOG_SEARCH_LANG", default_value = "en")]
        lang: Language,

        /// Only records of this kind
        #[arg(long, value_parser = parse_kind)]
        kind: Option<RecordKind>,
    },

    /// Build records for every language and validate them
    Check {
        /// Catalog JSON file
        #[arg(long, env = "CATALOG_SEARCH_CATALOG")]
        catalog: PathBuf,
    },
}

fn parse_kind(value: &str) -> Result<RecordKind, String> {
    RecordKind::ALL
        .into_iter()
        .find(|kind| kind.as_str() == value)
        .ok_or_else(|| {
            let known: Vec<&str> = RecordKind::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown kind '{}' (expected one of {})", value, known.join(", "))
        })
}

/// Filters from the optional `--subject/--level/--section` flags.
pub fn filters_from_flags(
    subject: Option<String>,
    level: Option<String>,
    section: Option<String>,
) -> SearchFilters {
    SearchFilters {
        subject_id: subject,
        level_id: level,
        section_type: section,
    }
}
