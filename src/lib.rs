//! In-memory catalog search: tokenize, filter, score, rank, highlight.
//!
//! The platform's search box (global, or scoped to one subject) runs entirely
//! over a flat list of [`SearchRecord`]s built from the content catalog for one
//! display language. Every query is scored against every candidate; there is
//! no inverted index and nothing to keep in sync.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ catalog/   │──▶│ SearchRecord │──▶│  query.rs    │──▶│ SearchResult │
//! │ (Catalog,  │   │  (types.rs)  │   │ (tokenize,   │   │ + highlight  │
//! │  Language) │   └──────────────┘   │  run_search) │   │   ranges     │
//! └────────────┘          │           └──────────────┘   └──────────────┘
//!                         ▼                  ▲    │
//!                  ┌──────────────┐   ┌──────┴────┴──┐
//!                  │  index.rs    │   │ scoring.rs   │
//!                  │ (pre-normal- │   │ filters.rs   │
//!                  │  ized, rayon)│   │ highlight.rs │
//!                  └──────────────┘   └──────────────┘
//! ```
//!
//! # Invariants
//!
//! | Property            | Where checked                         |
//! |---------------------|---------------------------------------|
//! | Conjunctive match   | `scoring::score_item`                 |
//! | Filters before rank | `query::run_search_with`              |
//! | Sorted, capped      | `contracts::check_results_well_formed`|
//! | Ranges merged       | `contracts::check_results_well_formed`|
//! | Title ⊆ haystack    | `contracts::validate_records`         |
//! | Index ≡ run_search  | `tests/property.rs`                   |
//!
//! # Usage
//!
//! ```
//! use catalog_search::{run_search, RecordKind, SearchFilters, SearchRecord};
//!
//! let records = vec![SearchRecord::new(
//!     "courseModule:coding:js:3",
//!     RecordKind::Module,
//!     "Weather App",
//!     "/platform/coding/js/3",
//!     "Programming JavaScript Weather App fetch api",
//! )];
//!
//! let results = run_search(&records, "app", &SearchFilters::none());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].match_ranges[0].start, 8);
//! ```

pub mod catalog;
pub mod contracts;
pub mod error;
pub mod filters;
pub mod highlight;
mod index;
mod query;
pub mod scoring;
mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

pub use catalog::{build_search_records, load_records, Catalog, Language, LocalizedText};
pub use contracts::validate_records;
pub use error::{CatalogError, RecordError};
pub use filters::{FilterState, LEVEL_SCHOOL, LEVEL_UNIVERSITY, SECTION_TYPE_ORDER};
pub use highlight::{find_match_ranges, merge_ranges, segments, Segment};
pub use index::SearchIndex;
pub use query::{run_search, run_search_with, tokenize, SearchOptions, MAX_RESULTS};
pub use scoring::score_item;
pub use types::{MatchRange, RecordKind, SearchFilters, SearchRecord, SearchResult};
pub use util::normalize::normalize;
