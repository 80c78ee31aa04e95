// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans: where in a displayed string did the query land?
//!
//! Highlighting is deliberately dumber than scoring. Scoring splits the query
//! into tokens and decomposes accents; highlighting looks for the whole trimmed
//! query, case-insensitively, in the raw text. That keeps every offset valid in
//! the string the user actually sees. The price is that a result can rank
//! without a single highlighted span (its tokens matched in the breadcrumb, or
//! only after decomposition). That is expected, not a bug.

use crate::types::MatchRange;
use crate::util::normalize::{fold_case, FoldedText};

/// Every case-insensitive, non-overlapping occurrence of `query` in `haystack`.
///
/// The query is trimmed first; an empty query matches nothing. Scanning is
/// greedy left to right: after a match the search resumes at its end, so
/// `"aaaa"` / `"aa"` yields two ranges, not three. Offsets are chars of the
/// original `haystack`.
pub fn find_match_ranges(haystack: &str, query: &str) -> Vec<MatchRange> {
    let needle = fold_case(query.trim());
    if needle.is_empty() || haystack.is_empty() {
        return Vec::new();
    }

    let folded = FoldedText::new(haystack);
    let text = folded.as_str();
    let mut ranges = Vec::new();
    let mut from = 0;

    while from < text.len() {
        let Some(found) = text[from..].find(&needle) else {
            break;
        };
        let byte_start = from + found;
        let byte_end = byte_start + needle.len();
        let (start, end) = folded.source_range(byte_start, byte_end);
        ranges.push(MatchRange { start, end });
        from = byte_end;
    }

    ranges
}

/// Sort by start and fuse ranges that overlap or touch.
///
/// `[0,3)` and `[3,6)` become `[0,6)`; `[0,3)` and `[5,6)` stay apart.
/// Merging an already-merged list returns it unchanged.
pub fn merge_ranges(ranges: &[MatchRange]) -> Vec<MatchRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut merged: Vec<MatchRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// A run of displayed text, either plain or highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub marked: bool,
}

/// Split `text` into plain and marked runs covering the whole string.
///
/// Ranges are merged first and clamped to the text; empty runs are dropped.
/// Concatenating the segment texts always gives back `text`.
pub fn segments<'a>(text: &'a str, ranges: &[MatchRange]) -> Vec<Segment<'a>> {
    // Char index -> byte offset, with one extra entry for the end of the text.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;

    let mut out = Vec::new();
    let mut cursor = 0;
    for range in merge_ranges(ranges) {
        let start = range.start.min(char_len).max(cursor);
        let end = range.end.min(char_len);
        if end <= start {
            continue;
        }
        if start > cursor {
            out.push(Segment {
                text: &text[bounds[cursor]..bounds[start]],
                marked: false,
            });
        }
        out.push(Segment {
            text: &text[bounds[start]..bounds[end]],
            marked: true,
        });
        cursor = end;
    }
    if cursor < char_len {
        out.push(Segment {
            text: &text[bounds[cursor]..],
            marked: false,
        });
    }
    out
}
