// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for matching and highlighting.
//!
//! Two different folds live here, and they are not interchangeable:
//!
//! - [`normalize`] is what scoring uses. Lowercase, then NFKD. Decomposition
//!   splits "é" into "e" + U+0301, so precomposed and decomposed spellings of
//!   the same word compare equal. It changes string length, so offsets into the
//!   result mean nothing in the original text.
//!
//! - [`FoldedText`] is what highlighting uses. Lowercase only, one source
//!   character at a time, with a map from every folded byte back to the source
//!   character it came from. Offsets survive the round trip even when
//!   lowercasing expands a character ("İ" → "i̇").

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for scoring: lowercase, then Unicode compatibility
/// decomposition (NFKD).
///
/// Combining marks are kept, not stripped:
/// - "Café" → "cafe\u{301}" (contains "cafe")
/// - "ＡＢＣ" → "abc" (fullwidth compatibility forms fold too)
pub fn normalize(value: &str) -> String {
    value.to_lowercase().nfkd().collect()
}

/// Lowercase a string one character at a time.
///
/// `str::to_lowercase` applies the final-sigma rule, `char::to_lowercase` does
/// not. Query and haystack must go through the same fold for substring search
/// to agree, so both sides of a highlight use this.
pub fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Case-folded text with a byte → source-character map.
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// One entry per folded char: (byte offset in `folded`, char index in source).
    origins: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(source: &str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut origins = Vec::with_capacity(source.len());
        for (char_idx, c) in source.chars().enumerate() {
            for lower in c.to_lowercase() {
                origins.push((folded.len(), char_idx));
                folded.push(lower);
            }
        }
        Self { folded, origins }
    }

    /// The case-folded text.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Map a folded byte range back to a source char range `[start, end)`.
    ///
    /// `byte_start` must be a char boundary in the folded text and
    /// `byte_end > byte_start`. A range that begins or ends inside the
    /// expansion of one source character widens to cover that character.
    pub fn source_range(&self, byte_start: usize, byte_end: usize) -> (usize, usize) {
        let first = self.origins.partition_point(|(b, _)| *b < byte_start);
        let last = self
            .origins
            .partition_point(|(b, _)| *b < byte_end)
            .saturating_sub(1);
        let start = self.origins.get(first).map_or(0, |(_, c)| *c);
        let end = self.origins.get(last).map_or(start, |(_, c)| c + 1);
        (start, end.max(start))
    }
}

/// Char index of a byte offset (which must be a char boundary).
pub fn char_index(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
