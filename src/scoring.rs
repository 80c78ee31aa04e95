// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Each query token contributes independently, and every token must appear
//! somewhere in the record's normalized haystack or the record is out (AND,
//! not OR). A token's contribution has two parts:
//!
//! ```text
//! position_bonus = max(0, POSITION_WINDOW - position)
//! length_bonus   = TOKEN_LENGTH_WEIGHT * token_len
//! ```
//!
//! The record builder puts title and breadcrumb text first in the haystack, so
//! "earlier" roughly means "more about this". Long tokens are rarer than short
//! ones, so a hit on one is worth more.
//!
//! The constants are knobs. What tests depend on is the shape: earlier beats
//! later, longer beats shorter, every token must match.
//!
//! Positions and lengths are counted in chars of the normalized text.

use crate::util::normalize::{char_index, normalize};

/// Matches starting this many chars in (or later) get no position bonus.
pub const POSITION_WINDOW: u32 = 100;

/// Points per char of matched token.
pub const TOKEN_LENGTH_WEIGHT: u32 = 3;

/// Score one token occurrence at `position` (chars into the haystack).
pub fn token_score(position: usize, token_len: usize) -> u32 {
    let position = u32::try_from(position).unwrap_or(u32::MAX);
    let token_len = u32::try_from(token_len).unwrap_or(u32::MAX);
    POSITION_WINDOW
        .saturating_sub(position)
        .saturating_add(TOKEN_LENGTH_WEIGHT.saturating_mul(token_len))
}

/// Score a raw haystack against already-normalized query tokens.
///
/// Returns `None` if any token is missing.
pub fn score_item(haystack: &str, tokens: &[String]) -> Option<u32> {
    score_normalized(&normalize(haystack), tokens)
}

/// Same as [`score_item`] for a haystack that already went through
/// [`normalize`]. The index uses this to fold each haystack once per build.
pub fn score_normalized(haystack: &str, tokens: &[String]) -> Option<u32> {
    tokens.iter().try_fold(0u32, |total, token| {
        let byte_idx = haystack.find(token.as_str())?;
        let position = char_index(haystack, byte_idx);
        Some(total.saturating_add(token_score(position, token.chars().count())))
    })
}
