// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for catalog-search.
//!
//! OneDark on dark terminals, One Light on light ones. `CATALOG_SEARCH_THEME`
//! wins if set, then the `COLORFGBG` hint, then dark. `NO_COLOR` and non-TTY
//! stdout turn every escape off, so piped output is plain text.
//!
//! Search hits render as one box: a header with the query, then per result a
//! kind badge, the title with its match ranges highlighted, the score, the
//! breadcrumb and the href.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use catalog_search::{segments, Language, MatchRange, RecordKind, SearchResult};

/// Inner width of a box, between the two `│`.
pub const BOX_WIDTH: usize = 80;

/// Columns taken by the badge column (badge plus padding).
const BADGE_WIDTH: usize = 8;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and up (except 8) is a light terminal.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("CATALOG_SEARCH_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers around `text`, or plain `text` without colors.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible width, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max` chars, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├──────────────────┤
pub fn section_rule() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Kind badge, colored per kind.
pub fn kind_badge(kind: RecordKind) -> String {
    let text = format!("[{}]", kind.badge());
    let color: fn() -> String = match kind {
        RecordKind::Subject | RecordKind::Course => MAGENTA,
        RecordKind::Module => BLUE,
        RecordKind::Section => CYAN,
        RecordKind::Quiz => YELLOW,
        RecordKind::Worksheet | RecordKind::Homework | RecordKind::Material => GREEN,
    };
    themed(color, &[BOLD], &text)
}

/// `text` with the given char ranges emphasized.
///
/// Without colors the marked runs are wrapped in `[` `]` so the highlight
/// still shows in plain output.
pub fn highlighted(text: &str, ranges: &[MatchRange]) -> String {
    let colors = use_colors();
    segments(text, ranges)
        .into_iter()
        .map(|seg| match (seg.marked, colors) {
            (false, _) => seg.text.to_string(),
            (true, true) => format!("{}{}{}{}{}", BOLD, UNDERLINE, BRIGHT_YELLOW(), seg.text, RESET),
            (true, false) => format!("[{}]", seg.text),
        })
        .collect()
}

/// Score, greener the better.
pub fn score_value(score: u32) -> String {
    let text = format!("{:>5}", score);
    if score >= 100 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 50 {
        themed(GREEN, &[], &text)
    } else if score >= 20 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// Box with one entry per result.
pub fn print_results(query: &str, results: &[SearchResult]) {
    let noun = if results.len() == 1 { "result" } else { "results" };
    section_top(&format!("{} {} for \"{}\"", results.len(), noun, truncate(query.trim(), 40)));

    if results.is_empty() {
        row(&format!(" {}", themed(GRAY, &[DIM], "no matches")));
        section_bot();
        return;
    }

    let indent = " ".repeat(BADGE_WIDTH + 1);
    // badge + title + space + score must fit inside the box
    let title_width = BOX_WIDTH - BADGE_WIDTH - 1 - 7;
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            section_rule();
        }
        let record = &result.record;
        let title = truncate(&record.title, title_width);
        let line = format!(
            " {}{}",
            pad_right(&kind_badge(record.kind), BADGE_WIDTH),
            pad_right(&highlighted(&title, &result.match_ranges), title_width)
        );
        row(&format!("{} {}", line, score_value(result.score)));

        let breadcrumb = record.breadcrumb();
        if !breadcrumb.is_empty() {
            row(&format!(
                "{}{}",
                indent,
                themed(GRAY, &[], &truncate(&breadcrumb, BOX_WIDTH - indent.len()))
            ));
        }
        if let Some(snippet) = &record.snippet {
            row(&format!("{}{}", indent, truncate(snippet, BOX_WIDTH - indent.len())));
        }
        row(&format!(
            "{}{}",
            indent,
            themed(BLUE, &[DIM], &truncate(&record.href, BOX_WIDTH - indent.len()))
        ));
    }
    section_bot();
}

/// Per-kind record counts, one column per language.
pub fn print_counts(counts: &BTreeMap<RecordKind, BTreeMap<Language, usize>>, languages: &[Language]) {
    section_top("records per kind");
    let mut header = format!(" {}", pad_right("kind", 12));
    for lang in languages {
        header.push_str(&format!("{:>8}", lang.code()));
    }
    row(&themed(GRAY, &[BOLD], &header));

    for (kind, per_lang) in counts {
        let mut line = format!(" {}", pad_right(kind.as_str(), 12));
        for lang in languages {
            line.push_str(&format!("{:>8}", per_lang.get(lang).copied().unwrap_or(0)));
        }
        row(&line);
    }
    section_bot();
}

pub fn ok(message: &str) {
    println!("{} {}", themed(GREEN, &[BOLD], "✓"), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", themed(RED, &[BOLD], "✗"), message);
}
