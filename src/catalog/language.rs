// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display languages and localized catalog text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A display language of the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Uz,
    De,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Uz, Language::De, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::De => "de",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language '{0}' (expected uz, de or en)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uz" => Ok(Language::Uz),
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// One string in up to three languages.
///
/// Missing translations fall back to English, then to whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(uz: &str, de: &str, en: &str) -> Self {
        Self {
            uz: Some(uz.to_string()),
            de: Some(de.to_string()),
            en: Some(en.to_string()),
        }
    }

    /// Same text in every language.
    pub fn uniform(text: &str) -> Self {
        Self::new(text, text, text)
    }

    fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Uz => self.uz.as_deref(),
            Language::De => self.de.as_deref(),
            Language::En => self.en.as_deref(),
        }
    }

    /// Text for `language`, falling back to English, then any translation,
    /// then the empty string.
    pub fn resolve(&self, language: Language) -> &str {
        self.get(language)
            .or(self.en.as_deref())
            .or(self.de.as_deref())
            .or(self.uz.as_deref())
            .unwrap_or("")
    }
}
