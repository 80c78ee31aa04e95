// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serde model of the content catalog.
//!
//! Two trees hang off the root. Curriculum subjects nest
//! subject → level → module → sections/quiz/worksheets. Course groups nest
//! group → course → numbered module → sections/quiz/homeworks/materials.
//! All display text is [`LocalizedText`]; ids are plain strings.

use serde::{Deserialize, Serialize};

use super::language::LocalizedText;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub levels: Vec<Level>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub quiz_title: LocalizedText,
    #[serde(default)]
    pub worksheets: Vec<Worksheet>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub content: LocalizedText,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseGroup {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub index: u32,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub quiz_title: LocalizedText,
    #[serde(default)]
    pub homeworks: Vec<Assignment>,
    #[serde(default)]
    pub materials: Vec<Assignment>,
}

/// A homework or downloadable material attached to a course module.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}
