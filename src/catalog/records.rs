// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flatten a catalog into search records for one language.
//!
//! Output order follows the catalog: each subject, then its modules (each
//! module followed by its sections, quiz and worksheets), then each course
//! group's courses and modules. Ids are derived from catalog ids only, so the
//! same catalog yields the same ids in every language.
//!
//! Every haystack starts with its breadcrumb and contains the record's own
//! title, so a result that ranks on its title can also be highlighted.

use crate::types::{RecordKind, SearchRecord};

use super::language::{Language, LocalizedText};
use super::model::{Course, CourseGroup, CourseModule, Level, Module, Section, Subject};
use super::Catalog;

/// Curriculum section order on a module page. Types not listed sort first.
const SECTION_ORDER: [&str; 6] = [
    "theory",
    "examples",
    "exercises",
    "visuals",
    "quiz",
    "worksheets",
];

fn homework_label() -> LocalizedText {
    LocalizedText::new("Uy vazifalari", "Hausaufgaben", "Homeworks")
}

fn materials_label() -> LocalizedText {
    LocalizedText::new("Materiallar", "Material", "Materials")
}

/// Build every search record for `catalog` in `language`.
pub fn build_search_records(catalog: &Catalog, language: Language) -> Vec<SearchRecord> {
    let mut out = Vec::new();
    for subject in &catalog.subjects {
        push_subject(&mut out, subject, language);
    }
    for group in &catalog.course_groups {
        push_course_group(&mut out, group, language);
    }
    tracing::debug!(
        language = %language,
        records = out.len(),
        "built search records"
    );
    out
}

/// Join non-empty parts with single spaces.
fn haystack<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn rank_of(section_type: &str) -> usize {
    SECTION_ORDER
        .iter()
        .position(|t| *t == section_type)
        .map_or(0, |i| i + 1)
}

fn ordered_sections(sections: &[Section]) -> Vec<&Section> {
    let mut ordered: Vec<&Section> = sections.iter().collect();
    // Stable: unknown types keep their relative order ahead of known ones
    ordered.sort_by_key(|s| rank_of(&s.section_type));
    ordered
}

// =============================================================================
// CURRICULUM
// =============================================================================

/// Breadcrumb shared by every record under one curriculum module.
struct ModuleScope<'a> {
    subject_id: &'a str,
    subject_title: &'a str,
    level_id: &'a str,
    level_title: &'a str,
    module_id: &'a str,
    module_title: &'a str,
    href: String,
}

impl ModuleScope<'_> {
    fn record(
        &self,
        id: String,
        kind: RecordKind,
        title: &str,
        href: String,
        haystack: String,
    ) -> SearchRecord {
        let mut record = SearchRecord::new(id, kind, title, href, haystack);
        record.subject_id = Some(self.subject_id.to_string());
        record.subject_title = Some(self.subject_title.to_string());
        record.level_id = Some(self.level_id.to_string());
        record.level_title = Some(self.level_title.to_string());
        record.module_id = Some(self.module_id.to_string());
        record.module_title = Some(self.module_title.to_string());
        record
    }

    /// Breadcrumb titles followed by `extra`, as a haystack.
    fn haystack_with(&self, extra: &[&str]) -> String {
        let mut parts = vec![self.subject_title, self.level_title, self.module_title];
        parts.extend_from_slice(extra);
        haystack(parts)
    }
}

fn push_subject(out: &mut Vec<SearchRecord>, subject: &Subject, lang: Language) {
    let title = subject.title.resolve(lang);
    let mut record = SearchRecord::new(
        format!("subject:{}", subject.id),
        RecordKind::Subject,
        title,
        format!("/platform/{}", subject.id),
        haystack([title, subject.id.as_str()]),
    );
    record.subject_id = Some(subject.id.clone());
    record.subject_title = Some(title.to_string());
    out.push(record);

    for level in &subject.levels {
        for module in &level.modules {
            push_module(out, subject, level, module, lang);
        }
    }
}

fn push_module(
    out: &mut Vec<SearchRecord>,
    subject: &Subject,
    level: &Level,
    module: &Module,
    lang: Language,
) {
    let scope = ModuleScope {
        subject_id: &subject.id,
        subject_title: subject.title.resolve(lang),
        level_id: &level.id,
        level_title: level.title.resolve(lang),
        module_id: &module.id,
        module_title: module.title.resolve(lang),
        href: format!("/platform/{}/{}/{}", subject.id, level.id, module.id),
    };
    let key = format!("{}:{}:{}", subject.id, level.id, module.id);
    let description = module.description.resolve(lang);

    let mut record = scope.record(
        format!("module:{key}"),
        RecordKind::Module,
        scope.module_title,
        scope.href.clone(),
        scope.haystack_with(&[description]),
    );
    record.snippet = non_empty(description);
    out.push(record);

    for section in ordered_sections(&module.sections) {
        let title = section.title.resolve(lang);
        let content = section.content.resolve(lang);
        let mut record = scope.record(
            format!("section:{key}:{}", section.section_type),
            RecordKind::Section,
            title,
            format!("{}#{}", scope.href, section.section_type),
            scope.haystack_with(&[title, content]),
        );
        record.snippet = non_empty(content);
        record.section_type = Some(section.section_type.clone());
        out.push(record);
    }

    let quiz_title = module.quiz_title.resolve(lang);
    let mut record = scope.record(
        format!("quiz:{key}"),
        RecordKind::Quiz,
        quiz_title,
        format!("{}#quiz", scope.href),
        scope.haystack_with(&[quiz_title, "quiz"]),
    );
    record.snippet = Some(format!("{} · {}", scope.subject_title, scope.module_title));
    record.section_type = Some("quiz".to_string());
    out.push(record);

    for worksheet in &module.worksheets {
        let title = worksheet.title.resolve(lang);
        let description = worksheet
            .description
            .as_ref()
            .map_or("", |d| d.resolve(lang));
        let mut record = scope.record(
            format!("worksheet:{key}:{}", worksheet.id),
            RecordKind::Worksheet,
            title,
            format!("{}#worksheets", scope.href),
            scope.haystack_with(&[title, description]),
        );
        record.snippet = non_empty(description);
        record.section_type = Some("worksheets".to_string());
        out.push(record);
    }
}

// =============================================================================
// COURSES
// =============================================================================

fn push_course_group(out: &mut Vec<SearchRecord>, group: &CourseGroup, lang: Language) {
    for course in &group.courses {
        push_course(out, group, course, lang);
    }
}

fn push_course(out: &mut Vec<SearchRecord>, group: &CourseGroup, course: &Course, lang: Language) {
    let group_title = group.title.resolve(lang);
    let course_title = course.title.resolve(lang);
    let description = course.description.resolve(lang);

    let mut record = SearchRecord::new(
        format!("course:{}:{}", group.id, course.id),
        RecordKind::Course,
        course_title,
        format!("/platform/{}/{}", group.id, course.id),
        haystack([group_title, course_title, description]),
    );
    record.snippet = non_empty(description);
    record.subject_id = Some(group.id.clone());
    record.subject_title = Some(group_title.to_string());
    record.level_id = Some(course.id.clone());
    record.level_title = Some(course_title.to_string());
    out.push(record);

    for module in &course.modules {
        push_course_module(out, group, course, module, lang);
    }
}

fn push_course_module(
    out: &mut Vec<SearchRecord>,
    group: &CourseGroup,
    course: &Course,
    module: &CourseModule,
    lang: Language,
) {
    let module_id = module.index.to_string();
    let scope = ModuleScope {
        subject_id: &group.id,
        subject_title: group.title.resolve(lang),
        level_id: &course.id,
        level_title: course.title.resolve(lang),
        module_id: &module_id,
        module_title: module.title.resolve(lang),
        href: format!("/platform/{}/{}/{}", group.id, course.id, module.index),
    };
    let key = format!("{}:{}:{}", group.id, course.id, module.index);
    let description = module.description.resolve(lang);

    let mut module_text = vec![description];
    for section in &module.sections {
        module_text.push(section.title.resolve(lang));
        module_text.push(section.content.resolve(lang));
    }
    let mut record = scope.record(
        format!("courseModule:{key}"),
        RecordKind::Module,
        scope.module_title,
        scope.href.clone(),
        scope.haystack_with(&module_text),
    );
    record.snippet = non_empty(description);
    out.push(record);

    for section in &module.sections {
        let title = section.title.resolve(lang);
        let content = section.content.resolve(lang);
        let mut record = scope.record(
            format!("courseSection:{key}:{}", section.section_type),
            RecordKind::Section,
            title,
            format!("{}#{}", scope.href, section.section_type),
            scope.haystack_with(&[title, content]),
        );
        record.snippet = non_empty(content);
        record.section_type = Some(section.section_type.clone());
        out.push(record);
    }

    let breadcrumb_snippet = format!("{} · {}", scope.level_title, scope.module_title);

    let quiz_title = module.quiz_title.resolve(lang);
    let mut record = scope.record(
        format!("courseQuiz:{key}"),
        RecordKind::Quiz,
        quiz_title,
        format!("{}#quiz", scope.href),
        scope.haystack_with(&[quiz_title, "quiz"]),
    );
    record.snippet = Some(breadcrumb_snippet.clone());
    record.section_type = Some("quiz".to_string());
    out.push(record);

    if !module.homeworks.is_empty() {
        let label = homework_label();
        let title = label.resolve(lang);
        let mut parts = vec![title, "homework"];
        parts.extend(module.homeworks.iter().map(|h| h.title.resolve(lang)));
        let mut record = scope.record(
            format!("courseHomework:{key}"),
            RecordKind::Homework,
            title,
            format!("{}#homework", scope.href),
            scope.haystack_with(&parts),
        );
        record.snippet = Some(breadcrumb_snippet.clone());
        record.section_type = Some("homework".to_string());
        out.push(record);
    }

    if !module.materials.is_empty() {
        let label = materials_label();
        let title = label.resolve(lang);
        let mut parts = vec![title, "materials"];
        parts.extend(module.materials.iter().map(|m| m.title.resolve(lang)));
        let mut record = scope.record(
            format!("courseMaterials:{key}"),
            RecordKind::Material,
            title,
            format!("{}#materials", scope.href),
            scope.haystack_with(&parts),
        );
        record.snippet = Some(breadcrumb_snippet);
        record.section_type = Some("materials".to_string());
        out.push(record);
    }
}
