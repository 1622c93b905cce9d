//! Line classifier
//!
//! Single pass over extracted text. Label substrings either fill a
//! personal-info field or switch the current section; every other line is
//! appended to whichever section is active. Matching is plain,
//! case-sensitive substring containment: a bullet that mentions
//! "Education" in passing switches sections just like a real heading.

use super::types::{ResumeRecord, Section};

/// Field labels, checked before any section label
const FIELD_LABELS: [(&str, &str); 2] = [
    ("Name:", ResumeRecord::NAME),
    ("Email:", ResumeRecord::EMAIL),
];

/// Section headings, in priority order
const SECTION_LABELS: [(&str, Section); 3] = [
    ("Education", Section::Education),
    ("Experience", Section::WorkExperience),
    ("Skills", Section::Skills),
];

/// What a single trimmed line means to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `key` gets `value`
    Field { key: &'static str, value: String },
    /// Switch the current section, line is not stored
    Heading(Section),
    /// Anything else
    Content(&'a str),
}

/// Classifies one already-trimmed line. First matching label wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    for (label, key) in FIELD_LABELS {
        if line.contains(label) {
            return LineKind::Field {
                key,
                value: line.replace(label, "").trim().to_string(),
            };
        }
    }

    for (label, section) in SECTION_LABELS {
        if line.contains(label) {
            return LineKind::Heading(section);
        }
    }

    LineKind::Content(line)
}

/// Buckets the lines of `text` into a [`ResumeRecord`].
///
/// Empty input returns the all-empty record without scanning.
pub fn classify(text: &str) -> ResumeRecord {
    let mut record = ResumeRecord::new();
    if text.is_empty() {
        return record;
    }

    let mut current: Option<Section> = None;

    for raw in text.split('\n') {
        match classify_line(raw.trim()) {
            LineKind::Field { key, value } => {
                record.personal_info.insert(key.to_string(), value);
            }
            LineKind::Heading(section) => current = Some(section),
            LineKind::Content(line) => {
                if let Some(section) = current {
                    record.section_mut(section).push(line.to_string());
                }
            }
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_personal_info() {
        let record = classify("Name: Jane Doe\nEmail: jane@x.com");
        let expected: BTreeMap<String, String> = [
            ("name".to_string(), "Jane Doe".to_string()),
            ("email".to_string(), "jane@x.com".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.personal_info, expected);
        assert_eq!(record.entry_count(), 0);
    }

    #[test]
    fn test_sections() {
        let record = classify("Education\nBS Computer Science\nExperience\nEngineer at Acme");
        assert_eq!(record.education, vec!["BS Computer Science"]);
        assert_eq!(record.work_experience, vec!["Engineer at Acme"]);
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_no_labels_yields_empty_record() {
        let record = classify("Curriculum vitae\nsome text\n\nmore text");
        assert_eq!(record, ResumeRecord::new());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(classify(""), ResumeRecord::new());
    }

    #[test]
    fn test_first_label_wins() {
        let record = classify("Education and Skills\nRust");
        assert_eq!(record.education, vec!["Rust"]);
        assert!(record.skills.is_empty());

        // Field labels beat section labels
        let record = classify("Name: Education Smith\nstray");
        assert_eq!(record.name(), Some("Education Smith"));
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_substring_heading_switches_section() {
        let text = "Experience\nLead engineer\nTaught Continuing Education courses\nOxford";
        let record = classify(text);
        assert_eq!(record.work_experience, vec!["Lead engineer"]);
        assert_eq!(record.education, vec!["Oxford"]);
    }

    #[test]
    fn test_blank_lines_kept_inside_section() {
        let record = classify("Skills\nRust\n\n   \nGo");
        assert_eq!(record.skills, vec!["Rust", "", "", "Go"]);
    }

    #[test]
    fn test_lines_before_any_section_dropped() {
        let record = classify("Jane's resume\n2024\nSkills\nSQL");
        assert_eq!(record.skills, vec!["SQL"]);
        assert_eq!(record.entry_count(), 1);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let record = classify("  Name:   Jane Doe  \n\tEducation\n   MIT   \r");
        assert_eq!(record.name(), Some("Jane Doe"));
        assert_eq!(record.education, vec!["MIT"]);
    }

    #[test]
    fn test_label_removed_everywhere_in_line() {
        let record = classify("Name: Jane Name: Doe");
        assert_eq!(record.name(), Some("Jane  Doe"));
    }

    #[test]
    fn test_later_field_overwrites() {
        let record = classify("Email: old@x.com\nEmail: new@x.com");
        assert_eq!(record.email(), Some("new@x.com"));
    }

    #[test]
    fn test_case_sensitive() {
        let record = classify("EDUCATION\nMIT\nskills\nRust");
        assert_eq!(record, ResumeRecord::new());
    }

    #[test]
    fn test_idempotent() {
        let text = "Name: A\nEducation\nX\nSkills\nY\n\nZ";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(
            classify_line("Email: a@b.c"),
            LineKind::Field {
                key: "email",
                value: "a@b.c".to_string()
            }
        );
        assert_eq!(
            classify_line("Work Experience"),
            LineKind::Heading(Section::WorkExperience)
        );
        assert_eq!(classify_line("Rust"), LineKind::Content("Rust"));
    }
}
