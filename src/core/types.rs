//! Core types shared across resume-parser modules

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A bucketed list section of a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Education,
    WorkExperience,
    Skills,
}

impl Section {
    /// All sections in output order
    pub const ALL: [Section; 3] = [Section::Education, Section::WorkExperience, Section::Skills];

    /// Heading used by the console summary
    pub fn title(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::WorkExperience => "Work Experience",
            Section::Skills => "Skills",
        }
    }

    /// Key used in the JSON output
    pub fn key(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::WorkExperience => "work_experience",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured data pulled out of a single resume.
///
/// Field order is the JSON field order. All four fields are always
/// serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Recognized keys: `name`, `email`
    pub personal_info: BTreeMap<String, String>,
    pub education: Vec<String>,
    pub work_experience: Vec<String>,
    pub skills: Vec<String>,
}

impl ResumeRecord {
    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.personal_info.get(Self::NAME).map(String::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.personal_info.get(Self::EMAIL).map(String::as_str)
    }

    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Education => &self.education,
            Section::WorkExperience => &self.work_experience,
            Section::Skills => &self.skills,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Education => &mut self.education,
            Section::WorkExperience => &mut self.work_experience,
            Section::Skills => &mut self.skills,
        }
    }

    /// Number of list entries across all sections
    pub fn entry_count(&self) -> usize {
        Section::ALL.iter().map(|s| self.section(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.personal_info.is_empty() && self.entry_count() == 0
    }
}
