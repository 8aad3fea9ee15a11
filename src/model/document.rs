//! Document-level types.

use super::Section;
use serde::{Deserialize, Serialize};

/// A parsed résumé.
///
/// `ResumeDocument::default()` is the empty document returned when nothing
/// could be extracted, including when a line source failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Name and contact details
    pub personal_info: PersonalInfo,

    /// Sections in order of appearance
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.personal_info.is_empty() && self.sections.is_empty()
    }

    /// Find a section by title, ignoring case.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
    }

    /// Section titles in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// Name and contact block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// First line of the page
    pub name: String,

    /// Contact fields found near the top of the page
    pub contact: ContactInfo,
}

impl PersonalInfo {
    /// Whether name and all contact fields are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contact.is_empty()
    }
}

/// Contact fields. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

impl ContactInfo {
    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Field names paired with values, in a fixed order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("location", self.location.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("github", self.github.as_str()),
        ]
    }
}
