//! Extraction statistics.

use crate::model::ResumeDocument;
use serde::{Deserialize, Serialize};

/// Counts describing what was extracted from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of sections
    pub section_count: usize,

    /// Number of entries across all sections
    pub entry_count: usize,

    /// Number of points across all entries
    pub point_count: usize,

    /// Number of non-empty contact fields
    pub contact_field_count: usize,
}

impl ExtractionStats {
    /// Collect statistics from a document.
    pub fn from_document(doc: &ResumeDocument) -> Self {
        Self {
            section_count: doc.sections.len(),
            entry_count: doc.entry_count(),
            point_count: doc.sections.iter().map(|s| s.point_count()).sum(),
            contact_field_count: doc
                .personal_info
                .contact
                .fields()
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .count(),
        }
    }

    /// Whether nothing beyond the name was found.
    pub fn is_empty(&self) -> bool {
        self.section_count == 0 && self.contact_field_count == 0
    }

    /// Merge statistics from multiple documents.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.section_count += other.section_count;
        self.entry_count += other.entry_count;
        self.point_count += other.point_count;
        self.contact_field_count += other.contact_field_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Section};

    #[test]
    fn test_stats_from_document() {
        let mut doc = ResumeDocument::new();
        doc.personal_info.contact.email = "a@b.co".to_string();
        let mut entry = Entry::new("Acme");
        entry.add_point("one");
        entry.add_point("two");
        doc.sections.push(Section::with_entries("EXPERIENCE", vec![entry]));
        doc.sections.push(Section::new("SKILLS"));

        let stats = ExtractionStats::from_document(&doc);
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.point_count, 2);
        assert_eq!(stats.contact_field_count, 1);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_stats_merge() {
        let mut total = ExtractionStats::default();
        let one = ExtractionStats {
            section_count: 1,
            entry_count: 2,
            point_count: 3,
            contact_field_count: 4,
        };
        total.merge(&one);
        total.merge(&one);
        assert_eq!(total.point_count, 6);
        assert!(ExtractionStats::default().is_empty());
    }
}
