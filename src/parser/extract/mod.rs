//! Per-section entry extraction.
//!
//! Each section kind runs its own small state machine over the block's
//! content lines. The machine is picked from the header text.

mod education;
mod experience;
mod generic;
mod skills;

pub use education::EducationExtractor;
pub use experience::{ExperienceExtractor, DEFAULT_EXPERIENCE_TITLE};
pub use generic::GenericExtractor;
pub use skills::{SkillsExtractor, SKILLS_ENTRY_TITLE};

use crate::model::{Entry, Line, Section};

use super::segmenter::Block;
use super::LineClassifier;

/// Turns a section's content lines into entries.
pub trait EntryExtractor: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Extract entries in order of appearance.
    fn extract(&self, lines: &[Line], classifier: &LineClassifier) -> Vec<Entry>;
}

/// Which extractor a section uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Education,
    Experience,
    Skills,
    Generic,
}

impl SectionKind {
    /// Pick the kind from a header by keyword containment.
    ///
    /// Checked in the order education, experience, skills.
    pub fn from_title(title: &str) -> Self {
        let upper = title.to_uppercase();
        if upper.contains("EDUCATION") {
            SectionKind::Education
        } else if upper.contains("EXPERIENCE") {
            SectionKind::Experience
        } else if upper.contains("SKILLS") {
            SectionKind::Skills
        } else {
            SectionKind::Generic
        }
    }

    /// The extractor for this kind.
    pub fn extractor(&self) -> &'static dyn EntryExtractor {
        match self {
            SectionKind::Education => &EducationExtractor,
            SectionKind::Experience => &ExperienceExtractor,
            SectionKind::Skills => &SkillsExtractor,
            SectionKind::Generic => &GenericExtractor,
        }
    }
}

/// Build a section from a segmented block.
pub fn build_section(block: &Block<'_>, classifier: &LineClassifier) -> Section {
    let kind = SectionKind::from_title(block.title());
    let extractor = kind.extractor();
    let entries = extractor.extract(block.content, classifier);
    log::debug!(
        "section {:?}: {} line(s) -> {} {} entr{}",
        block.title(),
        block.content.len(),
        entries.len(),
        extractor.name(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    Section::with_entries(block.title(), entries)
}

/// Strip a bullet line into a point, skipping lines that were only markers.
pub(crate) fn point(line: &Line, classifier: &LineClassifier) -> Option<String> {
    let text = classifier.strip_bullet(&line.text);
    (!text.is_empty()).then(|| text.to_string())
}
