//! Skills sections.

use crate::model::{Entry, Line};
use crate::parser::LineClassifier;

use super::{point, EntryExtractor};

/// Company name of the single skills entry.
pub const SKILLS_ENTRY_TITLE: &str = "Technical Skills";

const DELIMITERS: &[char] = &[',', ';', ':', '|'];

/// Collects every skill into one entry.
///
/// Bullet lines are one point each; other lines are delimited lists and
/// are split into one point per fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsExtractor;

impl EntryExtractor for SkillsExtractor {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn extract(&self, lines: &[Line], classifier: &LineClassifier) -> Vec<Entry> {
        if lines.is_empty() {
            return Vec::new();
        }

        let mut entry = Entry::new(SKILLS_ENTRY_TITLE);
        for line in lines {
            if classifier.is_bullet_line(line) {
                entry.points.extend(point(line, classifier));
            } else {
                entry.points.extend(
                    line.text
                        .split(DELIMITERS)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
        }

        vec![entry]
    }
}
