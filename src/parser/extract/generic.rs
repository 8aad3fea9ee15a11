//! Sections without a dedicated extractor (summary, projects, ...).

use crate::model::{Entry, Line};
use crate::parser::LineClassifier;

use super::{point, EntryExtractor};

/// Collects short lines and bullets into one entry with empty header
/// fields. Long non-bullet lines are treated as wrapped prose and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericExtractor;

impl EntryExtractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, lines: &[Line], classifier: &LineClassifier) -> Vec<Entry> {
        if lines.is_empty() {
            return Vec::new();
        }

        let mut entry = Entry::default();
        for line in lines {
            if classifier.is_bullet_line(line) {
                entry.points.extend(point(line, classifier));
            } else if line.len() < classifier.org_line_max_len() {
                entry.points.push(line.text.clone());
            } else {
                log::trace!("generic: dropping long line {}", line.index);
            }
        }

        vec![entry]
    }
}
