//! Education sections.

use crate::model::{Entry, Line};
use crate::parser::{Cue, LineClassifier};

use super::{point, EntryExtractor};

/// Institution lines open entries; bullets, degree and date lines fill the
/// open entry; everything else is ignored.
const PRECEDENCE: &[Cue] = &[Cue::Institution, Cue::Bullet, Cue::Degree, Cue::DateRange];

/// Extracts one entry per school.
#[derive(Debug, Clone, Copy, Default)]
pub struct EducationExtractor;

impl EntryExtractor for EducationExtractor {
    fn name(&self) -> &'static str {
        "education"
    }

    fn extract(&self, lines: &[Line], classifier: &LineClassifier) -> Vec<Entry> {
        let mut entries = Vec::new();
        // `None` while awaiting the first school
        let mut current: Option<Entry> = None;

        for line in lines {
            let cue = classifier.first_cue(line, PRECEDENCE);

            if cue == Some(Cue::Institution) {
                entries.extend(current.take());
                let located = classifier.split_location(&line.text);
                let mut entry = Entry::new(located.name).with_location(located.location);
                if classifier.has_date_range(&located.rest) {
                    entry.duration = located.rest;
                }
                current = Some(entry);
                continue;
            }

            let Some(entry) = current.as_mut() else {
                continue;
            };

            match cue {
                Some(Cue::Bullet) => entry.points.extend(point(line, classifier)),
                Some(Cue::Degree) if entry.position.is_empty() => {
                    entry.position = line.text.clone();
                    if entry.duration.is_empty() {
                        if let Some(date) = classifier.date_range(&line.text) {
                            entry.duration = date.to_string();
                        }
                    }
                }
                Some(Cue::Degree) | Some(Cue::DateRange)
                    if entry.duration.is_empty() && classifier.has_date_range(&line.text) =>
                {
                    entry.duration = line.text.clone();
                }
                _ => log::trace!("education: ignoring {:?}", line.text),
            }
        }

        entries.extend(current);
        entries
    }
}
