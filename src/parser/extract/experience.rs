//! Experience sections.

use crate::model::{Entry, Line};
use crate::parser::{Cue, LineClassifier};

use super::{point, EntryExtractor};

/// Company name used when bullets appear before any company line.
pub const DEFAULT_EXPERIENCE_TITLE: &str = "Professional Experience";

const PRECEDENCE: &[Cue] = &[Cue::Bullet, Cue::Prose, Cue::DateRange, Cue::OrgLine];

/// Extracts one entry per company line.
///
/// Bullets are buffered and assigned to their entry when the next company
/// line (or the end of the block) closes it, so an entry's points are
/// exactly the bullets between its start and the next start.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceExtractor;

#[derive(Default)]
struct Machine {
    entries: Vec<Entry>,
    current: Option<Entry>,
    pending: Vec<String>,
}

impl Machine {
    fn flush(&mut self) {
        if let Some(mut entry) = self.current.take() {
            entry.points = std::mem::take(&mut self.pending);
            self.entries.push(entry);
        }
    }

    fn open(&mut self, entry: Entry) {
        self.flush();
        self.current = Some(entry);
    }

    fn finish(mut self) -> Vec<Entry> {
        self.flush();
        self.entries
    }
}

impl EntryExtractor for ExperienceExtractor {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn extract(&self, lines: &[Line], classifier: &LineClassifier) -> Vec<Entry> {
        let mut machine = Machine::default();
        let mut i = 0;

        while i < lines.len() {
            let line = &lines[i];
            i += 1;

            match classifier.first_cue(line, PRECEDENCE) {
                Some(Cue::Bullet) => {
                    let Some(text) = point(line, classifier) else {
                        continue;
                    };
                    if machine.current.is_none() {
                        machine.current = Some(Entry::new(DEFAULT_EXPERIENCE_TITLE));
                    }
                    machine.pending.push(text);
                }
                Some(Cue::Prose) => match machine.pending.last_mut() {
                    // Wrapped continuation of the previous bullet
                    Some(last) => {
                        last.push(' ');
                        last.push_str(&line.text);
                    }
                    None => log::trace!("experience: dropping prose {:?}", line.text),
                },
                Some(Cue::DateRange)
                    if classifier.merges_date_lines()
                        && machine
                            .current
                            .as_ref()
                            .is_some_and(|e| e.duration.is_empty()) =>
                {
                    if let Some(entry) = machine.current.as_mut() {
                        entry.duration = line.text.clone();
                    }
                }
                Some(Cue::DateRange) | Some(Cue::OrgLine) => {
                    let located = classifier.split_location(&line.text);
                    let mut entry = Entry::new(located.name).with_location(located.location);
                    if !located.rest.is_empty() {
                        if classifier.has_date_range(&located.rest) {
                            entry.duration = located.rest;
                        } else {
                            entry.company = format!("{} {}", entry.company, located.rest);
                        }
                    }

                    // Bounded lookahead: at most one more line is consumed.
                    if let Some(next) = lines.get(i) {
                        if !classifier.is_bullet_line(next) {
                            if entry.duration.is_empty() && classifier.has_date_range(&next.text) {
                                entry.duration = next.text.clone();
                            } else {
                                entry.position = next.text.clone();
                            }
                            i += 1;
                        }
                    }

                    machine.open(entry);
                }
                _ => {}
            }
        }

        machine.finish()
    }
}
