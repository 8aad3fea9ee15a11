//! Implicit sections for pages without any header keyword.

use crate::model::{Entry, Line, Section};

use super::extract::point;
use super::LineClassifier;

/// Title of the synthesized experience section.
pub const IMPLICIT_EXPERIENCE_TITLE: &str = "EXPERIENCE";

/// Title of the catch-all section.
pub const ADDITIONAL_INFORMATION_TITLE: &str = "ADDITIONAL INFORMATION";

/// Build sections from a header-less page.
///
/// Non-bullet lines with a job keyword start entries: the next non-bullet
/// line is the position and the bullets (or indented lines) after it are
/// points. A catch-all section then collects every bullet on the page.
/// Unless `dedupe` is set, bullets already used by an entry appear in both.
pub fn implicit_sections(lines: &[Line], classifier: &LineClassifier, dedupe: bool) -> Vec<Section> {
    let mut entries = Vec::new();
    let mut consumed = vec![false; lines.len()];
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        if classifier.is_bullet_line(line) || !classifier.is_work_line(&line.text) {
            i += 1;
            continue;
        }

        let mut entry = Entry::new(line.text.clone());
        consumed[i] = true;
        let mut j = i + 1;

        // A bullet right after the hit is a point, not the position
        if let Some(next) = lines.get(j) {
            if !classifier.is_bullet_line(next) {
                entry.position = next.text.clone();
                consumed[j] = true;
                j += 1;
            }
        }

        while let Some(next) = lines.get(j) {
            if !classifier.is_bullet_line(next) {
                break;
            }
            entry.points.extend(point(next, classifier));
            consumed[j] = true;
            j += 1;
        }

        entries.push(entry);
        i = j;
    }

    log::debug!(
        "no section headers found; {} implicit experience entr{}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );

    let mut sections = Vec::with_capacity(2);
    if !entries.is_empty() {
        sections.push(Section::with_entries(IMPLICIT_EXPERIENCE_TITLE, entries));
    }

    let points = lines
        .iter()
        .zip(&consumed)
        .filter(|&(line, used)| classifier.is_bullet_line(line) && !(dedupe && *used))
        .filter_map(|(line, _)| point(line, classifier))
        .collect();

    sections.push(Section::with_entries(
        ADDITIONAL_INFORMATION_TITLE,
        vec![Entry {
            points,
            ..Default::default()
        }],
    ));

    sections
}
