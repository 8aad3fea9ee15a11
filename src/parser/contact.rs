//! Contact field extraction from the head of the page.

use regex::Regex;

use crate::error::Result;
use crate::model::{ContactInfo, Line};

use super::LineClassifier;

const EMAIL: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
const PHONE: &str = r"(?:\+?1[\s.-]?)?(?:\(\d{3}\)\s?|\d{3}[.-])\d{3}[.-]\d{4}";
const LINKEDIN: &str = r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_%-]+/?";
const GITHUB: &str = r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_-]+/?";

/// Scans head lines for contact fields.
///
/// Each field is an independent first-match search over the joined head
/// text; a match for one field never hides text from another.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    github: Regex,
}

impl ContactExtractor {
    /// Compile the contact patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: Regex::new(EMAIL)?,
            phone: Regex::new(PHONE)?,
            linkedin: Regex::new(LINKEDIN)?,
            github: Regex::new(GITHUB)?,
        })
    }

    /// Extract contact fields from the given lines.
    ///
    /// Location uses the classifier's `City, ST` pattern so entries and
    /// contact agree on what a location looks like.
    pub fn extract(&self, lines: &[Line], classifier: &LineClassifier) -> ContactInfo {
        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" | ");

        let first = |re: &Regex| {
            re.find(&text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        ContactInfo {
            email: first(&self.email),
            phone: first(&self.phone),
            location: classifier
                .has_location(&text)
                .map(str::to_string)
                .unwrap_or_default(),
            linkedin: first(&self.linkedin),
            github: first(&self.github),
        }
    }
}

/// The contact window: up to `max` lines after the name, stopping at the
/// first section header.
pub fn head_lines<'a>(lines: &'a [Line], max: usize, classifier: &LineClassifier) -> &'a [Line] {
    let after_name = lines.get(1..).unwrap_or(&[]);
    let end = after_name
        .iter()
        .take(max)
        .position(|l| classifier.is_section_header(&l.text))
        .unwrap_or_else(|| max.min(after_name.len()));
    &after_name[..end]
}
