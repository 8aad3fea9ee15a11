//! Section and entry types.

use serde::{Deserialize, Serialize};

/// A titled block of the résumé (e.g., EXPERIENCE).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Header text as it appeared on the page
    pub title: String,

    /// Entries in order of appearance
    pub entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Create a section with entries.
    pub fn with_entries(title: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Total number of points across all entries.
    pub fn point_count(&self) -> usize {
        self.entries.iter().map(|e| e.points.len()).sum()
    }

    /// Whether the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One organization, role or degree record.
///
/// Education entries store the institution in `company` and the degree in
/// `position`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Company or institution
    pub company: String,

    /// Position or degree
    pub position: String,

    /// Location fragment (e.g., "TX" or "Austin, TX")
    pub location: String,

    /// Free-text duration (e.g., "Jan 2020 - Mar 2021")
    pub duration: String,

    /// Bullet points, markers stripped
    pub points: Vec<String>,
}

impl Entry {
    /// Create an entry headed by a company or institution.
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..Default::default()
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Append a point.
    pub fn add_point(&mut self, point: impl Into<String>) {
        self.points.push(point.into());
    }

    /// No header fields and no points.
    pub fn is_blank(&self) -> bool {
        self.company.is_empty()
            && self.position.is_empty()
            && self.location.is_empty()
            && self.duration.is_empty()
            && self.points.is_empty()
    }
}
