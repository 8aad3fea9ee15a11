//! Input line type.

use serde::{Deserialize, Serialize};

/// One non-empty line of page text.
///
/// `text` is trimmed; `indent` keeps the number of leading spaces the raw
/// line had, since indentation is a bullet cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Position among the non-blank lines of the page (0-indexed)
    pub index: usize,

    /// Trimmed text
    pub text: String,

    /// Leading spaces in the raw line (tabs count as four)
    pub indent: usize,
}

impl Line {
    /// Build a line from raw text. Returns `None` for blank input.
    pub fn new(index: usize, raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let indent = raw
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { 4 } else { 1 })
            .sum();

        Some(Self {
            index,
            text: text.to_string(),
            indent,
        })
    }

    /// Build the line sequence for a page, dropping blank lines.
    ///
    /// Indices refer to positions among the kept lines.
    pub fn from_raw<I, S>(lines: I) -> Vec<Line>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter(|raw| !raw.as_ref().trim().is_empty())
            .enumerate()
            .filter_map(|(index, raw)| Line::new(index, raw.as_ref()))
            .collect()
    }

    /// Character count of the trimmed text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; blank lines are never constructed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character count of the line as it appeared, indentation included.
    pub fn raw_len(&self) -> usize {
        self.indent + self.len()
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_trims_and_counts_indent() {
        let line = Line::new(3, "    Built the thing  ").unwrap();
        assert_eq!(line.index, 3);
        assert_eq!(line.text, "Built the thing");
        assert_eq!(line.indent, 4);
        assert_eq!(line.raw_len(), 19);
    }

    #[test]
    fn test_tab_indent() {
        let line = Line::new(0, "\tpoint").unwrap();
        assert_eq!(line.indent, 4);
    }

    #[test]
    fn test_blank_line_rejected() {
        assert!(Line::new(0, "   ").is_none());
        assert!(Line::new(0, "").is_none());
    }

    #[test]
    fn test_from_raw_reindexes() {
        let lines = Line::from_raw(["Jane Doe", "", "  ", "EXPERIENCE"]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[1].text, "EXPERIENCE");
    }
}
