//! Parsing options and configuration.

/// Header vocabulary. Matching is case-insensitive containment.
pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &[
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "PROJECTS",
    "WORK EXPERIENCE",
    "PROFESSIONAL EXPERIENCE",
    "CERTIFICATIONS",
    "ACHIEVEMENTS",
    "SUMMARY",
    "OBJECTIVE",
];

/// Words that mark a line as naming a school.
pub const DEFAULT_INSTITUTION_KEYWORDS: &[&str] =
    &["University", "College", "School", "Institute", "Academy"];

/// Words that mark a line as naming a degree.
pub const DEFAULT_DEGREE_KEYWORDS: &[&str] = &[
    "Bachelor", "Master", "Associate", "Degree", "B.S.", "M.S.", "B.A.", "M.A.", "Ph.D.", "MBA",
    "Diploma",
];

/// Words that suggest a job line when no headers exist.
pub const DEFAULT_WORK_KEYWORDS: &[&str] = &["job", "work", "employ", "position"];

/// Options for résumé parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How many lines after the name are scanned for contact fields
    pub contact_lines: usize,

    /// Non-bullet lines shorter than this are org-line candidates
    pub org_line_max_len: usize,

    /// Leading spaces that make a line an indented bullet
    pub bullet_indent: usize,

    /// Indented lines must be longer than this to count as bullets
    pub min_indented_len: usize,

    /// Section header vocabulary
    pub header_keywords: Vec<String>,

    /// Institution cue words (education sections)
    pub institution_keywords: Vec<String>,

    /// Degree cue words (education sections)
    pub degree_keywords: Vec<String>,

    /// Job cue words (implicit-section fallback)
    pub work_keywords: Vec<String>,

    /// Drop lines already used by fallback entries from the catch-all section
    pub dedupe_fallback_points: bool,

    /// Let a short date line fill the open experience entry's empty duration
    /// instead of starting a new entry
    pub merge_date_lines: bool,

    /// Normalize extracted text before splitting it into lines
    pub normalize: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of contact lines scanned after the name.
    pub fn with_contact_lines(mut self, lines: usize) -> Self {
        self.contact_lines = lines;
        self
    }

    /// Set the org-line length threshold.
    pub fn with_org_line_max_len(mut self, len: usize) -> Self {
        self.org_line_max_len = len;
        self
    }

    /// Set the indentation that marks a bullet continuation.
    pub fn with_bullet_indent(mut self, indent: usize) -> Self {
        self.bullet_indent = indent;
        self
    }

    /// Add one header keyword to the vocabulary.
    pub fn with_header_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.header_keywords.push(keyword.into());
        self
    }

    /// Replace the header vocabulary.
    pub fn with_header_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the institution keywords.
    pub fn with_institution_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.institution_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Remove duplicated bullets from the fallback catch-all section.
    pub fn dedupe_fallback(mut self) -> Self {
        self.dedupe_fallback_points = true;
        self
    }

    /// Merge stray date lines into the open experience entry.
    pub fn merge_date_lines(mut self) -> Self {
        self.merge_date_lines = true;
        self
    }

    /// Keep extracted text as-is.
    pub fn without_normalization(mut self) -> Self {
        self.normalize = false;
        self
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            contact_lines: 4,
            org_line_max_len: 60,
            bullet_indent: 4,
            min_indented_len: 5,
            header_keywords: owned(DEFAULT_HEADER_KEYWORDS),
            institution_keywords: owned(DEFAULT_INSTITUTION_KEYWORDS),
            degree_keywords: owned(DEFAULT_DEGREE_KEYWORDS),
            work_keywords: owned(DEFAULT_WORK_KEYWORDS),
            dedupe_fallback_points: false,
            merge_date_lines: false,
            normalize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_contact_lines(2)
            .with_org_line_max_len(40)
            .with_header_keyword("VOLUNTEERING")
            .dedupe_fallback()
            .without_normalization();

        assert_eq!(options.contact_lines, 2);
        assert_eq!(options.org_line_max_len, 40);
        assert!(options.header_keywords.iter().any(|k| k == "VOLUNTEERING"));
        assert!(options.dedupe_fallback_points);
        assert!(!options.normalize);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.contact_lines, 4);
        assert_eq!(options.org_line_max_len, 60);
        assert_eq!(options.bullet_indent, 4);
        assert_eq!(options.header_keywords.len(), DEFAULT_HEADER_KEYWORDS.len());
        assert!(!options.dedupe_fallback_points);
        assert!(!options.merge_date_lines);
        assert!(ParseOptions::new().merge_date_lines().merge_date_lines);
    }

    #[test]
    fn test_replace_header_keywords() {
        let options = ParseOptions::new().with_header_keywords(["WERDEGANG", "AUSBILDUNG"]);
        assert_eq!(options.header_keywords, vec!["WERDEGANG", "AUSBILDUNG"]);
    }
}
