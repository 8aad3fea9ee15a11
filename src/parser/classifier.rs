//! Line classification.
//!
//! A line's role is never decided by a single pattern. Each extractor
//! declares an ordered list of [`Cue`]s and takes the first one a line
//! satisfies, so precedence lives in data rather than in nested branches.

use regex::Regex;

use super::ParseOptions;
use crate::error::Result;
use crate::model::Line;

/// Bullet markers in priority order. The first match wins when stripping.
const BULLET_MARKERS: &[&str] = &[
    r"^•\s*",
    r"^-\s*",
    r"^\*\s*",
    r"^[●○◦■□▪▫◆◇►▻➢➤✓✔‣⁃–—]\s*",
    r"^\d+\.(?:\s+|$)",
    r"^\[\d+\]\s*",
    r"^o\s+",
];

const MONTH_YEAR: &str = r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?,?\s+\d{4}\b";

const CITY_STATE: &str = r"[A-Za-z][A-Za-z .&'-]*,\s?[A-Z]{2}\b";

/// Characters trimmed between a name and its location fragment.
const SEPARATORS: &[char] = &[',', '|', '-', '–', '—', '·', '•', ' ', '\t'];

/// A classification signal a line may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Contains a section header keyword
    Header,
    /// Starts with a list marker or is deeply indented
    Bullet,
    /// Non-bullet line naming a school
    Institution,
    /// Names a degree
    Degree,
    /// Contains a month + year
    DateRange,
    /// Contains a `City, ST` fragment
    Location,
    /// Mentions a job/work keyword
    Work,
    /// Short non-bullet line, probably a company or institution
    OrgLine,
    /// Long non-bullet line, probably wrapped prose
    Prose,
}

impl Cue {
    /// Every cue, in reporting order.
    pub const ALL: [Cue; 9] = [
        Cue::Header,
        Cue::Bullet,
        Cue::Institution,
        Cue::Degree,
        Cue::DateRange,
        Cue::Location,
        Cue::Work,
        Cue::OrgLine,
        Cue::Prose,
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Header => "header",
            Cue::Bullet => "bullet",
            Cue::Institution => "institution",
            Cue::Degree => "degree",
            Cue::DateRange => "date",
            Cue::Location => "location",
            Cue::Work => "work",
            Cue::OrgLine => "org",
            Cue::Prose => "prose",
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A name with its location fragment split off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Located {
    /// Line text without the location fragment
    pub name: String,
    /// The location fragment, or empty
    pub location: String,
    /// Text that followed the location fragment
    pub rest: String,
}

/// Stateless line predicates built from [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct LineClassifier {
    bullet_markers: Vec<Regex>,
    header: Regex,
    date_range: Regex,
    location: Regex,
    institution: Regex,
    degree: Regex,
    work: Regex,
    org_line_max_len: usize,
    bullet_indent: usize,
    min_indented_len: usize,
    merge_date_lines: bool,
}

impl LineClassifier {
    /// Compile the classifier patterns.
    pub fn new(options: &ParseOptions) -> Result<Self> {
        let bullet_markers = BULLET_MARKERS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            bullet_markers,
            header: keyword_regex(&options.header_keywords, true)?,
            date_range: Regex::new(MONTH_YEAR)?,
            location: Regex::new(CITY_STATE)?,
            institution: keyword_regex(&options.institution_keywords, true)?,
            degree: keyword_regex(&options.degree_keywords, true)?,
            work: keyword_regex(&options.work_keywords, false)?,
            org_line_max_len: options.org_line_max_len,
            bullet_indent: options.bullet_indent,
            min_indented_len: options.min_indented_len,
            merge_date_lines: options.merge_date_lines,
        })
    }

    /// Whether a raw line is a bullet.
    ///
    /// Leading whitespace is significant here: a line indented by the
    /// configured width whose text is longer than the minimum counts as a
    /// bullet continuation even without a marker.
    pub fn is_bullet(&self, line: &str) -> bool {
        Line::new(0, line).is_some_and(|l| self.is_bullet_line(&l))
    }

    /// Whether a parsed line is a bullet.
    pub fn is_bullet_line(&self, line: &Line) -> bool {
        self.has_marker(&line.text) || self.is_indented(line.indent, line.len())
    }

    fn has_marker(&self, text: &str) -> bool {
        self.bullet_markers.iter().any(|re| re.is_match(text))
    }

    fn is_indented(&self, indent: usize, len: usize) -> bool {
        indent >= self.bullet_indent && len > self.min_indented_len
    }

    /// Remove leading list markers and surrounding whitespace.
    ///
    /// Markers are removed until none remain, so stripping twice is the same
    /// as stripping once.
    pub fn strip_bullet<'a>(&self, line: &'a str) -> &'a str {
        let mut rest = line.trim();
        loop {
            let found = self
                .bullet_markers
                .iter()
                .find_map(|re| re.find(rest).map(|m| m.end()));
            match found {
                Some(end) if end > 0 => rest = rest[end..].trim(),
                _ => return rest,
            }
        }
    }

    /// Whether the line contains a header keyword.
    pub fn is_section_header(&self, line: &str) -> bool {
        self.header.is_match(line)
    }

    /// The header keyword found in the line, as written.
    pub fn header_keyword<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.header.find(line).map(|m| m.as_str())
    }

    /// Whether a date line may fill the open experience entry's duration.
    pub fn merges_date_lines(&self) -> bool {
        self.merge_date_lines
    }

    /// Whether the line carries a month + year cue.
    pub fn has_date_range(&self, line: &str) -> bool {
        self.date_range.is_match(line)
    }

    /// The first month + year fragment in the line.
    pub fn date_range<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.date_range.find(line).map(|m| m.as_str())
    }

    /// The first `City, ST` fragment in the line.
    pub fn has_location<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.location.find(line).map(|m| m.as_str().trim())
    }

    /// Short, non-bullet line.
    pub fn looks_like_org_line(&self, line: &str) -> bool {
        !self.is_bullet(line) && line.trim().chars().count() < self.org_line_max_len
    }

    /// Whether the line names a school.
    pub fn is_institution(&self, line: &str) -> bool {
        self.institution.is_match(line)
    }

    /// Whether the line names a degree.
    pub fn is_degree(&self, line: &str) -> bool {
        self.degree.is_match(line)
    }

    /// Whether the line mentions a job keyword.
    pub fn is_work_line(&self, line: &str) -> bool {
        self.work.is_match(line)
    }

    /// The org-line length threshold.
    pub fn org_line_max_len(&self) -> usize {
        self.org_line_max_len
    }

    /// Split a location fragment off a company or school line.
    ///
    /// `"Google, Mountain View, CA"` gives name `Google` and location
    /// `Mountain View, CA`. When the fragment starts the line, as in
    /// `"Acme Corp, TX"`, the part before the comma is the name and the state
    /// is the location.
    pub fn split_location(&self, line: &str) -> Located {
        let line = line.trim();
        let Some(m) = self.location.find(line) else {
            return Located {
                name: line.to_string(),
                ..Default::default()
            };
        };

        let prefix = line[..m.start()].trim_end_matches(SEPARATORS);
        let rest = line[m.end()..].trim_start_matches(SEPARATORS).trim_end();
        let fragment = m.as_str().trim();

        let (name, location) = if prefix.is_empty() {
            match fragment.split_once(',') {
                Some((name, state)) => (name.trim(), state.trim()),
                None => (fragment, ""),
            }
        } else {
            (prefix, fragment)
        };

        Located {
            name: name.to_string(),
            location: location.to_string(),
            rest: rest.to_string(),
        }
    }

    /// Whether a line satisfies a cue.
    pub fn matches(&self, cue: Cue, line: &Line) -> bool {
        let text = line.text.as_str();
        match cue {
            Cue::Header => self.is_section_header(text),
            Cue::Bullet => self.is_bullet_line(line),
            Cue::Institution => !self.is_bullet_line(line) && self.is_institution(text),
            Cue::Degree => self.is_degree(text),
            Cue::DateRange => self.has_date_range(text),
            Cue::Location => self.location.is_match(text),
            Cue::Work => self.is_work_line(text),
            Cue::OrgLine => !self.is_bullet_line(line) && line.len() < self.org_line_max_len,
            Cue::Prose => !self.is_bullet_line(line) && line.len() >= self.org_line_max_len,
        }
    }

    /// The first cue in `precedence` that the line satisfies.
    pub fn first_cue(&self, line: &Line, precedence: &[Cue]) -> Option<Cue> {
        let cue = precedence
            .iter()
            .copied()
            .find(|&cue| self.matches(cue, line));
        log::trace!("line {} {:?} -> {:?}", line.index, line.text, cue);
        cue
    }

    /// Every cue the line satisfies.
    pub fn cues(&self, line: &Line) -> Vec<Cue> {
        Cue::ALL
            .iter()
            .copied()
            .filter(|&cue| self.matches(cue, line))
            .collect()
    }
}

/// Build a case-insensitive alternation of keywords.
///
/// Word boundaries are added on the sides of a keyword that start or end
/// with a word character; `whole_word = false` only anchors the start, so
/// `employ` also matches `employment`.
fn keyword_regex(keywords: &[String], whole_word: bool) -> Result<Regex> {
    let mut sorted: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if sorted.is_empty() {
        // Matches nothing
        return Ok(Regex::new(r"\b\B")?);
    }
    sorted.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let alternatives: Vec<String> = sorted
        .iter()
        .map(|k| {
            let body = regex::escape(k).replace(' ', r"\s+");
            let starts_word = k.chars().next().is_some_and(is_word_char);
            let ends_word = k.chars().last().is_some_and(is_word_char);
            format!(
                "{}{}{}",
                if starts_word { r"\b" } else { "" },
                body,
                if ends_word && whole_word { r"\b" } else { "" }
            )
        })
        .collect();

    Ok(Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))?)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LineClassifier {
        LineClassifier::new(&ParseOptions::default()).unwrap()
    }

    fn line(text: &str) -> Line {
        Line::new(0, text).unwrap()
    }

    #[test]
    fn test_bullet_markers() {
        let c = classifier();
        for text in [
            "• Led the team",
            "- Led the team",
            "* Led the team",
            "● Led the team",
            "▪ Led the team",
            "➢ Led the team",
            "1. Led the team",
            "[2] Led the team",
            "o Led the team",
        ] {
            assert!(c.is_bullet(text), "{text}");
            assert_eq!(c.strip_bullet(text), "Led the team", "{text}");
        }
    }

    #[test]
    fn test_not_bullets() {
        let c = classifier();
        assert!(!c.is_bullet("Acme Corp, TX"));
        assert!(!c.is_bullet("3.5 GPA"));
        assert!(!c.is_bullet("Operations lead"));
    }

    #[test]
    fn test_indented_bullet() {
        let c = classifier();
        assert!(c.is_bullet("    continued work on the parser"));
        assert!(!c.is_bullet("    abc"));
        assert!(!c.is_bullet("  two spaces only here"));

        let indented = Line::new(0, "     wrapped detail").unwrap();
        assert!(c.is_bullet_line(&indented));
    }

    #[test]
    fn test_strip_bullet_idempotent() {
        let c = classifier();
        for text in ["• • nested", "- - dashes", "1. 2. numbers", "o o", "plain", "•", "  ● spaced  "] {
            let once = c.strip_bullet(text);
            assert_eq!(c.strip_bullet(once), once, "{text}");
        }
        assert_eq!(c.strip_bullet("• • nested"), "nested");
    }

    #[test]
    fn test_section_header_contains() {
        let c = classifier();
        assert!(c.is_section_header("EDUCATION"));
        assert!(c.is_section_header("Professional Experience"));
        assert!(c.is_section_header("TECHNICAL SKILLS & TOOLS"));
        assert!(!c.is_section_header("Acme Corp, TX"));
        assert_eq!(
            c.header_keyword("Relevant Work Experience"),
            Some("Work Experience")
        );
    }

    #[test]
    fn test_date_range() {
        let c = classifier();
        assert!(c.has_date_range("Jan 2020 - Mar 2021"));
        assert!(c.has_date_range("May 2018"));
        assert!(c.has_date_range("September 2019 – Present"));
        assert!(!c.has_date_range("2019 - 2020"));
        assert!(!c.has_date_range("Marketing 2020"));
        assert_eq!(c.date_range("Graduated Dec 2021"), Some("Dec 2021"));
    }

    #[test]
    fn test_location() {
        let c = classifier();
        assert_eq!(
            c.has_location("jane@doe.com | (555) 123-4567 | Austin, TX"),
            Some("Austin, TX")
        );
        assert_eq!(c.has_location("Python, JavaScript"), None);
    }

    #[test]
    fn test_split_location() {
        let c = classifier();

        let acme = c.split_location("Acme Corp, TX");
        assert_eq!(acme.name, "Acme Corp");
        assert_eq!(acme.location, "TX");

        let google = c.split_location("Google, Mountain View, CA");
        assert_eq!(google.name, "Google");
        assert_eq!(google.location, "Mountain View, CA");

        let plain = c.split_location("Initech");
        assert_eq!(plain.name, "Initech");
        assert_eq!(plain.location, "");

        let dated = c.split_location("Globex | Springfield, IL | Jan 2020 - Present");
        assert_eq!(dated.name, "Globex");
        assert_eq!(dated.location, "Springfield, IL");
        assert_eq!(dated.rest, "Jan 2020 - Present");
    }

    #[test]
    fn test_org_line() {
        let c = classifier();
        assert!(c.looks_like_org_line("Acme Corp"));
        assert!(!c.looks_like_org_line("• Acme Corp"));
        assert!(!c.looks_like_org_line(&"x".repeat(60)));
    }

    #[test]
    fn test_first_cue_follows_precedence() {
        let c = classifier();
        let l = line("State University, TX");
        assert_eq!(
            c.first_cue(&l, &[Cue::Bullet, Cue::Institution, Cue::OrgLine]),
            Some(Cue::Institution)
        );
        assert_eq!(
            c.first_cue(&l, &[Cue::OrgLine, Cue::Institution]),
            Some(Cue::OrgLine)
        );
        assert_eq!(c.first_cue(&l, &[Cue::Bullet]), None);
    }

    #[test]
    fn test_cues_lists_everything() {
        let c = classifier();
        let cues = c.cues(&line("Bachelor of Science, May 2018"));
        assert!(cues.contains(&Cue::Degree));
        assert!(cues.contains(&Cue::DateRange));
        assert!(cues.contains(&Cue::OrgLine));
        assert!(!cues.contains(&Cue::Bullet));
    }

    #[test]
    fn test_work_keyword_prefix() {
        let c = classifier();
        assert!(c.is_work_line("Employment History"));
        assert!(c.is_work_line("Worked at Initech"));
        assert!(!c.is_work_line("Homework club"));
    }

    #[test]
    fn test_empty_keyword_list_matches_nothing() {
        let options = ParseOptions::new().with_header_keywords(Vec::<String>::new());
        let c = LineClassifier::new(&options).unwrap();
        assert!(!c.is_section_header("EDUCATION"));
    }
}
