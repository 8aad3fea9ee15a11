//! Line cleanup applied before classification.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Cleans raw page lines: Unicode NFC, ligature expansion, removal of
/// replacement and private-use characters (icon fonts for phone/e-mail
/// glyphs land there), collapsed inner whitespace, and page-number lines.
///
/// Leading indentation is kept because it is a bullet cue.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    page_number: Regex,
    inner_space: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl TextNormalizer {
    /// Create a normalizer.
    pub fn new() -> Result<Self> {
        Ok(Self {
            page_number: Regex::new(
                r"(?i)^(?:[-–—]?\s*\d{1,3}\s*[-–—]?|page\s+\d+(?:\s+of\s+\d+)?)$",
            )?,
            inner_space: Regex::new(r"[ \t\u{00A0}]{2,}")?,
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
        })
    }

    /// Normalize one line. Returns `None` for lines that should be dropped.
    pub fn line(&self, raw: &str) -> Option<String> {
        let mut text: String = raw.nfc().collect();

        for (ligature, replacement) in &self.ligature_map {
            if text.contains(ligature) {
                text = text.replace(ligature, replacement);
            }
        }

        text.retain(|c| c != '\u{FFFD}' && !is_private_use(c));

        let body = text.trim();
        if body.is_empty() || self.page_number.is_match(body) {
            return None;
        }

        let indent = &raw[..raw.len() - raw.trim_start().len()];
        let body = self.inner_space.replace_all(body, " ");
        Some(format!("{}{}", indent.replace('\u{00A0}', " "), body))
    }

    /// Normalize every line, dropping blank and page-number lines.
    pub fn lines<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|l| self.line(l.as_ref()))
            .collect()
    }
}

fn is_private_use(c: char) -> bool {
    let code = c as u32;
    (0xE000..=0xF8FF).contains(&code)
        || (0xF0000..=0xFFFFD).contains(&code)
        || (0x100000..=0x10FFFD).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_ligatures_and_spaces() {
        let n = normalizer();
        assert_eq!(
            n.line("E\u{FB03}cient    o\u{FB01}ce   work").as_deref(),
            Some("Efficient office work")
        );
    }

    #[test]
    fn test_indentation_kept() {
        let n = normalizer();
        assert_eq!(n.line("    wrapped  text").as_deref(), Some("    wrapped text"));
    }

    #[test]
    fn test_icon_glyphs_removed() {
        let n = normalizer();
        assert_eq!(
            n.line("\u{F0E0} jane@doe.com").as_deref(),
            Some("jane@doe.com")
        );
        assert_eq!(n.line("\u{F095}"), None);
    }

    #[test]
    fn test_page_numbers_dropped() {
        let n = normalizer();
        assert_eq!(n.line("1"), None);
        assert_eq!(n.line("- 2 -"), None);
        assert_eq!(n.line("Page 1 of 1"), None);
        assert!(n.line("2019 - 2021").is_some());
    }

    #[test]
    fn test_nfc() {
        let n = normalizer();
        // e + combining acute accent
        assert_eq!(n.line("Re\u{0301}sume\u{0301}").as_deref(), Some("Résumé"));
    }

    #[test]
    fn test_lines_filters() {
        let n = normalizer();
        let lines = n.lines(["Jane Doe", "", "   ", "3", "EXPERIENCE"]);
        assert_eq!(lines, vec!["Jane Doe", "EXPERIENCE"]);
    }
}
