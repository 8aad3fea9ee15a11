//! Document assembly: contact head, segmentation, extraction, fallback.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Line, PersonalInfo, ResumeDocument, Section};
use crate::source::{LineSource, TextNormalizer};

use super::contact::{head_lines, ContactExtractor};
use super::extract::build_section;
use super::fallback::implicit_sections;
use super::options::ParseOptions;
use super::segmenter::segment;
use super::LineClassifier;

/// Résumé parser.
///
/// Holds compiled patterns only; every call works on its own lines, so one
/// parser can be shared across threads.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    options: ParseOptions,
    classifier: LineClassifier,
    contact: ContactExtractor,
    normalizer: TextNormalizer,
}

impl ResumeParser {
    /// Create a parser with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new(&options)?,
            contact: ContactExtractor::new()?,
            normalizer: TextNormalizer::new()?,
            options,
        })
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The line classifier.
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Prepare raw page lines: normalize (if enabled) and drop blanks.
    pub fn prepare_lines<I, S>(&self, lines: I) -> Vec<Line>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.options.normalize {
            Line::from_raw(self.normalizer.lines(lines))
        } else {
            Line::from_raw(lines)
        }
    }

    /// Parse raw page lines. Never fails; degenerate input gives an empty or
    /// partial document.
    ///
    /// With normalization on (the default), page-number lines such as `1`
    /// are dropped first, so the name is the first line that survives
    /// normalization. Use [`ParseOptions::without_normalization`] to take the
    /// first raw line verbatim.
    pub fn parse_lines<I, S>(&self, lines: I) -> ResumeDocument
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = self.prepare_lines(lines);
        self.parse(&lines)
    }

    /// Parse a block of text, one page line per text line.
    pub fn parse_text(&self, text: &str) -> ResumeDocument {
        self.parse_lines(crate::source::first_page(text).lines())
    }

    /// Parse prepared lines.
    pub fn parse(&self, lines: &[Line]) -> ResumeDocument {
        let Some(first) = lines.first() else {
            return ResumeDocument::default();
        };

        let head = head_lines(lines, self.options.contact_lines, &self.classifier);
        let personal_info = PersonalInfo {
            name: first.text.clone(),
            contact: self.contact.extract(head, &self.classifier),
        };

        ResumeDocument {
            personal_info,
            sections: self.sections(lines),
        }
    }

    fn sections(&self, lines: &[Line]) -> Vec<Section> {
        let body = &lines[1..];
        let blocks = segment(body, &self.classifier);

        if blocks.is_empty() {
            if body.is_empty() {
                return Vec::new();
            }
            return implicit_sections(
                lines,
                &self.classifier,
                self.options.dedupe_fallback_points,
            );
        }

        blocks
            .iter()
            .map(|block| build_section(block, &self.classifier))
            .collect()
    }

    /// Read a source and parse it, reporting source failures.
    pub fn try_parse_source(&self, source: &dyn LineSource) -> Result<ResumeDocument> {
        let lines = source.page_lines()?;
        log::debug!("{}: {} raw line(s)", source.name(), lines.len());
        Ok(self.parse_lines(lines))
    }

    /// Read a source and parse it.
    ///
    /// A failing source is logged and yields the empty document, which is
    /// indistinguishable from a page with nothing to extract.
    pub fn parse_source(&self, source: &dyn LineSource) -> ResumeDocument {
        self.try_parse_source(source).unwrap_or_else(|e| {
            log::warn!("{}: extraction failed: {}", source.name(), e);
            ResumeDocument::default()
        })
    }

    /// Parse several sources in parallel. Results keep the input order.
    pub fn parse_many<S: LineSource>(&self, sources: &[S]) -> Vec<ResumeDocument> {
        sources
            .par_iter()
            .map(|source| self.parse_source(source))
            .collect()
    }
}
