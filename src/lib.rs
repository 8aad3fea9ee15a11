//! # unresume
//!
//! Rule-based résumé parsing for Rust.
//!
//! This library reads the first page of a résumé (plain text or PDF),
//! classifies each line, and assembles a structured document: the
//! candidate's name, contact fields, and titled sections of entries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{parse_file, render};
//!
//! fn main() -> unresume::Result<()> {
//!     // Parse a résumé; unreadable files give an empty document
//!     let doc = parse_file("resume.pdf");
//!
//!     // Convert to JSON
//!     let json = render::to_json(&doc, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line classification**: bullets, headers, dates, locations, org lines
//! - **Section extractors**: education, experience, skills, generic
//! - **Implicit sections**: a fallback for pages without any header
//! - **Multiple output formats**: JSON and a plain-text outline
//! - **Parallel batches**: uses Rayon to parse many files at once

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, InputFormat};
pub use error::{Error, Result};
pub use model::{ContactInfo, Entry, Line, PersonalInfo, ResumeDocument, Section};
pub use parser::{ParseOptions, ResumeParser};
pub use render::{ExtractionStats, JsonFormat};
pub use source::{open_source, LineSource, TextSource};

#[cfg(feature = "pdf")]
pub use source::PdfSource;

use std::path::Path;
use std::sync::OnceLock;

/// Default-options parser shared by the convenience functions.
fn default_parser() -> Option<&'static ResumeParser> {
    static PARSER: OnceLock<Option<ResumeParser>> = OnceLock::new();
    PARSER
        .get_or_init(|| match ResumeParser::new() {
            Ok(parser) => Some(parser),
            Err(e) => {
                log::error!("failed to build parser: {}", e);
                None
            }
        })
        .as_ref()
}

/// Parse raw page lines into a document.
///
/// Never fails: empty input gives the empty document.
///
/// # Example
///
/// ```
/// use unresume::parse_lines;
///
/// let doc = parse_lines(["Jane Doe", "jane@doe.com", "SKILLS", "Rust, Go"]);
/// assert_eq!(doc.personal_info.name, "Jane Doe");
/// assert_eq!(doc.personal_info.contact.email, "jane@doe.com");
/// ```
pub fn parse_lines<I, S>(lines: I) -> ResumeDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match default_parser() {
        Some(parser) => parser.parse_lines(lines),
        None => ResumeDocument::default(),
    }
}

/// Parse a block of text (first page only).
pub fn parse_text(text: &str) -> ResumeDocument {
    parse_lines(source::first_page(text).lines())
}

/// Parse a résumé file and return a structured document.
///
/// Any failure to read or extract the file is logged and yields the empty
/// document. Use [`try_parse_file`] to see the error instead.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_file;
///
/// let doc = parse_file("resume.pdf");
/// println!("Sections: {:?}", doc.section_titles());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> ResumeDocument {
    let path = path.as_ref();
    try_parse_file(path).unwrap_or_else(|e| {
        log::warn!("{}: {}", path.display(), e);
        ResumeDocument::default()
    })
}

/// Parse a résumé file, reporting read and extraction errors.
///
/// # Example
///
/// ```no_run
/// use unresume::try_parse_file;
///
/// match try_parse_file("resume.pdf") {
///     Ok(doc) => println!("{}", doc.personal_info.name),
///     Err(e) => eprintln!("cannot read résumé: {}", e),
/// }
/// ```
pub fn try_parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    let source = open_source(path)?;
    match default_parser() {
        Some(parser) => parser.try_parse_source(&source),
        None => ResumeParser::new()?.try_parse_source(&source),
    }
}

/// Convert a résumé file to JSON.
///
/// # Example
///
/// ```no_run
/// use unresume::{to_json, JsonFormat};
///
/// let json = to_json("resume.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("resume.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path);
    render::to_json(&doc, format)
}

/// Convert a résumé file to a plain-text outline.
pub fn to_text<P: AsRef<Path>>(path: P) -> String {
    render::to_text(&parse_file(path))
}

/// Builder for parsing résumés with custom options.
///
/// # Example
///
/// ```no_run
/// use unresume::Unresume;
///
/// let json = Unresume::new()
///     .with_contact_lines(6)
///     .dedupe_fallback()
///     .parse("resume.pdf")?
///     .to_json(unresume::JsonFormat::Compact)?;
/// # Ok::<(), unresume::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unresume {
    parse_options: ParseOptions,
}

impl Unresume {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many lines after the name are scanned for contact fields.
    pub fn with_contact_lines(mut self, lines: usize) -> Self {
        self.parse_options = self.parse_options.with_contact_lines(lines);
        self
    }

    /// Keep fallback entry bullets out of the catch-all section.
    pub fn dedupe_fallback(mut self) -> Self {
        self.parse_options = self.parse_options.dedupe_fallback();
        self
    }

    /// Skip text normalization.
    pub fn raw(mut self) -> Self {
        self.parse_options = self.parse_options.without_normalization();
        self
    }

    /// Replace the parse options wholesale.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Parse a file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnresumeResult> {
        let source = open_source(path)?;
        let parser = ResumeParser::with_options(self.parse_options)?;
        Ok(UnresumeResult {
            document: parser.try_parse_source(&source)?,
        })
    }

    /// Parse text that is already in memory.
    pub fn parse_text(self, text: &str) -> Result<UnresumeResult> {
        let parser = ResumeParser::with_options(self.parse_options)?;
        Ok(UnresumeResult {
            document: parser.parse_text(text),
        })
    }
}

/// Result of parsing a résumé.
#[derive(Debug, Clone)]
pub struct UnresumeResult {
    /// The parsed document
    pub document: ResumeDocument,
}

impl UnresumeResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to a plain-text outline.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Extraction statistics.
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }
}
