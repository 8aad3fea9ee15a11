//! Résumé line parsing.
//!
//! The pipeline for one page:
//!
//! 1. the first line is the name, the next few lines are scanned for
//!    contact fields ([`ContactExtractor`]);
//! 2. the remaining lines are split into header-led blocks
//!    ([`segment`]);
//! 3. each block runs the entry extractor picked from its title
//!    ([`SectionKind`]);
//! 4. if no header was found at all, [`implicit_sections`] builds coarse
//!    sections instead.

mod classifier;
mod contact;
pub mod extract;
mod fallback;
mod options;
mod resume_parser;
mod segmenter;

pub use classifier::{Cue, LineClassifier, Located};
pub use contact::{head_lines, ContactExtractor};
pub use extract::{EntryExtractor, SectionKind};
pub use fallback::{implicit_sections, ADDITIONAL_INFORMATION_TITLE, IMPLICIT_EXPERIENCE_TITLE};
pub use options::{
    ParseOptions, DEFAULT_DEGREE_KEYWORDS, DEFAULT_HEADER_KEYWORDS, DEFAULT_INSTITUTION_KEYWORDS,
    DEFAULT_WORK_KEYWORDS,
};
pub use resume_parser::ResumeParser;
pub use segmenter::{segment, Block};
