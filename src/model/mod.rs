//! Résumé record types.
//!
//! The model is the output contract of the extraction engine: a
//! `ResumeDocument` with personal information and ordered sections. All
//! types serialize to the JSON wire format with every field present.

mod document;
mod line;
mod section;

pub use document::{ContactInfo, PersonalInfo, ResumeDocument};
pub use line::Line;
pub use section::{Entry, Section};
