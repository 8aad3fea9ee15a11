//! Rendering module for converting résumé documents to output formats.

mod json;
mod result;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use result::ExtractionStats;
pub use text::to_text;
