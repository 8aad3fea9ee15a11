//! Error types for unresume library.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around résumé extraction.
///
/// The extraction engine itself never fails on odd input; these errors come
/// from line sources, classifier construction and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a PDF nor readable text.
    #[error("Unknown input format: not a PDF or UTF-8 text")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// PDF support was not compiled in.
    #[error("PDF input requires the `pdf` feature")]
    PdfDisabled,

    /// Error extracting text content from a PDF page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// A classifier pattern failed to compile.
    #[error("Invalid classifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "pdf")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
