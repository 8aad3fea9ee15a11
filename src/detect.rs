//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Kind of input a line source can read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormat {
    /// A PDF file with its header version (e.g., "1.7").
    Pdf { version: String },
    /// UTF-8 plain text, one text line per line.
    Text,
}

impl InputFormat {
    /// Whether this is a PDF input.
    pub fn is_pdf(&self) -> bool {
        matches!(self, InputFormat::Pdf { .. })
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Pdf { version } => write!(f, "PDF {}", version),
            InputFormat::Text => write!(f, "text"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const SNIFF_LEN: usize = 1024;

/// Detect the input format of a file by reading its first bytes.
///
/// # Example
/// ```no_run
/// use unresume::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("resume.pdf").unwrap();
/// println!("Input: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(SNIFF_LEN as u64);
    let mut header = Vec::with_capacity(SNIFF_LEN);
    reader.read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from leading bytes.
///
/// # Returns
/// * `Ok(InputFormat::Pdf)` if the data starts with a valid PDF header
/// * `Ok(InputFormat::Text)` if the data is UTF-8 text without NUL bytes
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.starts_with(PDF_MAGIC) {
        if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
            return Err(Error::UnknownFormat);
        }

        // Extract version string (e.g., "1.7" from "%PDF-1.7")
        let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
        let version = String::from_utf8_lossy(version_bytes).to_string();

        if !is_valid_version(&version) {
            return Err(Error::UnsupportedVersion(version));
        }

        return Ok(InputFormat::Pdf { version });
    }

    if data.is_empty() || looks_like_text(data) {
        Ok(InputFormat::Text)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    if version.len() != 3 {
        return false;
    }

    let chars: Vec<char> = version.chars().collect();
    chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

fn looks_like_text(data: &[u8]) -> bool {
    if data.contains(&0) {
        return false;
    }
    match std::str::from_utf8(data) {
        Ok(_) => true,
        // A sniff window may cut a multi-byte character in half.
        Err(e) => e.error_len().is_none() && e.valid_up_to() + 4 > data.len(),
    }
}

/// Check if a file is a valid PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(InputFormat::Pdf { .. }))
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(InputFormat::Pdf { .. }))
}
