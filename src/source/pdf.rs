//! First-page text of a PDF, via `pdf-extract`.

use std::fs;
use std::panic;
use std::path::PathBuf;

use super::{file_label, first_page, LineSource, Origin};
use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};

/// Lines from the first page of a PDF document.
#[derive(Debug, Clone)]
pub struct PdfSource {
    name: String,
    origin: Origin<Vec<u8>>,
}

impl PdfSource {
    /// Wrap PDF bytes already in memory.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            origin: Origin::Inline(data.into()),
        }
    }

    /// Read from a file when lines are requested.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: file_label(&path),
            origin: Origin::File(path),
        }
    }

    fn extract(data: &[u8]) -> Result<String> {
        let format = detect_format_from_bytes(data)?;
        if !format.is_pdf() {
            return Err(Error::UnknownFormat);
        }

        // pdf-extract panics on some malformed documents
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data)) {
            Ok(result) => Ok(result?),
            Err(_) => Err(Error::TextExtract(
                "PDF text extraction panicked".to_string(),
            )),
        }
    }
}

impl LineSource for PdfSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_lines(&self) -> Result<Vec<String>> {
        let text = match &self.origin {
            Origin::Inline(data) => Self::extract(data)?,
            Origin::File(path) => Self::extract(&fs::read(path)?)?,
        };

        Ok(first_page(&text).lines().map(str::to_string).collect())
    }
}
