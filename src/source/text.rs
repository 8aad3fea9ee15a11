//! Plain-text line source.

use std::fs;
use std::path::{Path, PathBuf};

use super::{file_label, first_page, LineSource, Origin};
use crate::error::Result;

/// Lines from UTF-8 text, such as the output of an external PDF-to-text
/// tool. Only the text before the first form feed is used.
#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    origin: Origin<String>,
}

impl TextSource {
    /// Wrap text already in memory.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: Origin::Inline(text.into()),
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

    /// The file path, if this source reads from disk.
    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::File(path) => Some(path.as_path()),
            Origin::Inline(_) => None,
        }
    }
}

impl LineSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_lines(&self) -> Result<Vec<String>> {
        let owned;
        let text = match &self.origin {
            Origin::Inline(text) => text.as_str(),
            Origin::File(path) => {
                owned = fs::read_to_string(path)?;
                owned.as_str()
            }
        };

        Ok(first_page(text).lines().map(str::to_string).collect())
    }
}
