//! Line sources: where page lines come from.
//!
//! The extraction engine only sees an ordered list of lines for one page.
//! A [`LineSource`] produces that list from text or from the first page of
//! a PDF.
//!
//! # Example
//!
//! ```no_run
//! use unresume::source::{open_source, LineSource};
//!
//! let source = open_source("resume.pdf")?;
//! for line in source.page_lines()? {
//!     println!("{}", line);
//! }
//! # Ok::<(), unresume::Error>(())
//! ```

mod normalize;
#[cfg(feature = "pdf")]
mod pdf;
mod text;

pub use normalize::TextNormalizer;
#[cfg(feature = "pdf")]
pub use pdf::PdfSource;
pub use text::TextSource;

use crate::detect::{detect_format_from_path, InputFormat};
use crate::error::Result;
#[cfg(not(feature = "pdf"))]
use crate::error::Error;
use std::path::{Path, PathBuf};

/// Produces the raw text lines of one page, in reading order.
///
/// Lines may carry leading indentation; blank lines are allowed and are
/// dropped by the parser.
pub trait LineSource: Send + Sync {
    /// A label for logs and reports (usually the file name).
    fn name(&self) -> &str;

    /// Read the page lines.
    fn page_lines(&self) -> Result<Vec<String>>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn page_lines(&self) -> Result<Vec<String>> {
        (**self).page_lines()
    }
}

/// Where a source reads its content from.
#[derive(Debug, Clone)]
pub(crate) enum Origin<T> {
    Inline(T),
    File(PathBuf),
}

/// Form feed separates pages in extracted text.
pub(crate) const PAGE_BREAK: char = '\u{000C}';

/// The text of the first page.
pub(crate) fn first_page(text: &str) -> &str {
    text.split(PAGE_BREAK).next().unwrap_or_default()
}

pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open a file as a line source, choosing the reader by content.
pub fn open_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn LineSource>> {
    let path = path.as_ref();
    let format = detect_format_from_path(path)?;
    log::debug!("{}: detected {}", path.display(), format);

    match format {
        #[cfg(feature = "pdf")]
        InputFormat::Pdf { .. } => Ok(Box::new(PdfSource::from_path(path))),
        #[cfg(not(feature = "pdf"))]
        InputFormat::Pdf { .. } => Err(Error::PdfDisabled),
        InputFormat::Text => Ok(Box::new(TextSource::from_path(path))),
    }
}
