//! Splitting the line stream into titled blocks.

use crate::model::Line;

use super::LineClassifier;

/// A header line and the content lines up to the next header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// The header line
    pub header: &'a Line,
    /// Lines between this header and the next one
    pub content: &'a [Line],
}

impl<'a> Block<'a> {
    /// Header text, verbatim.
    pub fn title(&self) -> &'a str {
        &self.header.text
    }
}

/// Split lines into blocks in a single forward pass.
///
/// A header line always opens a new block, even when it also looks like
/// content. Lines before the first header are dropped. A block closed by a
/// following header is kept even when empty; the final block is kept only
/// if it has content.
pub fn segment<'a>(lines: &'a [Line], classifier: &LineClassifier) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    // Open header and the index of its first content line
    let mut open: Option<(&'a Line, usize)> = None;

    for (i, line) in lines.iter().enumerate() {
        if !classifier.is_section_header(&line.text) {
            continue;
        }
        match open.take() {
            Some((header, start)) => blocks.push(Block {
                header,
                content: &lines[start..i],
            }),
            None if i > 0 => log::debug!("dropping {} line(s) before the first header", i),
            None => {}
        }
        open = Some((line, i + 1));
    }

    if let Some((header, start)) = open {
        if start < lines.len() {
            blocks.push(Block {
                header,
                content: &lines[start..],
            });
        }
    }

    blocks
}
