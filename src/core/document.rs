//! Document Model
//!
//! A document is a file path plus its full text, split on demand into lines.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A single text document under the scanned root.
///
/// The text is read once and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

/// A logical line of a document with its terminator stripped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<'a> {
    /// Zero-based index
    pub index: usize,
    pub content: &'a str,
}

impl Line<'_> {
    /// One-based line number as shown to users
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Ok(Self::new(path, text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over the lines of the document.
    ///
    /// `\n` and `\r\n` are stripped, as is a bare `\r` left at a line end. A final
    /// terminator does not start an extra empty line, so `"a\n"` has one line
    /// and `""` has none. Calling this again restarts from the first line.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.text.lines().enumerate().map(|(index, content)| Line {
            index,
            content: content.strip_suffix('\r').unwrap_or(content),
        })
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    pub fn ends_with_newline(&self) -> bool {
        self.text.ends_with('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_strip_terminators() {
        let doc = Document::new("a.md", "# Title\r\n\nbody\n");
        let lines: Vec<_> = doc.lines().map(|l| l.content).collect();
        assert_eq!(lines, vec!["# Title", "", "body"]);
    }

    #[test]
    fn test_bare_carriage_return_at_end_is_stripped() {
        let doc = Document::new("a.md", "# Title\n\nbaz\r");
        let lines: Vec<_> = doc.lines().map(|l| l.content).collect();
        assert_eq!(lines, vec!["# Title", "", "baz"]);
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn test_empty_document_has_no_lines() {
        let doc = Document::new("a.md", "");
        assert_eq!(doc.line_count(), 0);
        assert!(!doc.ends_with_newline());
    }

    #[test]
    fn test_trailing_empty_lines_are_kept() {
        let doc = Document::new("a.md", "a\n\n\n");
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let doc = Document::new("a.md", "x\ny");
        let numbers: Vec<_> = doc.lines().map(|l| l.number()).collect();
        assert_eq!(numbers, vec![1, 2]);
        // restartable
        assert_eq!(doc.lines().count(), 2);
    }
}
