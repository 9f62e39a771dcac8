//! Violations
//!
//! What the checkers produce and the reporter prints.

use std::fmt;

/// A single style-rule failure.
///
/// `line` is one-based; document-wide violations carry no line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub line: Option<usize>,
    pub message: String,
}

impl Violation {
    pub fn at_line(line: usize, message: String) -> Self {
        Self {
            line: Some(line),
            message,
        }
    }

    pub fn document(message: String) -> Self {
        Self {
            line: None,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered violations collected for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub violations: Vec<Violation>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: usize, message: String) {
        self.violations.push(Violation::at_line(line, message));
    }

    pub fn add_document(&mut self, message: String) {
        self.violations.push(Violation::document(message));
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl IntoIterator for CheckResult {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
