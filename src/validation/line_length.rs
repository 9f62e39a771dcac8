//! Line Length Rule

use anyhow::Result;
use regex::Regex;

use super::engine::Checker;
use crate::core::{CheckResult, Document};

/// Longest allowed line, in characters
pub const MAX_LINE_LENGTH: usize = 88;

/// Checker for overlong lines.
///
/// Reference-link definitions such as `[label]: https://...` are exempt
/// whatever their length.
#[derive(Debug, Clone)]
pub struct LineLengthChecker {
    max: usize,
    link_definition: Regex,
}

impl Default for LineLengthChecker {
    fn default() -> Self {
        Self::new().expect("Failed to compile line length rule patterns")
    }
}

impl LineLengthChecker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            max: MAX_LINE_LENGTH,
            link_definition: Regex::new(r"^\s*\[[^\]]+\]:")?,
        })
    }

    pub fn is_link_definition(&self, line: &str) -> bool {
        self.link_definition.is_match(line)
    }
}

impl Checker for LineLengthChecker {
    fn kind(&self) -> &'static str {
        "line length"
    }

    fn check(&self, doc: &Document) -> CheckResult {
        let mut result = CheckResult::new();

        for line in doc.lines() {
            if self.is_link_definition(line.content) {
                continue;
            }

            let length = line.content.chars().count();
            if length > self.max {
                result.add_line(
                    line.number(),
                    format!(
                        "Expected line {} to be at most {} characters, but got {}",
                        line.number(),
                        self.max,
                        length
                    ),
                );
            }
        }

        result
    }
}
