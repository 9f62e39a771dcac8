//! Style Rules
//!
//! Title, trailing whitespace, blank line after headings and the final
//! newline. Documents shorter than three lines only get the length violation.

use anyhow::Result;
use regex::Regex;

use super::engine::{quote, Checker};
use crate::core::{CheckResult, Document};

/// Fewer lines than this short-circuits every other style rule
pub const MIN_LINES: usize = 3;

/// Marker the first line must start with
pub const TITLE_MARKER: &str = "# ";

/// Checker for the document style rules
#[derive(Debug, Clone)]
pub struct StyleChecker {
    trailing_whitespace: Regex,
}

impl Default for StyleChecker {
    fn default() -> Self {
        Self::new().expect("Failed to compile style rule patterns")
    }
}

impl StyleChecker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            trailing_whitespace: Regex::new(r"\s+$")?,
        })
    }
}

impl Checker for StyleChecker {
    fn kind(&self) -> &'static str {
        "style"
    }

    fn check(&self, doc: &Document) -> CheckResult {
        let mut result = CheckResult::new();

        let line_count = doc.line_count();
        if line_count < MIN_LINES {
            result.add_document(format!(
                "Expected at least {MIN_LINES} lines, but found {line_count}"
            ));
            return result;
        }

        if let Some(first) = doc.lines().next()
            && !first.content.starts_with(TITLE_MARKER)
        {
            result.add_line(
                first.number(),
                format!(
                    "Expected the first line to be the title starting with '{TITLE_MARKER}', \
                     but got: {}",
                    quote(first.content)
                ),
            );
        }

        // Carried state: was the previous line a heading?
        doc.lines().fold(false, |prev_was_heading, line| {
            if self.trailing_whitespace.is_match(line.content) {
                result.add_line(
                    line.number(),
                    format!(
                        "Unexpected trailing whitespace at line {}: {}",
                        line.number(),
                        quote(line.content)
                    ),
                );
            }

            if prev_was_heading && !line.content.trim().is_empty() {
                result.add_line(
                    line.number(),
                    format!(
                        "Expected an empty line {} after a heading at line {}, but got: {}",
                        line.number(),
                        line.index,
                        quote(line.content)
                    ),
                );
            }

            line.content.starts_with('#')
        });

        if !doc.ends_with_newline() {
            result.add_document("Expected the document to end with a new line.".to_string());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> CheckResult {
        StyleChecker::default().check(&Document::new("doc.md", text))
    }

    fn messages(text: &str) -> Vec<String> {
        check(text).into_iter().map(|v| v.message).collect()
    }

    #[test]
    fn test_clean_document() {
        assert!(check("# Title\n\nBody text.\n").is_clean());
    }

    #[test]
    fn test_short_document_short_circuits() {
        assert_eq!(messages(""), vec!["Expected at least 3 lines, but found 0"]);
        // no title, no newline, trailing whitespace: still only one violation
        assert_eq!(
            messages("title   \nbody "),
            vec!["Expected at least 3 lines, but found 2"]
        );
    }

    #[test]
    fn test_missing_title() {
        let result = check("Title\n\nBody\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result.violations[0].line, Some(1));
        assert_eq!(
            result.violations[0].message,
            "Expected the first line to be the title starting with '# ', but got: \"Title\""
        );
    }

    #[test]
    fn test_subheading_is_not_a_title() {
        let result = check("## Title\n\nBody\n");
        assert_eq!(result.len(), 1);
        assert!(result.violations[0].message.contains("\"## Title\""));

        let result = check("#Title\n\nBody\n");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_missing_blank_after_heading() {
        let result = check("# Title\nBody\nMore\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result.violations[0].line, Some(2));
        assert_eq!(
            result.violations[0].message,
            "Expected an empty line 2 after a heading at line 1, but got: \"Body\""
        );
    }

    #[test]
    fn test_whitespace_only_line_counts_as_blank_after_heading() {
        // the whitespace-only line is still reported as trailing whitespace
        let result = check("# Title\n  \nBody\n");
        assert_eq!(
            result.into_iter().map(|v| v.message).collect::<Vec<_>>(),
            vec!["Unexpected trailing whitespace at line 2: \"  \""]
        );
    }

    #[test]
    fn test_consecutive_headings() {
        let result = check("# Title\n## Sub\n\nBody\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result.violations[0].line, Some(2));
    }

    #[test]
    fn test_trailing_whitespace() {
        let result = check("# Title\n\nfoo   \n");
        assert_eq!(result.len(), 1);
        assert_eq!(result.violations[0].line, Some(3));
        assert_eq!(
            result.violations[0].message,
            "Unexpected trailing whitespace at line 3: \"foo   \""
        );
    }

    #[test]
    fn test_trailing_tab_and_unicode_space() {
        let result = check("# Title\n\nfoo\t\nbar\u{00a0}\n");
        let lines: Vec<_> = result.violations.iter().map(|v| v.line).collect();
        assert_eq!(lines, vec![Some(3), Some(4)]);
        assert_eq!(
            result.violations[1].message,
            "Unexpected trailing whitespace at line 4: \"bar\\u00a0\""
        );
    }

    #[test]
    fn test_unicode_space_is_escaped_in_messages() {
        let messages = messages("# T\n\nbar\u{00a0}\nbaz\u{2003}\n");
        assert_eq!(
            messages,
            vec![
                "Unexpected trailing whitespace at line 3: \"bar\\u00a0\"",
                "Unexpected trailing whitespace at line 4: \"baz\\u2003\"",
            ]
        );
    }

    #[test]
    fn test_final_carriage_return_is_not_trailing_whitespace() {
        let result = check("# Title\n\nbaz\r");
        assert_eq!(
            result.into_iter().map(|v| v.message).collect::<Vec<_>>(),
            vec!["Expected the document to end with a new line."]
        );
    }

    #[test]
    fn test_missing_final_newline() {
        let result = check("# Title\n\nBody");
        assert_eq!(result.len(), 1);
        assert_eq!(result.violations[0].line, None);
        assert_eq!(
            result.violations[0].message,
            "Expected the document to end with a new line."
        );
    }

    #[test]
    fn test_violation_order_follows_lines() {
        let text = "Title\n# Heading\ntext \n\nend";
        let lines: Vec<_> = check(text).into_iter().map(|v| v.line).collect();
        assert_eq!(lines, vec![Some(1), Some(3), Some(3), None]);
    }

    #[test]
    fn test_state_does_not_leak_between_documents() {
        let checker = StyleChecker::default();
        let first = Document::new("a.md", "# A\n\n# Trailing heading\n");
        let second = Document::new("b.md", "# B\n\nBody\n");
        assert!(checker.check(&first).is_clean());
        assert!(checker.check(&second).is_clean());
    }
}
