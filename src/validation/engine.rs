//! Validation Engine
//!
//! The checker seam shared by the style and line-length rules.

use crate::core::{CheckResult, Document};

/// A pure function from a document to its ordered violations.
///
/// Implementations hold no per-document state, so checking the same
/// document twice yields the same result.
pub trait Checker {
    /// Label used in report headers, e.g. "style"
    fn kind(&self) -> &'static str;

    fn check(&self, doc: &Document) -> CheckResult;
}

/// Quote line content for display as an ASCII-only JSON string literal.
///
/// Non-ASCII characters are written as `\uXXXX` escapes (surrogate pairs
/// above the BMP), so e.g. a trailing no-break space can't pass for a space.
pub fn quote(content: &str) -> String {
    let json = serde_json::to_string(content).unwrap_or_else(|_| format!("{content:?}"));
    if json.is_ascii() {
        return json;
    }

    let mut quoted = String::with_capacity(json.len() + 8);
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            quoted.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                quoted.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    quoted
}
