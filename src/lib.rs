//! Documentation Style Checker
//!
//! Checks a tree of Markdown documents against a fixed house style and
//! wraps the external static-site build.
//!
//! This library provides:
//! - Style rules (title, trailing whitespace, blank line after headings, final newline)
//! - A line-length rule that exempts reference-link definitions
//! - Directory walking and per-file reporting
//! - A site builder that drives `mkdocs`

pub mod config;
pub mod core;
pub mod report;
pub mod site;
pub mod validation;
pub mod walker;

pub use crate::core::{CheckResult, Document, Line, Violation};
pub use config::{BuildConfig, CheckConfig};
pub use report::{run_check, ScanPolicy, Summary};
pub use site::{build_site, BuildOutcome, MkDocs, SiteTool};
pub use validation::{Checker, LineLengthChecker, StyleChecker};
pub use walker::find_documents;
