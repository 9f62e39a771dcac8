//! Core Types
//!
//! Documents, lines and the violations reported against them.

pub mod diagnostics;
pub mod document;

pub use diagnostics::{CheckResult, Violation};
pub use document::{Document, Line};
