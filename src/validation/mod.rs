//! Validation Engine
//!
//! Style rules and the line-length rule, each behind the `Checker` trait.

pub mod engine;
pub mod line_length;
pub mod style;

pub use engine::{quote, Checker};
pub use line_length::LineLengthChecker;
pub use style::StyleChecker;
