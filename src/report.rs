//! Reporter
//!
//! Walks the scan root, runs a checker on every document and prints the
//! violations grouped by file.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crate::core::{CheckResult, Document};
use crate::validation::Checker;
use crate::walker::find_documents;

/// What to do after the first document with violations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Check every document before reporting the outcome
    #[default]
    ScanAll,
    /// Stop at the first document with violations
    StopAtFirst,
}

impl ScanPolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            Self::StopAtFirst
        } else {
            Self::ScanAll
        }
    }
}

/// Outcome of one checker run over a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Documents actually checked
    pub checked: usize,
    /// Documents with at least one violation
    pub failed: usize,
}

impl Summary {
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Check every document under `root` and write violations to `out`.
pub fn run_check<C, W>(
    checker: &C,
    root: &Path,
    policy: ScanPolicy,
    out: &mut W,
) -> Result<Summary>
where
    C: Checker + ?Sized,
    W: Write,
{
    let paths = find_documents(root)?;
    log::debug!("Found {} documents under {}", paths.len(), root.display());

    let mut summary = Summary::default();
    for path in paths {
        let doc = Document::read(&path)?;
        let result = checker.check(&doc);
        summary.checked += 1;
        log::debug!("Checked {}: {} violations", path.display(), result.len());

        if result.is_clean() {
            continue;
        }

        summary.failed += 1;
        write_violations(checker.kind(), &path, result, out)?;

        if policy == ScanPolicy::StopAtFirst {
            log::info!("Stopping at first failing document: {}", path.display());
            break;
        }
    }

    Ok(summary)
}

fn write_violations<W: Write>(
    kind: &str,
    path: &Path,
    result: CheckResult,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "There were {kind} errors in: {}", path.display())
        .context("Failed to write report")?;
    for violation in result {
        writeln!(out, "* {violation}").context("Failed to write report")?;
    }
    Ok(())
}
