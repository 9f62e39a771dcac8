//! Site Builder
//!
//! Renders the documentation into HTML by delegating to an external site
//! generator. Only availability checking and invocation live here.

pub mod process;

pub use process::{MkDocs, SiteTool, SubprocessFailed, ToolStatus};

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Default output directory for the rendered site
pub const DEFAULT_OUTPUT: &str = "html";

/// Controlled outcomes of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Built,
    ToolUnavailable,
}

/// Arguments for a strict build into `output`
pub fn build_args(output: &str) -> Vec<String> {
    ["build", "--strict", "--site-dir", output]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Build the site into `output`, running the tool from `cwd`.
///
/// Returns `ToolUnavailable` without building if the tool cannot be invoked.
/// A build that runs and fails is an error carrying [`SubprocessFailed`].
pub fn build_site<T, O, E>(
    tool: &T,
    output: &str,
    cwd: &Path,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<BuildOutcome>
where
    T: SiteTool + ?Sized,
    O: Write,
    E: Write,
{
    let name = tool.name();

    if !tool.check_available() {
        writeln!(
            stderr,
            "The `{name}` has not been installed. \
             Have you installed it on your system or your virtual environment?"
        )
        .context("Failed to write diagnostic")?;
        return Ok(BuildOutcome::ToolUnavailable);
    }

    writeln!(stdout, "Building the site with {name}...").context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;

    let status = tool.run(&build_args(output), cwd)?;
    if !status.success() {
        return Err(SubprocessFailed {
            program: name.to_string(),
            status,
        }
        .into());
    }

    writeln!(stdout).context("Failed to write output")?;
    writeln!(stdout, "You can serve the website with: {name} serve")
        .context("Failed to write output")?;
    Ok(BuildOutcome::Built)
}
