//! External tool processes.

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Exit status of an external tool run.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ToolStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// The capability the site builder needs from a site generator
pub trait SiteTool {
    /// Program name, used in messages
    fn name(&self) -> &str;

    /// Whether the tool can be invoked at all
    fn check_available(&self) -> bool;

    /// Run the tool with `args` in `cwd`, sharing our stdout and stderr
    fn run(&self, args: &[String], cwd: &Path) -> Result<ToolStatus>;
}

/// `mkdocs` invoked as a child process
#[derive(Debug, Clone)]
pub struct MkDocs {
    program: String,
}

impl Default for MkDocs {
    fn default() -> Self {
        Self::new()
    }
}

impl MkDocs {
    pub fn new() -> Self {
        Self::with_program("mkdocs")
    }

    /// Use a different executable, e.g. one inside a virtualenv
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SiteTool for MkDocs {
    fn name(&self) -> &str {
        &self.program
    }

    fn check_available(&self) -> bool {
        // Output is left inherited so the user sees the installed version.
        Command::new(&self.program)
            .arg("--version")
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run(&self, args: &[String], cwd: &Path) -> Result<ToolStatus> {
        log::info!("+ {} {}", self.program, args.join(" "));
        let status = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .status()
            .with_context(|| format!("Failed to start `{}`", self.program))?;
        Ok(status.into())
    }
}

/// The site generator ran but reported failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubprocessFailed {
    pub program: String,
    pub status: ToolStatus,
}

impl SubprocessFailed {
    /// Status to exit with: the child's own code, or 1 if it had none
    pub fn exit_code(&self) -> i32 {
        match self.status.code {
            Some(code) if code != 0 => code,
            _ => 1,
        }
    }
}

impl fmt::Display for SubprocessFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status.code {
            Some(code) => write!(f, "`{}` exited with status {}", self.program, code),
            None => write!(f, "`{}` was terminated by a signal", self.program),
        }
    }
}

impl std::error::Error for SubprocessFailed {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let tool = MkDocs::with_program("docs-style-no-such-program");
        assert!(!tool.check_available());
    }

    #[test]
    fn test_missing_program_fails_to_run() {
        let tool = MkDocs::with_program("docs-style-no-such-program");
        let err = tool
            .run(&["build".to_string()], Path::new("."))
            .expect_err("should not start");
        assert!(err.to_string().contains("Failed to start"));
    }

    #[test]
    fn test_subprocess_failed_exit_code() {
        let failed = SubprocessFailed {
            program: "mkdocs".to_string(),
            status: ToolStatus { code: Some(2) },
        };
        assert_eq!(failed.exit_code(), 2);
        assert_eq!(failed.to_string(), "`mkdocs` exited with status 2");

        let killed = SubprocessFailed {
            program: "mkdocs".to_string(),
            status: ToolStatus { code: None },
        };
        assert_eq!(killed.exit_code(), 1);
    }
}
