//! Configuration management for the documentation tools.
//!
//! Handles:
//! - Command-line argument parsing for the checkers and the site builder
//! - The optional `docs-style.toml` project file
//!
//! Command-line flags win over the project file, which wins over defaults.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::ScanPolicy;
use crate::site::DEFAULT_OUTPUT;

/// Name of the project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "docs-style.toml";

/// Default scan root, relative to the working directory
pub const DEFAULT_DOCS_ROOT: &str = "docs";

/// Command-line arguments shared by the checkers
#[derive(Debug, Parser)]
#[command(about = "Check the documentation under a directory")]
#[command(version)]
pub struct CheckArgs {
    /// Directory to scan for documents
    #[arg(long, help = "Directory containing the documents (default: docs)")]
    pub root: Option<PathBuf>,

    /// Stop at the first document with violations
    #[arg(long)]
    pub fail_fast: bool,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Command-line arguments for the site builder
#[derive(Debug, Parser)]
#[command(about = "Render the documentation into HTML")]
#[command(version)]
pub struct BuildArgs {
    #[arg(
        short,
        long,
        help = "Output directory where HTML will reside (default: html)"
    )]
    pub output: Option<String>,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of `docs-style.toml`
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub docs: DocsSection,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DocsSection {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    pub output: Option<String>,
}

impl ProjectConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid project config")
    }

    /// Load the project file from `dir`; a missing file is not an error
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(PROJECT_CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config =
            Self::parse(&text).with_context(|| format!("Failed to load {}", path.display()))?;
        log::debug!("Loaded project config: {}", path.display());
        Ok(Some(config))
    }
}

/// Resolved configuration for a checker run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub root: PathBuf,
    pub policy: ScanPolicy,
    pub log_level: String,
}

impl CheckConfig {
    /// Resolve against the project file in `project_dir`
    pub fn from_args(args: CheckArgs, project_dir: &Path) -> Result<Self> {
        let project = ProjectConfig::load(project_dir)?.unwrap_or_default();

        let root = args
            .root
            .or(project.docs.root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_ROOT));

        Ok(CheckConfig {
            root: project_dir.join(root),
            policy: ScanPolicy::from_fail_fast(args.fail_fast),
            log_level: args.log_level,
        })
    }
}

/// Resolved configuration for a site build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub output: String,
    pub log_level: String,
}

impl BuildConfig {
    pub fn from_args(args: BuildArgs, project_dir: &Path) -> Result<Self> {
        let project = ProjectConfig::load(project_dir)?.unwrap_or_default();

        let output = args
            .output
            .or(project.site.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        Ok(BuildConfig {
            output,
            log_level: args.log_level,
        })
    }
}

/// Initialize `env_logger` at `level` unless `RUST_LOG` says otherwise
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
