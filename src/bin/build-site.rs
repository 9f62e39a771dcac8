use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use docs_style::config::{init_logging, BuildArgs, BuildConfig};
use docs_style::site::{build_site, BuildOutcome, MkDocs, SubprocessFailed};

fn main() -> Result<ExitCode> {
    let args = BuildArgs::parse();
    init_logging(&args.log_level);

    let config = BuildConfig::from_args(args, Path::new("."))?;
    log::debug!("Resolved config: {:?}", config);

    let tool = MkDocs::new();
    let outcome = build_site(
        &tool,
        &config.output,
        Path::new("."),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    match outcome {
        Ok(BuildOutcome::Built) => Ok(ExitCode::SUCCESS),
        Ok(BuildOutcome::ToolUnavailable) => Ok(ExitCode::FAILURE),
        Err(err) => match err.downcast_ref::<SubprocessFailed>() {
            // The build's own output already explains the failure.
            Some(failed) => std::process::exit(failed.exit_code()),
            None => Err(err),
        },
    }
}
