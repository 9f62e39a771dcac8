use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use docs_style::config::{init_logging, CheckArgs, CheckConfig};
use docs_style::{run_check, StyleChecker};

fn main() -> Result<ExitCode> {
    let args = CheckArgs::parse();
    init_logging(&args.log_level);

    let config = CheckConfig::from_args(args, Path::new("."))?;
    log::debug!("Resolved config: {:?}", config);

    let checker = StyleChecker::new()?;
    let summary = run_check(&checker, &config.root, config.policy, &mut io::stderr().lock())?;

    Ok(summary.exit_code())
}
