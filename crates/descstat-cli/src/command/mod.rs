use std::process::ExitCode;

use clap::Parser;

use self::compute::ComputeArg;

mod compute;

/// Compute descriptive statistics for files of whitespace-separated numbers
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    compute: ComputeArg,
}

pub fn run() -> anyhow::Result<ExitCode> {
    let args = CommandArgs::parse();
    compute::run(&args.compute)
}
