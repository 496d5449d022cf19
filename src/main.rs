//! Entry point for memshell-config.
use std::process::ExitCode;

use clap::Parser;
use memshell_config::{
    cli::{execute, CliArgs, CliExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn run() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let args = CliArgs::parse();
    let invocation = args.into_invocation().map_err(CliExit::from_error)?;
    let output = execute(invocation).map_err(CliExit::from_error)?;
    println!("{output}");
    Ok(())
}
