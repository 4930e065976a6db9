//! Main entry point for the passweave CLI

use clap::Parser;
use passweave::cli;
use passweave_common::Logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    Logging::init();

    let args = cli::Cli::parse();
    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
