//! `ruleset` command-line converter.

use std::process::ExitCode;

use clap::Parser;
use ruleset_convert::{ConvertArgs, ConvertError};

fn main() -> ExitCode {
    let args = ConvertArgs::parse();

    match ruleset_convert::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        // Config errors happen before logging is set up.
        Err(ConvertError::Config(e)) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Err(_) => ExitCode::FAILURE,
    }
}
