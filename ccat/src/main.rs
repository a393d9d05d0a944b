// ccat/src/main.rs
//! ccat entry point.

use clap::Parser;
use std::process::ExitCode;

use ccat::cli::Cli;
use ccat::commands::ccat::{run_ccat, CcatOptions};
use ccat::{config_dir, logger};

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(args.log_level());

    let result = config_dir::resolve_config_dir(args.config_dir.as_deref()).and_then(|config_dir| {
        run_ccat(&CcatOptions {
            input: args.file.clone(),
            config_dir,
            disable_color: args.disable_color,
            line_numbers: args.line_numbers,
        })
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
