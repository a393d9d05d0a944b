//! This file defines the command-line interface (CLI) for the ccat application.

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config_dir::CONFIG_DIR_ENV;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "ccat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a file with colors chosen by per-filetype regex rules",
    long_about = "ccat prints a file to the terminal, coloring each character according to an ordered list of regex rules for the file's extension. Rules live in <config dir>/<extension>.conf as `PATTERN: COLOR` lines; when matches overlap, the rule listed first wins. Custom colors can be defined in <config dir>/colors.conf as `NAME: R G B`.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// The file to print.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the file without any coloring.
    #[arg(long = "disable-color", short = 'd', help = "Disable color; print the file as-is.")]
    pub disable_color: bool,

    /// Prefix every line with its line number.
    #[arg(long = "line-numbers", short = 'n', help = "Print line numbers.")]
    pub line_numbers: bool,

    /// Override the configuration directory.
    #[arg(long = "config-dir", value_name = "DIR", env = CONFIG_DIR_ENV, help = "Directory holding <extension>.conf rule files and colors.conf.")]
    pub config_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short = 'v', conflicts_with = "quiet", help = "Enable debug logging on stderr.")]
    pub verbose: bool,

    /// Disable all logging.
    #[arg(long, short = 'q', help = "Suppress all log messages.")]
    pub quiet: bool,
}

impl Cli {
    /// The log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.verbose {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
