//! termsg - main entry point.
//!
//! Parses the global flags, installs the diagnostics subscriber and runs
//! one subcommand:
//! - `msg`, `info`, `warn`, `error` - print a message
//! - `line` - print a horizontal rule
//! - `demo` - walk through the formatter features

use anyhow::Result;
use clap::Parser;

use termsg_cli::{Cli, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.resolve_log_level());
    termsg_cli::run(cli)
}
