//! termsg command line front end.
//!
//! - `args` - argument parsing
//! - `logging` - diagnostics subscriber
//! - `demo` - the `demo` subcommand

pub mod args;
pub mod demo;
pub mod logging;

use anyhow::{Context, Result};
use termsg_core::MessageFormatter;

pub use args::{Cli, ColorMode, Commands, LogLevel};

/// Build the formatter from the global flags and run the subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let mut formatter = build_formatter(&cli)?;

    match &cli.command {
        Commands::Msg(args) => formatter.msg(args.text.as_slice())?,
        Commands::Info(args) => formatter.info(args.text.as_slice())?,
        Commands::Warn(args) => formatter.warn(args.text.as_slice())?,
        Commands::Error(args) => formatter.error(args.text.as_slice())?,
        Commands::Line(args) => formatter.line(args.width, args.ch)?,
        Commands::Demo => demo::run(&mut formatter)?,
    }
    Ok(())
}

/// Formatter on stdout/stderr configured from `cli`.
pub fn build_formatter(cli: &Cli) -> Result<MessageFormatter> {
    let mut formatter = MessageFormatter::new(cli.formatter_config())
        .context("invalid formatter settings")?;
    if !cli.styles.is_empty() {
        formatter
            .set_colors(cli.styles.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .context("invalid --style")?;
    }
    tracing::debug!(
        columns = formatter.columns(),
        color = formatter.color_enabled(),
        "formatter ready"
    );
    Ok(formatter)
}
