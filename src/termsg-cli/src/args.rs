//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use termsg_core::FormatterConfig;

/// Log verbosity for termsg's own diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always output with colors
    Always,
    /// Never output with colors
    Never,
}

impl ColorMode {
    fn as_setting(&self) -> Option<bool> {
        match self {
            ColorMode::Auto => None,
            ColorMode::Always => Some(true),
            ColorMode::Never => Some(false),
        }
    }
}

/// Print prefixed, coloured and wrapped terminal messages.
#[derive(Parser, Debug)]
#[command(name = "termsg", version, about)]
pub struct Cli {
    /// Wrap width (default: terminal width)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub columns: Option<i64>,

    /// Terminal height (default: terminal height)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub rows: Option<i64>,

    #[arg(long = "color", global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Do not wrap long lines
    #[arg(long = "no-wrap", global = true)]
    pub no_wrap: bool,

    /// Prefix segment; repeat to nest
    #[arg(long = "prefix", global = true, value_name = "SEGMENT")]
    pub prefixes: Vec<String>,

    /// Separator between prefix segments
    #[arg(long, global = true, default_value = ": ")]
    pub separator: String,

    /// Style override such as info_fore=LIGHTBLUE_EX or error_style=dim
    #[arg(long = "style", global = true, value_name = "KEY=NAME", value_parser = parse_key_value)]
    pub styles: Vec<(String, String)>,

    /// Diagnostics verbosity (also TERMSG_LOG_LEVEL)
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Formatter settings from the global flags.
    pub fn formatter_config(&self) -> FormatterConfig {
        let mut config = FormatterConfig::new()
            .with_wrap(!self.no_wrap)
            .with_prefixes(self.prefixes.iter().cloned())
            .with_prefix_separator(self.separator.clone());
        config.columns = self.columns;
        config.rows = self.rows;
        config.color = self.color.as_setting();
        config
    }

    /// `--log-level`, then `TERMSG_LOG_LEVEL`, then the default.
    pub fn resolve_log_level(&self) -> LogLevel {
        self.log_level
            .or_else(|| {
                std::env::var("TERMSG_LOG_LEVEL")
                    .ok()
                    .and_then(|level| LogLevel::from_str_loose(&level))
            })
            .unwrap_or_default()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a standard message to stdout
    Msg(TextArgs),
    /// Print an info message to stdout
    Info(TextArgs),
    /// Print a warning to stderr
    Warn(TextArgs),
    /// Print an error to stderr
    Error(TextArgs),
    /// Print a horizontal rule
    Line(LineArgs),
    /// Walk through prefixes, colours and wrapping
    Demo,
}

#[derive(Args, Debug)]
pub struct TextArgs {
    /// Message text; each argument is printed as its own block
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args, Debug)]
pub struct LineArgs {
    /// Rule width (default: columns minus the prefix)
    #[arg(long)]
    pub width: Option<usize>,

    /// Character to repeat
    #[arg(long = "char", default_value_t = '-')]
    pub ch: char,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("expected KEY=NAME, got '{raw}'"))
}
