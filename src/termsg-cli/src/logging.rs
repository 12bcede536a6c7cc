//! Diagnostics setup for the termsg binary.
//!
//! Library diagnostics go through `tracing`; the binary installs a plain
//! fmt subscriber on stderr so that they never mix with stdout messages.

use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: LogLevel) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
    } else {
        EnvFilter::new(format!("warn,termsg_core={0},termsg_cli={0}", level.as_filter_str()))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
