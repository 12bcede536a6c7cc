//! Terminal capability queries.
//!
//! The formatter never touches the process terminal directly; it asks a
//! [`TerminalProbe`] at construction time (and when explicitly re-queried).

use std::io::IsTerminal;

use crate::sink::SinkTarget;

/// Fallback size when the terminal cannot be queried (e.g. output is piped).
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Source of terminal size and interactivity information.
pub trait TerminalProbe: Send {
    /// Current `(columns, rows)`.
    fn detect_size(&self) -> (u16, u16);

    /// Whether the given sink is an interactive terminal that should get colour.
    fn is_interactive(&self, target: SinkTarget) -> bool;
}

/// Probe backed by the real process terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl TerminalProbe for SystemProbe {
    fn detect_size(&self) -> (u16, u16) {
        match crossterm::terminal::size() {
            Ok((0, _)) | Ok((_, 0)) => FALLBACK_SIZE,
            Ok(size) => size,
            Err(err) => {
                tracing::debug!(error = %err, "terminal size unavailable, using fallback");
                FALLBACK_SIZE
            }
        }
    }

    fn is_interactive(&self, target: SinkTarget) -> bool {
        !colors_disabled() && is_terminal_output(target)
    }
}

/// Probe returning fixed answers, for tests and non-terminal embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe {
    pub columns: u16,
    pub rows: u16,
    pub interactive: bool,
}

impl FixedProbe {
    pub fn new(columns: u16, rows: u16, interactive: bool) -> Self {
        Self {
            columns,
            rows,
            interactive,
        }
    }
}

impl Default for FixedProbe {
    fn default() -> Self {
        Self::new(FALLBACK_SIZE.0, FALLBACK_SIZE.1, false)
    }
}

impl TerminalProbe for FixedProbe {
    fn detect_size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    fn is_interactive(&self, _target: SinkTarget) -> bool {
        self.interactive
    }
}

/// Check if colors should be disabled based on NO_COLOR env var.
///
/// Follows the NO_COLOR standard: https://no-color.org/
pub fn colors_disabled() -> bool {
    std::env::var("NO_COLOR")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

/// Check if the stream behind a sink target is a terminal (TTY).
pub fn is_terminal_output(target: SinkTarget) -> bool {
    match target {
        SinkTarget::Primary => std::io::stdout().is_terminal(),
        SinkTarget::Secondary => std::io::stderr().is_terminal(),
    }
}
