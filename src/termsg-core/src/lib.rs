//! Prefixed, coloured and wrapped terminal messages.
//!
//! termsg prints four kinds of messages (standard, info, warning, error)
//! through a single [`MessageFormatter`]:
//!
//! - [`prefix`]: hierarchical prefix stack (`"build: step 2"`)
//! - [`theme`]: colour names to ANSI escape sequences, with pass-through
//! - [`render`]: wrap-aware line rendering under the prefix
//! - [`formatter`]: the facade tying state, styles and sinks together
//!
//! The terminal ([`TerminalProbe`]) and the output streams ([`Sinks`]) are
//! injected, so the formatter can be driven entirely in memory.
//!
//! # Example
//!
//! ```no_run
//! use termsg_core::{FormatterConfig, MessageFormatter};
//!
//! let mut m = MessageFormatter::new(FormatterConfig::default())?;
//! m.prefix_reset("myprog");
//! m.info(&["Hello World"])?;
//! m.set_columns(40)?;
//! m.warn(&["This is a warning message."])?;
//! m.line(None, '-')?;
//! # Ok::<(), termsg_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod prefix;
pub mod render;
pub mod sink;
pub mod style;
pub mod terminal;
pub mod theme;

pub use config::{FormatterConfig, StyleConfig};
pub use error::{Error, Result};
pub use formatter::{MessageFormatter, PrintOptions};
pub use prefix::{DEFAULT_SEPARATOR, PrefixStack};
pub use render::{LineRenderer, UNBOUNDED_WIDTH};
pub use sink::{SinkTarget, Sinks};
pub use style::{KindStyles, MessageKind, StyleTriple, StyleUpdate, parse_style_key};
pub use terminal::{FixedProbe, SystemProbe, TerminalProbe};
pub use theme::{Axis, ColorResolver, Theme};

#[cfg(test)]
mod tests;
