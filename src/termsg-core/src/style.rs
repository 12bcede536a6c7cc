//! Message kinds and their colour/weight triples.

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::sink::SinkTarget;
use crate::theme::{Axis, ColorResolver};

/// Classification of a printed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Plain message, no tag
    Standard,
    /// Informational message, tagged `info`
    Info,
    /// Warning, tagged `warn`
    Warn,
    /// Error, tagged `error`
    Error,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Standard,
        MessageKind::Info,
        MessageKind::Warn,
        MessageKind::Error,
    ];

    /// Label appended to the prefix stack for this kind.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            MessageKind::Standard => None,
            MessageKind::Info => Some("info"),
            MessageKind::Warn => Some("warn"),
            MessageKind::Error => Some("error"),
        }
    }

    /// Where this kind is written when the call gives no sink.
    pub fn default_target(&self) -> SinkTarget {
        match self {
            MessageKind::Standard | MessageKind::Info => SinkTarget::Primary,
            MessageKind::Warn | MessageKind::Error => SinkTarget::Secondary,
        }
    }

    /// Key prefix used by [`parse_style_key`] (`msg`, `info`, `warn`, `error`).
    pub fn key(&self) -> &'static str {
        match self {
            MessageKind::Standard => "msg",
            MessageKind::Info => "info",
            MessageKind::Warn => "warn",
            MessageKind::Error => "error",
        }
    }

    pub fn from_key(key: &str) -> Option<MessageKind> {
        MessageKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved (foreground, background, weight) tokens for one message kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTriple {
    pub fore: String,
    pub back: String,
    pub weight: String,
}

impl StyleTriple {
    /// Concatenated start sequence, background first.
    pub fn start_sequence(&self) -> String {
        format!("{}{}{}", self.back, self.fore, self.weight)
    }

    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::Fore => &self.fore,
            Axis::Back => &self.back,
            Axis::Weight => &self.weight,
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut String {
        match axis {
            Axis::Fore => &mut self.fore,
            Axis::Back => &mut self.back,
            Axis::Weight => &mut self.weight,
        }
    }

    /// Apply an update, resolving each provided field.
    pub fn apply(&mut self, update: &StyleUpdate, resolver: &ColorResolver) {
        for axis in Axis::ALL {
            if let Some(name) = update.get(axis) {
                *self.slot_mut(axis) = resolver.resolve(axis, name);
            }
        }
    }
}

/// Partial style change. `None` fields keep their current value.
///
/// Deserialises with `deny_unknown_fields`; `style` is an alias of `weight`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleUpdate {
    #[serde(default)]
    pub fore: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default, alias = "style")]
    pub weight: Option<String>,
}

impl StyleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fore(mut self, name: impl Into<String>) -> Self {
        self.fore = Some(name.into());
        self
    }

    pub fn back(mut self, name: impl Into<String>) -> Self {
        self.back = Some(name.into());
        self
    }

    pub fn weight(mut self, name: impl Into<String>) -> Self {
        self.weight = Some(name.into());
        self
    }

    pub fn get(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Fore => self.fore.as_deref(),
            Axis::Back => self.back.as_deref(),
            Axis::Weight => self.weight.as_deref(),
        }
    }

    pub fn set(&mut self, axis: Axis, name: impl Into<String>) {
        let name = Some(name.into());
        match axis {
            Axis::Fore => self.fore = name,
            Axis::Back => self.back = name,
            Axis::Weight => self.weight = name,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fore.is_none() && self.back.is_none() && self.weight.is_none()
    }

    /// Build an update from `(axis key, name)` pairs.
    ///
    /// Keys are `fore`, `back`, `weight` or `style`. Any other key fails the
    /// whole batch.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut update = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let axis = Axis::from_key(key)
                .ok_or_else(|| Error::invalid(format!("unknown style field '{key}'")))?;
            update.set(axis, value);
        }
        Ok(update)
    }
}

/// Parse a combined `<kind>_<axis>` key such as `info_fore` or `msg_style`.
pub fn parse_style_key(key: &str) -> Result<(MessageKind, Axis)> {
    let invalid = || Error::invalid(format!("unknown style key '{key}'"));
    let (kind, axis) = key.split_once('_').ok_or_else(invalid)?;
    let kind = MessageKind::from_key(kind).ok_or_else(invalid)?;
    let axis = Axis::from_key(axis).ok_or_else(invalid)?;
    Ok((kind, axis))
}

/// Style triples for every message kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindStyles {
    standard: StyleTriple,
    info: StyleTriple,
    warn: StyleTriple,
    error: StyleTriple,
}

impl KindStyles {
    /// Built-in defaults: white, green/dim, yellow and bright red on black.
    pub fn defaults(resolver: &ColorResolver) -> Self {
        let triple = |fore: &str, weight: &str| StyleTriple {
            fore: resolver.resolve(Axis::Fore, fore),
            back: resolver.resolve(Axis::Back, "BLACK"),
            weight: resolver.resolve(Axis::Weight, weight),
        };
        Self {
            standard: triple("WHITE", "NORMAL"),
            info: triple("GREEN", "DIM"),
            warn: triple("YELLOW", "NORMAL"),
            error: triple("RED", "BRIGHT"),
        }
    }

    pub fn get(&self, kind: MessageKind) -> &StyleTriple {
        match kind {
            MessageKind::Standard => &self.standard,
            MessageKind::Info => &self.info,
            MessageKind::Warn => &self.warn,
            MessageKind::Error => &self.error,
        }
    }

    pub fn get_mut(&mut self, kind: MessageKind) -> &mut StyleTriple {
        match kind {
            MessageKind::Standard => &mut self.standard,
            MessageKind::Info => &mut self.info,
            MessageKind::Warn => &mut self.warn,
            MessageKind::Error => &mut self.error,
        }
    }
}
