//! Construction parameters for a [`MessageFormatter`](crate::MessageFormatter).
//!
//! Every field is optional; absent terminal size and colour settings are
//! detected through the [`TerminalProbe`](crate::TerminalProbe) when the
//! formatter is built. The struct deserialises with serde so embedders can
//! take it from their own settings, but unknown fields are rejected.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::prefix::DEFAULT_SEPARATOR;
use crate::style::{MessageKind, StyleUpdate};

/// Formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Terminal width; detected when absent.
    pub columns: Option<i64>,
    /// Terminal height; detected when absent.
    pub rows: Option<i64>,
    /// Colour output; on iff the primary sink is interactive when absent.
    pub color: Option<bool>,
    /// Word wrapping at `columns`.
    pub wrap: bool,
    /// Initial prefix segments.
    pub prefixes: Vec<String>,
    pub prefix_separator: String,
    /// Overrides of the built-in style triples.
    pub styles: StyleConfig,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            columns: None,
            rows: None,
            color: None,
            wrap: true,
            prefixes: Vec::new(),
            prefix_separator: DEFAULT_SEPARATOR.to_string(),
            styles: StyleConfig::default(),
        }
    }
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: i64) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_rows(mut self, rows: i64) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prefix_separator(mut self, separator: impl Into<String>) -> Self {
        self.prefix_separator = separator.into();
        self
    }

    pub fn with_style(mut self, kind: MessageKind, update: StyleUpdate) -> Self {
        *self.styles.get_mut(kind) = update;
        self
    }

    /// Check explicit dimensions. Called before a formatter is built.
    pub fn validate(&self) -> Result<()> {
        if let Some(columns) = self.columns {
            positive("columns", columns)?;
        }
        if let Some(rows) = self.rows {
            positive("rows", rows)?;
        }
        Ok(())
    }
}

/// Per-kind style overrides, keyed like the `set_colors` kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub msg: StyleUpdate,
    pub info: StyleUpdate,
    pub warn: StyleUpdate,
    pub error: StyleUpdate,
}

impl StyleConfig {
    pub fn get(&self, kind: MessageKind) -> &StyleUpdate {
        match kind {
            MessageKind::Standard => &self.msg,
            MessageKind::Info => &self.info,
            MessageKind::Warn => &self.warn,
            MessageKind::Error => &self.error,
        }
    }

    pub fn get_mut(&mut self, kind: MessageKind) -> &mut StyleUpdate {
        match kind {
            MessageKind::Standard => &mut self.msg,
            MessageKind::Info => &mut self.info,
            MessageKind::Warn => &mut self.warn,
            MessageKind::Error => &mut self.error,
        }
    }
}

/// Accept a strictly positive dimension.
pub(crate) fn positive(name: &str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::invalid(format!(
            "{name} must be a positive integer, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| Error::invalid(format!("{name} is out of range: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormatterConfig::default();
        assert!(config.wrap);
        assert_eq!(config.prefix_separator, ": ");
        assert!(config.prefixes.is_empty());
        assert!(config.columns.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(FormatterConfig::new().with_columns(0).validate().is_err());
        assert!(FormatterConfig::new().with_rows(-3).validate().is_err());
        assert!(FormatterConfig::new().with_columns(1).with_rows(1).validate().is_ok());
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("columns", 12).unwrap(), 12);
        let err = positive("columns", -1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("columns"));
    }

    #[test]
    fn test_deserialize() {
        let config: FormatterConfig = toml::from_str(
            r#"
columns = 60
wrap = false
prefixes = ["textwrap"]
prefix_separator = "> "

[styles.info]
fore = "lightblue_ex"
style = "bright"
"#,
        )
        .unwrap();

        assert_eq!(config.columns, Some(60));
        assert!(!config.wrap);
        assert_eq!(config.prefixes, vec!["textwrap".to_string()]);
        assert_eq!(config.styles.info.fore.as_deref(), Some("lightblue_ex"));
        assert_eq!(config.styles.info.weight.as_deref(), Some("bright"));
        assert!(config.styles.warn.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        assert!(toml::from_str::<FormatterConfig>("colour = true").is_err());
        assert!(toml::from_str::<FormatterConfig>("[styles.debug]\nfore = 'red'").is_err());
    }
}
