//! The [`MessageFormatter`] facade.
//!
//! Owns the formatter state (terminal size, colour and wrap flags, prefix
//! stack, style triples) and dispatches each print call through the
//! prefix stack, the colour resolver and the line renderer.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::config::{FormatterConfig, positive};
use crate::error::{Error, Result};
use crate::prefix::PrefixStack;
use crate::render::{
    LineRenderer, compose_line_prefix, default_rule_width, effective_width, rule_text,
};
use crate::sink::{SinkTarget, Sinks};
use crate::style::{KindStyles, MessageKind, StyleTriple, StyleUpdate, parse_style_key};
use crate::terminal::{SystemProbe, TerminalProbe};
use crate::theme::{Axis, ColorResolver, Theme};

/// Per-call overrides. Absent fields fall back to the formatter state.
#[derive(Default)]
pub struct PrintOptions<'a> {
    /// Write here instead of the kind's default sink.
    pub sink: Option<&'a mut dyn Write>,
    /// Force wrapping on or off for this call.
    pub wrap: Option<bool>,
    /// Use this instead of the rendered prefix stack.
    pub prefix: Option<&'a str>,
    /// Style names layered over the kind's triple for this call.
    pub style: StyleUpdate,
}

impl<'a> PrintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(mut self, sink: &'a mut dyn Write) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn fore(mut self, name: impl Into<String>) -> Self {
        self.style.fore = Some(name.into());
        self
    }

    pub fn back(mut self, name: impl Into<String>) -> Self {
        self.style.back = Some(name.into());
        self
    }

    pub fn weight(mut self, name: impl Into<String>) -> Self {
        self.style.weight = Some(name.into());
        self
    }
}

/// Prints standard, info, warning and error messages with prefixes,
/// colour and wrapping.
///
/// # Example
///
/// ```
/// use termsg_core::{FixedProbe, FormatterConfig, MessageFormatter, Sinks, Theme};
///
/// let config = FormatterConfig::new().with_color(false).with_columns(40);
/// let mut fmt = MessageFormatter::from_parts(
///     config,
///     Sinks::new(Vec::<u8>::new(), Vec::<u8>::new()),
///     FixedProbe::default(),
///     Theme::ansi(),
/// )?;
/// fmt.prefix_reset("myprog");
/// fmt.info(&["Hello World"])?;
/// fmt.line(None, '-')?;
/// # Ok::<(), termsg_core::Error>(())
/// ```
pub struct MessageFormatter {
    columns: usize,
    rows: usize,
    color_enabled: bool,
    wrap_enabled: bool,
    prefixes: PrefixStack,
    resolver: ColorResolver,
    styles: KindStyles,
    sinks: Sinks,
    probe: Box<dyn TerminalProbe>,
}

impl MessageFormatter {
    /// Formatter on stdout/stderr using the process terminal.
    pub fn new(config: FormatterConfig) -> Result<Self> {
        Self::from_parts(config, Sinks::stdio(), SystemProbe, Theme::ansi())
    }

    /// Formatter with injected sinks, terminal probe and theme.
    pub fn from_parts(
        config: FormatterConfig,
        sinks: Sinks,
        probe: impl TerminalProbe + 'static,
        theme: Theme,
    ) -> Result<Self> {
        config.validate()?;

        let detected = match (config.columns, config.rows) {
            (Some(_), Some(_)) => None,
            _ => Some(probe.detect_size()),
        };
        let columns = match config.columns {
            Some(columns) => positive("columns", columns)?,
            None => detected.map_or(1, |(columns, _)| usize::from(columns).max(1)),
        };
        let rows = match config.rows {
            Some(rows) => positive("rows", rows)?,
            None => detected.map_or(1, |(_, rows)| usize::from(rows).max(1)),
        };
        let color_enabled = config
            .color
            .unwrap_or_else(|| probe.is_interactive(SinkTarget::Primary));

        let resolver = ColorResolver::new(theme);
        let mut styles = KindStyles::defaults(&resolver);
        for kind in MessageKind::ALL {
            styles
                .get_mut(kind)
                .apply(config.styles.get(kind), &resolver);
        }

        let prefixes = PrefixStack::with_segments(config.prefix_separator, &config.prefixes);

        tracing::debug!(
            columns,
            rows,
            color = color_enabled,
            wrap = config.wrap,
            prefix = %prefixes.render(),
            "message formatter created"
        );

        Ok(Self {
            columns,
            rows,
            color_enabled,
            wrap_enabled: config.wrap,
            prefixes,
            resolver,
            styles,
            sinks,
            probe: Box::new(probe),
        })
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // ------------------------------------------------------------------
    // Printing
    // ------------------------------------------------------------------

    /// Standard message on the primary sink, no kind tag.
    pub fn msg<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.print(MessageKind::Standard, args, PrintOptions::default())
    }

    pub fn msg_with<S: AsRef<str>>(&mut self, args: &[S], options: PrintOptions<'_>) -> Result<()> {
        self.print(MessageKind::Standard, args, options)
    }

    /// Info message on the primary sink, tagged `info`.
    pub fn info<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.print(MessageKind::Info, args, PrintOptions::default())
    }

    pub fn info_with<S: AsRef<str>>(&mut self, args: &[S], options: PrintOptions<'_>) -> Result<()> {
        self.print(MessageKind::Info, args, options)
    }

    /// Warning on the secondary sink, tagged `warn`.
    pub fn warn<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.print(MessageKind::Warn, args, PrintOptions::default())
    }

    pub fn warn_with<S: AsRef<str>>(&mut self, args: &[S], options: PrintOptions<'_>) -> Result<()> {
        self.print(MessageKind::Warn, args, options)
    }

    /// Error on the secondary sink, tagged `error`.
    pub fn error<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.print(MessageKind::Error, args, PrintOptions::default())
    }

    pub fn error_with<S: AsRef<str>>(&mut self, args: &[S], options: PrintOptions<'_>) -> Result<()> {
        self.print(MessageKind::Error, args, options)
    }

    /// Print a rule of `ch`.
    ///
    /// The rule spans `width` (default: `columns`) less the active prefix
    /// and its separator, floored at zero.
    pub fn line(&mut self, width: Option<usize>, ch: char) -> Result<()> {
        self.line_with(width, ch, PrintOptions::default())
    }

    pub fn line_with(
        &mut self,
        width: Option<usize>,
        ch: char,
        options: PrintOptions<'_>,
    ) -> Result<()> {
        let prefix_width = match options.prefix {
            Some(prefix) => compose_line_prefix(prefix, None, self.prefixes.separator()).width(),
            None => self.prefixes.rendered_width(),
        };
        let width = default_rule_width(width.unwrap_or(self.columns), prefix_width);
        tracing::trace!(width, "printing rule");
        self.print(MessageKind::Standard, &[rule_text(ch, width)], options)
    }

    /// Render and write one call.
    ///
    /// The complete output (style start, one block per argument, reset) is
    /// built first and written with a single `write_all`.
    pub fn print<S: AsRef<str>>(
        &mut self,
        kind: MessageKind,
        args: &[S],
        options: PrintOptions<'_>,
    ) -> Result<()> {
        let PrintOptions {
            sink,
            wrap,
            prefix,
            style,
        } = options;

        let mut triple = self.styles.get(kind).clone();
        triple.apply(&style, &self.resolver);

        let rendered = match prefix {
            Some(prefix) => prefix.trim().to_string(),
            None => self.prefixes.render(),
        };
        let line_prefix = compose_line_prefix(&rendered, kind.tag(), self.prefixes.separator());
        let renderer = LineRenderer::new(
            line_prefix,
            effective_width(self.columns, self.wrap_enabled, wrap),
        );

        let start = triple.start_sequence();
        let framing = self
            .color_enabled
            .then_some((start.as_str(), self.resolver.reset()));
        let output = renderer.render(args, framing);

        match sink {
            Some(sink) => write_out(sink, &output),
            None => write_out(self.sinks.get_mut(kind.default_target()), &output),
        }
    }

    // ------------------------------------------------------------------
    // Terminal size, colour and wrapping
    // ------------------------------------------------------------------

    /// Set the wrap width. Non-positive values are rejected.
    pub fn set_columns(&mut self, columns: i64) -> Result<usize> {
        self.columns = positive("columns", columns)?;
        tracing::debug!(columns = self.columns, "columns set");
        Ok(self.columns)
    }

    /// Set the terminal height. Non-positive values are rejected.
    pub fn set_rows(&mut self, rows: i64) -> Result<usize> {
        self.rows = positive("rows", rows)?;
        tracing::debug!(rows = self.rows, "rows set");
        Ok(self.rows)
    }

    /// Re-query the terminal probe for its size.
    pub fn refresh_terminal_size(&mut self) -> (usize, usize) {
        let (columns, rows) = self.probe.detect_size();
        self.columns = usize::from(columns).max(1);
        self.rows = usize::from(rows).max(1);
        tracing::debug!(columns = self.columns, rows = self.rows, "terminal size refreshed");
        (self.columns, self.rows)
    }

    /// Turn colour on or off; `None` asks the probe whether the primary
    /// sink is interactive.
    ///
    /// Turning colour on writes the reset token to the primary sink so
    /// that output starts from a clean state.
    pub fn enable_color(&mut self, enable: Option<bool>) -> Result<bool> {
        let enabled =
            enable.unwrap_or_else(|| self.probe.is_interactive(SinkTarget::Primary));
        if enabled {
            let reset = self.resolver.reset().to_string();
            write_out(self.sinks.get_mut(SinkTarget::Primary), &reset)?;
        }
        self.color_enabled = enabled;
        tracing::debug!(color = enabled, "colour output toggled");
        Ok(enabled)
    }

    /// Turn wrapping on or off; `None` only reports the current state.
    pub fn enable_wrap(&mut self, enable: Option<bool>) -> bool {
        if let Some(enable) = enable {
            self.wrap_enabled = enable;
            tracing::debug!(wrap = enable, "wrapping toggled");
        }
        self.wrap_enabled
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn wrap_enabled(&self) -> bool {
        self.wrap_enabled
    }

    // ------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------

    /// Resolve and store the provided fields of `update` for `kind`.
    pub fn set_styles(&mut self, kind: MessageKind, update: &StyleUpdate) {
        self.styles.get_mut(kind).apply(update, &self.resolver);
        tracing::debug!(kind = %kind, ?update, "styles updated");
    }

    /// Like [`set_styles`](Self::set_styles) from `(field, name)` pairs.
    ///
    /// Fields are `fore`, `back`, `weight` (or `style`). An unknown field
    /// fails the call and leaves every triple unchanged.
    pub fn set_styles_from_pairs<I, K, V>(&mut self, kind: MessageKind, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let update = StyleUpdate::from_pairs(pairs)?;
        self.set_styles(kind, &update);
        Ok(())
    }

    /// Set styles across kinds from `<kind>_<axis>` keys, e.g.
    /// `info_fore`, `warn_back`, `error_style`.
    ///
    /// All keys are checked before anything is stored.
    pub fn set_colors<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parsed = pairs
            .into_iter()
            .map(|(key, value)| {
                let (kind, axis) = parse_style_key(key.as_ref())?;
                Ok((kind, axis, value.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut updates = std::collections::HashMap::<MessageKind, StyleUpdate>::new();
        for (kind, axis, value) in parsed {
            updates.entry(kind).or_default().set(axis, value);
        }
        for kind in MessageKind::ALL {
            if let Some(update) = updates.get(&kind) {
                self.set_styles(kind, update);
            }
        }
        Ok(())
    }

    /// The stored triple for `kind`.
    pub fn styles(&self, kind: MessageKind) -> &StyleTriple {
        self.styles.get(kind)
    }

    /// Resolve a name the way style setters do.
    pub fn resolve(&self, axis: Axis, name: &str) -> String {
        self.resolver.resolve(axis, name)
    }

    // ------------------------------------------------------------------
    // Prefixes
    // ------------------------------------------------------------------

    /// Replace all prefixes with `prefix`.
    pub fn prefix_reset(&mut self, prefix: &str) -> &[String] {
        self.prefixes.reset(prefix)
    }

    /// Add a nested prefix.
    pub fn prefix_push(&mut self, segment: &str) -> &[String] {
        self.prefixes.push(segment)
    }

    /// Drop the innermost prefix, if any.
    pub fn prefix_pop(&mut self) -> &[String] {
        self.prefixes.pop()
    }

    pub fn set_prefix_separator(&mut self, separator: impl Into<String>) {
        self.prefixes.set_separator(separator);
    }

    pub fn prefixes(&self) -> &[String] {
        self.prefixes.segments()
    }

    /// The rendered prefix stack, without trailing separator.
    pub fn prefix(&self) -> String {
        self.prefixes.render()
    }

    pub fn prefix_separator(&self) -> &str {
        self.prefixes.separator()
    }
}

impl std::fmt::Debug for MessageFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFormatter")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("color_enabled", &self.color_enabled)
            .field("wrap_enabled", &self.wrap_enabled)
            .field("prefixes", &self.prefixes)
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

fn write_out<W: Write + ?Sized>(sink: &mut W, text: &str) -> Result<()> {
    sink.write_all(text.as_bytes())?;
    sink.flush().map_err(Error::from)
}
