//! Hierarchical message prefixes.
//!
//! A [`PrefixStack`] holds the scope labels that are prepended to every
//! message line, e.g. `"build"` then `"build: step 2"`.

use unicode_width::UnicodeWidthStr;

/// Separator placed between prefix segments and before the message text.
pub const DEFAULT_SEPARATOR: &str = ": ";

/// Ordered prefix segments joined by a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixStack {
    segments: Vec<String>,
    separator: String,
}

impl Default for PrefixStack {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl PrefixStack {
    /// Create an empty stack with the given separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            segments: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Create a stack from initial segments. Each segment is trimmed.
    pub fn with_segments<I, S>(separator: impl Into<String>, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stack = Self::new(separator);
        for segment in segments {
            stack.push(segment.as_ref());
        }
        stack
    }

    /// Replace the whole stack with a single trimmed segment.
    pub fn reset(&mut self, prefix: &str) -> &[String] {
        self.segments.clear();
        self.segments.push(prefix.trim().to_string());
        &self.segments
    }

    /// Append a trimmed segment.
    pub fn push(&mut self, segment: &str) -> &[String] {
        self.segments.push(segment.trim().to_string());
        &self.segments
    }

    /// Remove the last segment. Popping an empty stack does nothing.
    pub fn pop(&mut self) -> &[String] {
        self.segments.pop();
        &self.segments
    }

    /// The joined prefix, or an empty string.
    pub fn render(&self) -> String {
        self.segments.join(&self.separator).trim().to_string()
    }

    /// Display width of the rendered prefix plus its trailing separator.
    ///
    /// Zero when the rendered prefix is empty.
    pub fn rendered_width(&self) -> usize {
        let rendered = self.render();
        if rendered.is_empty() {
            0
        } else {
            rendered.width() + self.separator.width()
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
