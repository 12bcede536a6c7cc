//! Wrap-aware line rendering.
//!
//! Every argument of a print call becomes one block of lines. Each line
//! starts with the composed line prefix (`"proc: info: "`), continuation
//! lines included, so wrapped text stays aligned under the prefix. The
//! whole call is framed by the style start sequence and the reset token
//! when colour is on.

use std::sync::LazyLock;

use regex::Regex;
use textwrap::{Options, WordSeparator, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

/// Wrap width used when wrapping is off. Wide enough that nothing wraps.
pub const UNBOUNDED_WIDTH: usize = u32::MAX as usize;

/// Tab stop used when expanding tabs.
const TAB_SIZE: usize = 8;

/// Lower-case letter, sentence punctuation, optional closing quote, spaces.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-z][.!?]["']?) +"#).expect("valid sentence-end regex"));

/// Wrap width for a call: `columns` unless wrapping is off for the call.
///
/// A per-call override takes precedence over the global flag.
pub fn effective_width(columns: usize, wrap_enabled: bool, wrap_override: Option<bool>) -> usize {
    if wrap_override.unwrap_or(wrap_enabled) {
        columns
    } else {
        UNBOUNDED_WIDTH
    }
}

/// Compose the string printed in front of every line.
///
/// `tag` is appended as a further segment; the result ends with the
/// separator unless it is empty.
pub fn compose_line_prefix(rendered: &str, tag: Option<&str>, separator: &str) -> String {
    let mut prefix = rendered.trim().to_string();
    if let Some(tag) = tag {
        if !prefix.is_empty() {
            prefix.push_str(separator);
        }
        prefix.push_str(tag);
    }
    if !prefix.is_empty() {
        prefix.push_str(separator);
    }
    prefix
}

/// Default rule width: columns minus the active prefix, floored at zero.
pub fn default_rule_width(columns: usize, prefix_width: usize) -> usize {
    columns.saturating_sub(prefix_width)
}

/// Text of a rule line: `ch` repeated `width` times.
pub fn rule_text(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Expand tabs and turn every other whitespace character into a space.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if c.is_whitespace() => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Separate sentences by exactly two spaces.
fn fix_sentence_endings(text: &str) -> String {
    SENTENCE_END.replace_all(text, "$1  ").into_owned()
}

/// Renders print-call arguments into framed, prefixed, wrapped lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRenderer {
    line_prefix: String,
    width: usize,
}

impl LineRenderer {
    pub fn new(line_prefix: impl Into<String>, width: usize) -> Self {
        Self {
            line_prefix: line_prefix.into(),
            width,
        }
    }

    pub fn line_prefix(&self) -> &str {
        &self.line_prefix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Wrapped lines for one argument, without line terminators.
    ///
    /// Whitespace-only text yields a single empty line with no prefix.
    pub fn wrap_lines(&self, text: &str) -> Vec<String> {
        let text = fix_sentence_endings(&normalize_whitespace(text));
        if text.trim().is_empty() {
            return vec![String::new()];
        }

        // At least one column of text per line, even under a wide prefix.
        let width = self.width.max(self.line_prefix.width() + 1);
        let options = Options::new(width)
            .initial_indent(&self.line_prefix)
            .subsequent_indent(&self.line_prefix)
            .word_separator(WordSeparator::AsciiSpace)
            .wrap_algorithm(WrapAlgorithm::FirstFit)
            .break_words(true);

        textwrap::wrap(&text, options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// One block: the wrapped lines of `text`, each ending in `\n`.
    pub fn render_block(&self, text: &str) -> String {
        let mut block = String::new();
        for line in self.wrap_lines(text) {
            block.push_str(&line);
            block.push('\n');
        }
        block
    }

    /// The full output of a call.
    ///
    /// `framing` is the `(start, reset)` pair written once around all
    /// blocks when colour is enabled.
    pub fn render<S: AsRef<str>>(&self, args: &[S], framing: Option<(&str, &str)>) -> String {
        let mut out = String::new();
        if let Some((start, _)) = framing {
            out.push_str(start);
        }
        for arg in args {
            out.push_str(&self.render_block(arg.as_ref()));
        }
        if let Some((_, reset)) = framing {
            out.push_str(reset);
        }
        out
    }
}
