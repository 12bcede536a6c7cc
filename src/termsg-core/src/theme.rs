//! Symbolic colour names and their ANSI escape sequences.
//!
//! A [`Theme`] holds one lookup table per [`Axis`]. The [`ColorResolver`]
//! turns a caller-supplied name into a token: known names (compared
//! case-insensitively) map to their escape sequence, anything else is
//! passed through untouched so that callers can hand over raw escape codes.

use std::collections::HashMap;
use std::fmt;

/// ANSI escape codes used by the built-in theme.
pub mod codes {
    pub const RESET_ALL: &str = "\x1b[0m";
    pub const BRIGHT: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const NORMAL: &str = "\x1b[22m";
}

const COLOR_NAMES: [&str; 8] = [
    "BLACK", "RED", "GREEN", "YELLOW", "BLUE", "MAGENTA", "CYAN", "WHITE",
];

/// The three style axes of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Foreground colour
    Fore,
    /// Background colour
    Back,
    /// Intensity (bright, dim, normal)
    Weight,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Fore, Axis::Back, Axis::Weight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Fore => "fore",
            Axis::Back => "back",
            Axis::Weight => "weight",
        }
    }

    /// Parse an axis key. `style` is accepted as an alias for `weight`.
    pub fn from_key(key: &str) -> Option<Axis> {
        match key {
            "fore" => Some(Axis::Fore),
            "back" => Some(Axis::Back),
            "weight" | "style" => Some(Axis::Weight),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name to escape-sequence tables for each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    fore: HashMap<String, String>,
    back: HashMap<String, String>,
    weight: HashMap<String, String>,
    reset: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Theme {
    /// A theme with no names and the given reset token.
    pub fn empty(reset: impl Into<String>) -> Self {
        Self {
            fore: HashMap::new(),
            back: HashMap::new(),
            weight: HashMap::new(),
            reset: reset.into(),
        }
    }

    /// The 16-colour ANSI palette.
    ///
    /// Colour names: BLACK RED GREEN YELLOW BLUE MAGENTA CYAN WHITE, their
    /// `LIGHT*_EX` variants and RESET. Weights: BRIGHT DIM NORMAL RESET_ALL.
    pub fn ansi() -> Self {
        let mut theme = Self::empty(codes::RESET_ALL);

        for (offset, name) in COLOR_NAMES.iter().enumerate() {
            let light = format!("LIGHT{name}_EX");
            theme.insert(Axis::Fore, name, format!("\x1b[{}m", 30 + offset));
            theme.insert(Axis::Fore, &light, format!("\x1b[{}m", 90 + offset));
            theme.insert(Axis::Back, name, format!("\x1b[{}m", 40 + offset));
            theme.insert(Axis::Back, &light, format!("\x1b[{}m", 100 + offset));
        }
        theme.insert(Axis::Fore, "RESET", "\x1b[39m");
        theme.insert(Axis::Back, "RESET", "\x1b[49m");

        theme.insert(Axis::Weight, "BRIGHT", codes::BRIGHT);
        theme.insert(Axis::Weight, "DIM", codes::DIM);
        theme.insert(Axis::Weight, "NORMAL", codes::NORMAL);
        theme.insert(Axis::Weight, "RESET_ALL", codes::RESET_ALL);

        theme
    }

    /// Register (or replace) a name on an axis. Names are stored upper-case.
    pub fn insert(&mut self, axis: Axis, name: &str, token: impl Into<String>) {
        self.table_mut(axis)
            .insert(name.to_uppercase(), token.into());
    }

    /// Look up an already upper-cased name.
    pub fn lookup(&self, axis: Axis, name: &str) -> Option<&str> {
        self.table(axis).get(name).map(String::as_str)
    }

    /// Token that ends a styled block.
    pub fn reset(&self) -> &str {
        &self.reset
    }

    /// Known names on an axis, sorted.
    pub fn names(&self, axis: Axis) -> Vec<&str> {
        let mut names: Vec<&str> = self.table(axis).keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn table(&self, axis: Axis) -> &HashMap<String, String> {
        match axis {
            Axis::Fore => &self.fore,
            Axis::Back => &self.back,
            Axis::Weight => &self.weight,
        }
    }

    fn table_mut(&mut self, axis: Axis) -> &mut HashMap<String, String> {
        match axis {
            Axis::Fore => &mut self.fore,
            Axis::Back => &mut self.back,
            Axis::Weight => &mut self.weight,
        }
    }
}

/// Resolves symbolic names against a [`Theme`], with pass-through fallback.
#[derive(Debug, Clone, Default)]
pub struct ColorResolver {
    theme: Theme,
}

impl ColorResolver {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Resolve `name` on `axis`.
    ///
    /// Unknown names are returned unchanged and treated as raw tokens.
    pub fn resolve(&self, axis: Axis, name: &str) -> String {
        match self.theme.lookup(axis, &name.to_uppercase()) {
            Some(token) => token.to_string(),
            None => {
                tracing::trace!(axis = %axis, name, "passing unknown style name through");
                name.to_string()
            }
        }
    }

    pub fn reset(&self) -> &str {
        self.theme.reset()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }
}
