//! Output destinations.

use std::io::{self, Write};

/// Which of the two configured sinks a message goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkTarget {
    /// Normal output (stdout by default)
    Primary,
    /// Diagnostic output (stderr by default)
    Secondary,
}

/// The primary and secondary writers owned by a formatter.
pub struct Sinks {
    primary: Box<dyn Write + Send>,
    secondary: Box<dyn Write + Send>,
}

impl Sinks {
    pub fn new(primary: impl Write + Send + 'static, secondary: impl Write + Send + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: Box::new(secondary),
        }
    }

    /// Process stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    pub fn get_mut(&mut self, target: SinkTarget) -> &mut (dyn Write + Send) {
        match target {
            SinkTarget::Primary => self.primary.as_mut(),
            SinkTarget::Secondary => self.secondary.as_mut(),
        }
    }
}

impl std::fmt::Debug for Sinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sinks").finish_non_exhaustive()
    }
}
