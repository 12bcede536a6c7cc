//! Formatter-level tests driven through in-memory sinks.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::{FixedProbe, FormatterConfig, MessageFormatter, Sinks, Theme};

mod style_tests;

/// Clonable in-memory sink; clones share one buffer.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub(crate) fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose writes always fail.
pub(crate) struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Formatter writing to two capture buffers.
pub(crate) struct Harness {
    pub fmt: MessageFormatter,
    pub primary: SharedBuffer,
    pub secondary: SharedBuffer,
}

impl Harness {
    pub(crate) fn new(config: FormatterConfig) -> Self {
        Self::with_probe(config, FixedProbe::new(80, 24, false))
    }

    pub(crate) fn with_probe(config: FormatterConfig, probe: FixedProbe) -> Self {
        let primary = SharedBuffer::default();
        let secondary = SharedBuffer::default();
        let fmt = MessageFormatter::from_parts(
            config,
            Sinks::new(primary.clone(), secondary.clone()),
            probe,
            Theme::ansi(),
        )
        .expect("valid config");
        Self {
            fmt,
            primary,
            secondary,
        }
    }

    /// Plain output (no colour), `columns` wide.
    pub(crate) fn plain(columns: i64) -> Self {
        Self::new(FormatterConfig::new().with_color(false).with_columns(columns))
    }
}
