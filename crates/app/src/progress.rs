//! Console progress output

use std::io::{self, Write};
use std::sync::Mutex;

/// Line-oriented writer shared by concurrently finishing tests.
///
/// The runner invokes progress callbacks without serializing them, so every
/// line is written and flushed under one lock.
#[derive(Debug)]
pub struct ProgressSink<W> {
    out: Mutex<W>,
}

impl<W: Write> ProgressSink<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Writes one line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the writer's error, or an error if a previous writer
    /// panicked while holding the lock.
    pub fn emit(&self, line: &str) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("progress output lock poisoned"))?;
        writeln!(out, "{line}")?;
        out.flush()
    }

    /// Like [`emit`](Self::emit), but logs a failure instead of returning it.
    pub fn emit_or_warn(&self, line: &str) {
        if let Err(error) = self.emit(line) {
            tracing::warn!(%error, "failed to write progress line");
        }
    }
}
