//! Diagnostic text backend.

use std::io::Write;

use tracing::debug;

use crate::common::constants::DONE_VALUE;
use crate::common::error::SinkError;
use crate::soc::CompletionFlag;

use super::ResultSink;

/// Writes one line per described value to a text stream.
///
/// Raw word and byte writes are not printed; programs describe each value
/// with a line of its own before publishing it.
#[derive(Debug)]
pub struct DiagnosticSink<W: Write> {
    out: W,
    flag: CompletionFlag,
    words: usize,
    bytes: usize,
}

impl<W: Write> DiagnosticSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            flag: CompletionFlag::new(),
            words: 0,
            bytes: 0,
        }
    }

    /// Number of words and bytes published so far.
    pub const fn counts(&self) -> (usize, usize) {
        (self.words, self.bytes)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for DiagnosticSink<W> {
    fn write_word(&mut self, index: usize, value: u32) -> Result<(), SinkError> {
        debug!(index, value, "word");
        self.words += 1;
        Ok(())
    }

    fn write_byte(&mut self, index: usize, value: u8) -> Result<(), SinkError> {
        debug!(index, value, "byte");
        self.bytes += 1;
        Ok(())
    }

    fn signal_done(&mut self) -> Result<(), SinkError> {
        if self.flag.is_done() {
            return Err(SinkError::AlreadySignalled);
        }
        writeln!(self.out, "Done: {DONE_VALUE}")?;
        self.out.flush()?;
        if self.flag.raise() {
            Ok(())
        } else {
            Err(SinkError::AlreadySignalled)
        }
    }

    fn describe(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn completion(&self) -> CompletionFlag {
        self.flag.clone()
    }
}
