//! In-memory backend.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::error::SinkError;
use crate::soc::CompletionFlag;

use super::ResultSink;

/// Keeps every published value, keyed by index, plus the described lines.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RecordingSink {
    /// Words by index.
    pub words: BTreeMap<usize, u32>,
    /// Bytes by index.
    pub bytes: BTreeMap<usize, u8>,
    /// Lines passed to `describe`, in order.
    pub lines: Vec<String>,
    #[serde(skip)]
    flag: CompletionFlag,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Words in index order, without gaps.
    pub fn word_values(&self) -> Vec<u32> {
        self.words.values().copied().collect()
    }

    /// Bytes in index order, without gaps.
    pub fn byte_values(&self) -> Vec<u8> {
        self.bytes.values().copied().collect()
    }
}

impl ResultSink for RecordingSink {
    fn write_word(&mut self, index: usize, value: u32) -> Result<(), SinkError> {
        let _ = self.words.insert(index, value);
        Ok(())
    }

    fn write_byte(&mut self, index: usize, value: u8) -> Result<(), SinkError> {
        let _ = self.bytes.insert(index, value);
        Ok(())
    }

    fn signal_done(&mut self) -> Result<(), SinkError> {
        if self.flag.raise() {
            Ok(())
        } else {
            Err(SinkError::AlreadySignalled)
        }
    }

    fn describe(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn completion(&self) -> CompletionFlag {
        self.flag.clone()
    }
}
