//! Test programs.
//!
//! A program computes its values and publishes them through a
//! [`ResultSink`]. Programs never raise the completion signal themselves;
//! the runner does that after `emit` returns.
//!
//! - [`muldiv`]: Factorial, every catalog case and the accumulator, as words.
//! - [`sequence`]: The recurrence table, as bytes.

/// Multiply/divide program.
pub mod muldiv;

/// Sequence program.
pub mod sequence;

pub use muldiv::MulDivProgram;
pub use sequence::SequenceProgram;

use serde::Serialize;

use crate::common::error::SinkError;
use crate::config::{Config, MemoryMap};
use crate::sink::ResultSink;

/// A test program that publishes results through a sink.
pub trait Program {
    /// Short identifier (`"muldiv"`, `"sequence"`).
    fn name(&self) -> &'static str;

    /// Where this program's output lives in memory-mapped mode.
    fn memory_map(&self) -> MemoryMap;

    /// Computes and publishes every value.
    ///
    /// # Errors
    ///
    /// The first error returned by the sink.
    fn emit(&self, sink: &mut dyn ResultSink) -> Result<RunReport, SinkError>;
}

/// Which program to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramKind {
    /// [`MulDivProgram`].
    MulDiv,
    /// [`SequenceProgram`].
    Sequence,
}

impl ProgramKind {
    /// Builds the program from configuration.
    pub fn build(self, config: &Config) -> Box<dyn Program + Send> {
        match self {
            Self::MulDiv => Box::new(MulDivProgram::from_config(&config.muldiv)),
            Self::Sequence => Box::new(SequenceProgram::from_config(&config.sequence)),
        }
    }
}

/// Summary of what a program published.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Program name.
    pub program: &'static str,
    /// Words in index order.
    pub words: Vec<u32>,
    /// Bytes in index order.
    pub bytes: Vec<u8>,
    /// Factorial result, for the multiply/divide program.
    pub factorial: Option<u32>,
    /// Wrapping sum of all case results, for the multiply/divide program.
    pub accumulator: Option<u32>,
    /// Completion flag value observed after the run.
    pub done: u8,
}
