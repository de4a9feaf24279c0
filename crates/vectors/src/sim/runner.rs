//! Runner: executes a program against the sink selected at runtime.
//!
//! The runner owns the ordering guarantee: the completion signal is raised
//! only after the program has published every value, and exactly once.

use std::io::Write;
use std::thread::{self, JoinHandle};

use serde::Serialize;
use tracing::info;

use crate::common::error::{Result, SinkError};
use crate::config::{Config, OutputMode};
use crate::programs::{Program, ProgramKind, RunReport};
use crate::sink::{DiagnosticSink, MemoryImage, MmioSink, ResultSink};

use super::monitor::Monitor;

/// What a run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// What the program published.
    pub report: RunReport,
    /// Final output window, in memory-mapped mode.
    pub image: Option<MemoryImage>,
}

/// Runs `program` into `sink`, then raises the completion signal.
///
/// # Errors
///
/// [`SinkError::AlreadySignalled`] if the sink's flag is already set before
/// the run, or any error from the program or the sink.
pub fn execute(program: &dyn Program, sink: &mut dyn ResultSink) -> Result<RunReport> {
    let flag = sink.completion();
    if flag.is_done() {
        return Err(SinkError::AlreadySignalled.into());
    }
    let mut report = program.emit(sink)?;
    sink.signal_done()?;
    report.done = flag.value();
    info!(program = program.name(), done = report.done, "run complete");
    Ok(report)
}

/// Validated configuration plus the logic to pick a sink for it.
#[derive(Debug, Clone)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Validates `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Any [`crate::common::ConfigError`] from validation.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs `kind` with the configured output mode.
    ///
    /// Diagnostic lines go to `out`; in memory-mapped mode `out` is unused and
    /// the final window is returned in the outcome.
    ///
    /// # Errors
    ///
    /// Any sink error.
    pub fn run<W: Write>(&self, kind: ProgramKind, out: W) -> Result<RunOutcome> {
        let program = kind.build(&self.config);
        match self.config.general.output {
            OutputMode::Diagnostic => {
                let mut sink = DiagnosticSink::new(out);
                let report = execute(program.as_ref(), &mut sink)?;
                Ok(RunOutcome {
                    report,
                    image: None,
                })
            }
            OutputMode::MemoryMapped => {
                let mut sink = MmioSink::new(program.memory_map());
                let report = execute(program.as_ref(), &mut sink)?;
                let image = sink.image()?;
                Ok(RunOutcome {
                    report,
                    image: Some(image),
                })
            }
        }
    }

    /// Runs `kind` in memory-mapped mode on a worker thread.
    ///
    /// The returned [`Monitor`] observes the completion flag while the
    /// program runs, the way an external test bench polls the flag address.
    pub fn spawn_memory_mapped(&self, kind: ProgramKind) -> (Monitor, JoinHandle<Result<RunOutcome>>) {
        let program = kind.build(&self.config);
        let mut sink = MmioSink::new(program.memory_map());
        let monitor = Monitor::new(sink.completion());
        let handle = thread::spawn(move || {
            let report = execute(program.as_ref(), &mut sink)?;
            let image = sink.image()?;
            Ok(RunOutcome {
                report,
                image: Some(image),
            })
        });
        (monitor, handle)
    }
}
