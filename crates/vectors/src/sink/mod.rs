//! Result sinks.
//!
//! Programs publish every computed value through the [`ResultSink`] capability
//! instead of touching fixed addresses or printing directly. The backend is
//! chosen at runtime:
//! - [`DiagnosticSink`]: Human-readable lines on any `io::Write`.
//! - [`MmioSink`]: Little-endian words and bytes on a device bus, completion
//!   byte at its own address.
//! - [`RecordingSink`]: Keeps everything in memory for inspection.

/// Text backend.
pub mod diagnostic;

/// Memory-mapped backend.
pub mod mmio;

/// In-memory backend.
pub mod recording;

pub use diagnostic::DiagnosticSink;
pub use mmio::{MemoryImage, MmioSink};
pub use recording::RecordingSink;

use crate::common::error::SinkError;
use crate::soc::CompletionFlag;

/// Where computed values become externally observable.
///
/// Indices are positions in the program's output layout, not addresses; a
/// backend maps them to wherever its observer looks.
pub trait ResultSink {
    /// Publishes a 32-bit result at word position `index`.
    ///
    /// # Errors
    ///
    /// Backend-specific; see [`SinkError`].
    fn write_word(&mut self, index: usize, value: u32) -> Result<(), SinkError>;

    /// Publishes an 8-bit value at byte position `index`.
    ///
    /// # Errors
    ///
    /// Backend-specific; see [`SinkError`].
    fn write_byte(&mut self, index: usize, value: u8) -> Result<(), SinkError>;

    /// Raises the completion signal. Must be the last call on the sink.
    ///
    /// # Errors
    ///
    /// [`SinkError::AlreadySignalled`] on a second call.
    fn signal_done(&mut self) -> Result<(), SinkError>;

    /// Attaches a human-readable line to the output. Ignored by default.
    ///
    /// # Errors
    ///
    /// Backend-specific; see [`SinkError`].
    fn describe(&mut self, _line: &str) -> Result<(), SinkError> {
        Ok(())
    }

    /// Handle to this sink's completion flag.
    fn completion(&self) -> CompletionFlag;
}
