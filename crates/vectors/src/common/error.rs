//! Error definitions.
//!
//! The arithmetic itself is total and has no error paths. Errors only arise at
//! the surfaces around it:
//! 1. **Sinks:** Writes that miss every device, overflowing indices, repeated
//!    completion and diagnostic stream failures.
//! 2. **Configuration:** Unreadable or malformed files and inconsistent memory maps.
//! 3. **Monitoring:** Completion flags that never rise within the poll budget.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while publishing a value through a result sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// No device on the bus claims the target address.
    #[error("address {addr:#010x} is not mapped to any device")]
    Unmapped {
        /// Physical address of the rejected access.
        addr: u64,
    },

    /// The output index does not fit in the address space above the base.
    #[error("output index {index} overflows the address space above base {base:#010x}")]
    AddressOverflow {
        /// Base address of the output window.
        base: u64,
        /// Index that could not be converted into an address.
        index: usize,
    },

    /// The completion write reached the bus but the flag did not rise.
    #[error("completion write to {addr:#010x} did not raise the completion flag")]
    CompletionLost {
        /// Address the completion value was written to.
        addr: u64,
    },

    /// The completion signal was raised a second time.
    #[error("completion flag has already been signalled")]
    AlreadySignalled,

    /// The diagnostic text stream rejected a write.
    #[error("diagnostic stream write failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::Config`].
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The sequence table is longer than an 8-bit index can address.
    #[error("sequence length {len} exceeds the maximum of {max}")]
    SequenceTooLong {
        /// Requested length.
        len: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// The completion flag address falls inside the program's output window.
    #[error("{program}: completion flag {done:#010x} lies inside output window {base:#010x}..{end:#010x}")]
    FlagInsideWindow {
        /// Program whose memory map is inconsistent.
        program: &'static str,
        /// Completion flag address.
        done: u64,
        /// First byte of the output window.
        base: u64,
        /// One past the last byte of the output window.
        end: u64,
    },

    /// The output window cannot hold everything the program writes.
    #[error("{program}: output window of {window} bytes cannot hold {needed} bytes")]
    WindowTooSmall {
        /// Program whose memory map is inconsistent.
        program: &'static str,
        /// Configured window size in bytes.
        window: u64,
        /// Bytes the program writes.
        needed: u64,
    },

    /// The output window is larger than a host buffer should be.
    #[error("{program}: output window of {window} bytes exceeds the maximum of {max}")]
    WindowTooLarge {
        /// Program whose memory map is inconsistent.
        program: &'static str,
        /// Configured window size in bytes.
        window: u64,
        /// Largest accepted window.
        max: u64,
    },

    /// The output window wraps past the end of the address space.
    #[error("{program}: output window at {base:#010x} of {window} bytes wraps the address space")]
    WindowWraps {
        /// Program whose memory map is inconsistent.
        program: &'static str,
        /// First byte of the output window.
        base: u64,
        /// Configured window size in bytes.
        window: u64,
    },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// A result sink rejected a write.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// Configuration could not be loaded or is inconsistent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The completion flag did not rise within the monitor's budget.
    #[error("completion flag not observed after {polls} polls")]
    Timeout {
        /// Number of polls performed.
        polls: u64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
