//! Common types shared across the crate.
//!
//! 1. **Constants:** Word widths, completion value and table limits.
//! 2. **Error Handling:** Sink, configuration and monitor errors.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types.
pub mod error;

pub use error::{ConfigError, Error, Result, SinkError};
