//! Running programs and observing their completion.
//!
//! - [`runner`]: Selects the sink from configuration and raises completion last.
//! - [`monitor`]: Polls the completion flag and verifies the output window.

/// Completion monitor.
pub mod monitor;

/// Program runner.
pub mod runner;

pub use monitor::{ImageMismatch, Monitor, PollBudget};
pub use runner::{RunOutcome, Runner, execute};
