//! Test vectors and their checker.
//!
//! - [`case`]: One operand pair and its expected result.
//! - [`catalog`]: The curated list and the result accumulator.
//! - [`checker`]: Compares an implementation under test with the catalog.
//! - [`sequence`]: The 8-bit recurrence table.

/// Test-case type.
pub mod case;

/// Curated catalog.
pub mod catalog;

/// Implementation checker.
pub mod checker;

/// Recurrence table generator.
pub mod sequence;

pub use case::TestCase;
pub use catalog::{CATALOG, CATALOG_LEN, accumulate, catalog, wrapping_sum};
pub use checker::{CheckReport, Implementation, Mismatch, Observation, check, check_observed};
pub use sequence::{Seed, SequenceTable};
