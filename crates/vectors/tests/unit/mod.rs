//! # Unit Components
//!
//! Fine-grained tests for each library module.



/// Opcode constants and instruction encoding.
pub mod isa;

/// Programs, runner and completion monitor.
pub mod sim;
