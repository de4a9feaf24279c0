//! RV32M reference test-vector library.
//!
//! This crate computes architecturally exact results for the RISC-V "M"
//! extension and exposes them to an external implementation under test:
//! 1. **ALU:** Reference semantics for MUL/MULH/MULHSU/MULHU/DIV/DIVU/REM/REMU.
//! 2. **Vectors:** The curated test-case catalog, checker, sequence table and factorial.
//! 3. **ISA:** RV32M opcode constants and R-type encoding of each case.
//! 4. **Sinks:** Diagnostic text and memory-mapped backends behind one `ResultSink` trait.
//! 5. **SoC:** Device bus, output memory window and the completion-flag device.
//! 6. **Simulation:** Test programs, the runner that raises completion last, and a monitor.

/// Reference arithmetic for the M extension.
pub mod alu;
/// Common types (errors, constants).
pub mod common;
/// Configuration (defaults, output mode, memory maps).
pub mod config;
/// RV32M opcode constants, operation kinds and instruction encoding.
pub mod isa;
/// Test programs that emit results into a sink.
pub mod programs;
/// Runner and completion monitor.
pub mod sim;
/// Result sinks (diagnostic, memory-mapped, recording).
pub mod sink;
/// Device bus, memory window and completion-flag device.
pub mod soc;
/// Test-case catalog, checker, sequence table and factorial.
pub mod vectors;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Crate-level error and result alias.
pub use crate::common::error::{Error, Result};
/// Operation kind for the eight RV32M instructions.
pub use crate::isa::MulDivOp;
/// Capability through which programs publish their results.
pub use crate::sink::ResultSink;
/// One curated operand pair with its expected result.
pub use crate::vectors::TestCase;
