//! RISC-V Multiply/Divide Extension (M), 32-bit subset.
//!
//! # Structure
//!
//! - `opcodes`: Major opcode and funct7 selector.
//! - `funct3`: Function codes identifying specific M-ops (MUL, DIV, etc.).

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Multiply/divide extension opcodes.
pub mod opcodes;
