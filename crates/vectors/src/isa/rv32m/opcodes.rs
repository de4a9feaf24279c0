//! RISC-V Multiply/Divide Extension (M) Opcodes.
//!
//! The M extension shares the `OP` major opcode with base integer register
//! arithmetic. It is distinguished by the `funct7` field having the value 1.

/// Major opcode for register-register integer operations.
pub const OP: u32 = 0b0110011;

/// M-Extension selector in funct7 field.
pub const M_EXTENSION: u32 = 0b0000001;
