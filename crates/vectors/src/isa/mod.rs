//! Instruction set definitions for the RV32M operations under test.
//!
//! 1. **Constants:** Major opcode, funct7 selector and funct3 codes.
//! 2. **Operations:** [`MulDivOp`] and the signedness of its operands.
//! 3. **Encoding:** R-type instruction words for feeding external simulators.

/// R-type instruction encoding.
pub mod instruction;

/// Operation kinds and signedness.
pub mod op;

/// RV32M constants.
pub mod rv32m;

pub use instruction::Instruction;
pub use op::{MulDivOp, Signedness, UnknownMnemonic};
