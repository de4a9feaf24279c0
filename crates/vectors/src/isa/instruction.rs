//! RV32M R-type instruction words.
//!
//! Layout (bit ranges, inclusive):
//!
//! ```text
//! 31..25  24..20  19..15  14..12  11..7  6..0
//! funct7  rs2     rs1     funct3  rd     opcode
//! ```
//!
//! For the M extension `opcode == OP` and `funct7 == M_EXTENSION`.

use std::fmt;

use serde::Serialize;

use super::MulDivOp;
use super::rv32m::opcodes::{M_EXTENSION, OP};

const REG_MASK: u32 = 0x1F;

/// An RV32M instruction to be encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Operation selected by funct3.
    pub op: MulDivOp,
    /// Destination register index.
    pub rd: u8,
    /// First source register index.
    pub rs1: u8,
    /// Second source register index.
    pub rs2: u8,
}

impl Instruction {
    /// Creates an instruction; register indices are truncated to 5 bits.
    pub const fn new(op: MulDivOp, rd: u8, rs1: u8, rs2: u8) -> Self {
        Self {
            op,
            rd: rd & REG_MASK as u8,
            rs1: rs1 & REG_MASK as u8,
            rs2: rs2 & REG_MASK as u8,
        }
    }

    /// Returns the 32-bit machine encoding.
    pub const fn encode(&self) -> u32 {
        (M_EXTENSION << 25)
            | ((self.rs2 as u32 & REG_MASK) << 20)
            | ((self.rs1 as u32 & REG_MASK) << 15)
            | (self.op.funct3() << 12)
            | ((self.rd as u32 & REG_MASK) << 7)
            | OP
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{}, x{}, x{}",
            self.op.mnemonic().to_ascii_lowercase(),
            self.rd,
            self.rs1,
            self.rs2
        )
    }
}
