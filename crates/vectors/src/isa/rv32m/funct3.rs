//! funct3 codes of the eight RV32M operations.
//!
//! [`crate::isa::MulDivOp::funct3`] maps each catalog operation to one of
//! these when a test case is encoded as an instruction word for an external
//! simulator; the word always carries `opcode == OP` and `funct7 == 1`.

/// Multiply (signed * signed) -> lower 32 bits.
pub const MUL: u32 = 0b000;

/// Multiply High (signed * signed) -> upper 32 bits.
pub const MULH: u32 = 0b001;

/// Multiply High Signed/Unsigned (signed * unsigned) -> upper 32 bits.
pub const MULHSU: u32 = 0b010;

/// Multiply High Unsigned (unsigned * unsigned) -> upper 32 bits.
pub const MULHU: u32 = 0b011;

/// Divide (signed).
pub const DIV: u32 = 0b100;

/// Divide Unsigned.
pub const DIVU: u32 = 0b101;

/// Remainder (signed).
pub const REM: u32 = 0b110;

/// Remainder Unsigned.
pub const REMU: u32 = 0b111;
