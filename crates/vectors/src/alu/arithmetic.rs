//! ALU multiply/divide operations.
//!
//! Implements the full RV32M multiply/divide family on 32-bit words.
//! Operands arrive as raw `u32` bit patterns and are reinterpreted as signed
//! or unsigned per operation. High-half multiplies widen to 64 bits before
//! shifting so no sign information is discarded.
//!
//! Division and remainder by zero never reach a native `/` or `%`: the
//! architecturally defined results are returned explicitly.

use crate::common::constants::XLEN;
use crate::isa::MulDivOp;

/// Executes an RV32M operation.
///
/// # Arguments
///
/// * `op` - The operation to perform.
/// * `a`  - First operand (rs1) as a raw 32-bit word.
/// * `b`  - Second operand (rs2) as a raw 32-bit word.
///
/// # Returns
///
/// The 32-bit result as written to rd.
pub const fn execute(op: MulDivOp, a: u32, b: u32) -> u32 {
    match op {
        MulDivOp::Mul => (a as i32).wrapping_mul(b as i32) as u32,
        MulDivOp::Mulh => ((a as i32 as i64 * b as i32 as i64) >> XLEN) as u32,
        // Operand a is sign-extended, b zero-extended. The product of a
        // 32-bit signed and 32-bit unsigned value always fits in i64.
        MulDivOp::Mulhsu => ((a as i32 as i64 * b as i64) >> XLEN) as u32,
        MulDivOp::Mulhu => ((a as u64 * b as u64) >> XLEN) as u32,
        MulDivOp::Div => {
            if b == 0 {
                u32::MAX
            } else {
                // i32::MIN / -1 overflows; RISC-V defines the result as i32::MIN.
                (a as i32).wrapping_div(b as i32) as u32
            }
        }
        MulDivOp::Divu => {
            if b == 0 {
                u32::MAX
            } else {
                a / b
            }
        }
        MulDivOp::Rem => {
            if b == 0 {
                a
            } else {
                // i32::MIN % -1 is defined as 0.
                (a as i32).wrapping_rem(b as i32) as u32
            }
        }
        MulDivOp::Remu => {
            if b == 0 {
                a
            } else {
                a % b
            }
        }
    }
}

/// Reference factorial using wrapping 32-bit MUL.
///
/// `factorial(0)` is 1. Inputs of 13 and above overflow and wrap modulo 2^32.
pub const fn factorial(n: u32) -> u32 {
    let mut result: u32 = 1;
    let mut i: u32 = 1;
    while i <= n {
        result = execute(MulDivOp::Mul, result, i);
        // From 34! on there are at least 32 factors of two; the product stays 0.
        if result == 0 || i == u32::MAX {
            break;
        }
        i += 1;
    }
    result
}
