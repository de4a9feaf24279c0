//! Reference Arithmetic Logic Unit for the M extension.
//!
//! - [`arithmetic`]: Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu, factorial.
//!
//! [`Alu`] is the in-process reference implementation; it is also an
//! [`Implementation`] so the checker can be pointed at it directly.

/// Multiply/divide operations.
pub mod arithmetic;

use crate::isa::MulDivOp;
use crate::vectors::checker::Implementation;

pub use arithmetic::factorial;

/// Reference ALU for RV32M operations.
///
/// # Examples
///
/// ```
/// use rvm_vectors::alu::Alu;
/// use rvm_vectors::MulDivOp;
///
/// // Signed divide by zero yields -1.
/// assert_eq!(Alu::execute(MulDivOp::Div, 10, 0), u32::MAX);
///
/// // Remainder by zero returns the dividend.
/// assert_eq!(Alu::execute(MulDivOp::Remu, 10, 0), 10);
///
/// // High half of 0xFFFFFFFF * 0xFFFFFFFF.
/// assert_eq!(Alu::execute(MulDivOp::Mulhu, u32::MAX, u32::MAX), 0xFFFF_FFFE);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes `op` on the raw operand words.
    pub const fn execute(op: MulDivOp, a: u32, b: u32) -> u32 {
        arithmetic::execute(op, a, b)
    }
}

impl Implementation for Alu {
    fn execute(&mut self, op: MulDivOp, a: u32, b: u32) -> u32 {
        arithmetic::execute(op, a, b)
    }
}
