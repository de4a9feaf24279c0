//! A single curated operand pair with its expected result.

use std::fmt;

use serde::Serialize;

use crate::alu::arithmetic;
use crate::isa::{Instruction, MulDivOp};

/// Registers used when a case is rendered as an instruction: `op x3, x1, x2`.
const RD: u8 = 3;
const RS1: u8 = 1;
const RS2: u8 = 2;

/// One row of the test-vector table.
///
/// Operands and result are stored as raw 32-bit words; their signedness is a
/// property of [`MulDivOp`]. The expected value is always computed by the
/// reference ALU; there is no constructor taking an expectation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TestCase {
    /// Operation kind.
    pub op: MulDivOp,
    /// Operand A (rs1).
    pub a: u32,
    /// Operand B (rs2).
    pub b: u32,
    /// Architecturally defined result.
    pub expected: u32,
}

impl TestCase {
    /// Evaluates `op` on `a` and `b` and records the result.
    pub const fn new(op: MulDivOp, a: u32, b: u32) -> Self {
        Self {
            op,
            a,
            b,
            expected: arithmetic::execute(op, a, b),
        }
    }

    /// Convenience constructor taking signed operands.
    pub const fn signed(op: MulDivOp, a: i32, b: i32) -> Self {
        Self::new(op, a as u32, b as u32)
    }

    /// Whether this case exercises the zero-divisor path.
    pub const fn is_zero_divisor(&self) -> bool {
        self.op.is_divide() && self.b == 0
    }

    /// Whether `observed` matches the expected result.
    pub const fn accepts(&self, observed: u32) -> bool {
        observed == self.expected
    }

    /// The instruction computing this case, `op x3, x1, x2`.
    pub const fn instruction(&self) -> Instruction {
        Instruction::new(self.op, RD, RS1, RS2)
    }
}

/// Human-readable line in the diagnostic format, e.g. `DIV: 10 / 0 = -1`.
impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.op.a_sign().render(self.a);
        let b = self.op.b_sign().render(self.b);
        let r = self.op.result_sign().render(self.expected);
        match self.op {
            MulDivOp::Mul => write!(f, "{}: low({a} * {b}) = {r}", self.op),
            MulDivOp::Mulh | MulDivOp::Mulhsu | MulDivOp::Mulhu => {
                write!(f, "{}: high({a} * {b}) = {r}", self.op)
            }
            MulDivOp::Div | MulDivOp::Divu => write!(f, "{}: {a} / {b} = {r}", self.op),
            MulDivOp::Rem | MulDivOp::Remu => write!(f, "{}: {a} % {b} = {r}", self.op),
        }
    }
}
