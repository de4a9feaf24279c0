//! The curated test-vector catalog.
//!
//! Every operation has at least one maximal-magnitude pair; every divide and
//! remainder kind also has a zero-divisor pair, and the signed ones carry the
//! `i32::MIN / -1` overflow pair. Order here is the evaluation and output
//! order in every sink.

use crate::isa::MulDivOp;

use super::TestCase;

const MIN: i32 = i32::MIN;
const MAX: i32 = i32::MAX;

/// Number of curated cases.
pub const CATALOG_LEN: usize = 18;

/// The catalog, in evaluation order.
pub static CATALOG: [TestCase; CATALOG_LEN] = [
    TestCase::signed(MulDivOp::Mul, MIN, -2),
    TestCase::signed(MulDivOp::Mul, MAX, MAX),
    TestCase::signed(MulDivOp::Mulh, MIN, -2),
    TestCase::signed(MulDivOp::Mulh, MAX, MAX),
    TestCase::new(MulDivOp::Mulhsu, -1i32 as u32, 2),
    TestCase::new(MulDivOp::Mulhsu, MIN as u32, 2),
    TestCase::new(MulDivOp::Mulhu, u32::MAX, u32::MAX),
    TestCase::new(MulDivOp::Mulhu, 0x1234_5678, 0x9ABC_DEF0),
    TestCase::signed(MulDivOp::Div, -2, 2),
    TestCase::signed(MulDivOp::Div, 10, 0),
    TestCase::signed(MulDivOp::Div, MIN, -1),
    TestCase::new(MulDivOp::Divu, 10, 2),
    TestCase::new(MulDivOp::Divu, 10, 0),
    TestCase::signed(MulDivOp::Rem, -2, 3),
    TestCase::signed(MulDivOp::Rem, 10, 0),
    TestCase::signed(MulDivOp::Rem, MIN, -1),
    TestCase::new(MulDivOp::Remu, 10, 3),
    TestCase::new(MulDivOp::Remu, 10, 0),
];

/// Returns the catalog as a slice.
pub fn catalog() -> &'static [TestCase] {
    &CATALOG
}

/// Catalog cases for one operation, in catalog order.
pub fn cases_for(op: MulDivOp) -> impl Iterator<Item = &'static TestCase> {
    CATALOG.iter().filter(move |case| case.op == op)
}

/// Wrapping 32-bit sum of every expected result.
///
/// Folding each result into one observable word keeps an optimising
/// implementation from discarding any of them.
pub fn accumulate<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> u32 {
    wrapping_sum(cases.into_iter().map(|case| case.expected))
}

/// Wrapping 32-bit sum of `values`.
pub fn wrapping_sum(values: impl IntoIterator<Item = u32>) -> u32 {
    values.into_iter().fold(0, u32::wrapping_add)
}
