//! Comparison of an implementation under test against the catalog.
//!
//! Two entry points:
//! 1. [`check`] drives an in-process [`Implementation`] over every case.
//! 2. [`check_observed`] matches externally produced [`Observation`]s (for
//!    example a JSON dump from a simulator) by `(op, a, b)`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::isa::MulDivOp;

use super::TestCase;

/// Something that computes RV32M results and can be checked.
pub trait Implementation {
    /// Computes `op` on the raw operand words.
    fn execute(&mut self, op: MulDivOp, a: u32, b: u32) -> u32;
}

impl<F> Implementation for F
where
    F: FnMut(MulDivOp, u32, u32) -> u32,
{
    fn execute(&mut self, op: MulDivOp, a: u32, b: u32) -> u32 {
        self(op, a, b)
    }
}

/// A result reported by an external implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Operation kind.
    pub op: MulDivOp,
    /// Operand A as a raw word.
    pub a: u32,
    /// Operand B as a raw word.
    pub b: u32,
    /// Result the implementation produced.
    pub result: u32,
}

/// A case whose observed result differs from the expected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// The failing case (with its expected result).
    pub case: TestCase,
    /// What the implementation produced.
    pub observed: u32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(a={:#010x}, b={:#010x}): expected {:#010x}, observed {:#010x}",
            self.case.op, self.case.a, self.case.b, self.case.expected, self.observed
        )
    }
}

/// Outcome of a check run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Number of cases compared.
    pub checked: usize,
    /// Cases whose result differed.
    pub mismatches: Vec<Mismatch>,
    /// Cases with no matching observation.
    pub missing: Vec<TestCase>,
}

impl CheckReport {
    /// `true` when every case was observed and matched.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty() && self.missing.is_empty()
    }
}

/// Runs every case through `imp` and collects mismatches.
pub fn check<I>(cases: &[TestCase], imp: &mut I) -> CheckReport
where
    I: Implementation + ?Sized,
{
    let mut report = CheckReport::default();
    for case in cases {
        let observed = imp.execute(case.op, case.a, case.b);
        report.checked += 1;
        if case.accepts(observed) {
            debug!(op = %case.op, a = case.a, b = case.b, observed, "case passed");
        } else {
            warn!(op = %case.op, a = case.a, b = case.b, expected = case.expected, observed, "case mismatch");
            report.mismatches.push(Mismatch { case: *case, observed });
        }
    }
    report
}

/// Matches observations to cases by `(op, a, b)`.
///
/// Observations for operand pairs outside `cases` are ignored. When the same
/// pair is observed more than once, the last observation wins.
pub fn check_observed(cases: &[TestCase], observations: &[Observation]) -> CheckReport {
    let by_operands: HashMap<(MulDivOp, u32, u32), u32> = observations
        .iter()
        .map(|o| ((o.op, o.a, o.b), o.result))
        .collect();

    let mut report = CheckReport::default();
    for case in cases {
        match by_operands.get(&(case.op, case.a, case.b)) {
            Some(&observed) => {
                report.checked += 1;
                if !case.accepts(observed) {
                    report.mismatches.push(Mismatch { case: *case, observed });
                }
            }
            None => {
                debug!(op = %case.op, a = case.a, b = case.b, "case not observed");
                report.missing.push(*case);
            }
        }
    }
    report
}
