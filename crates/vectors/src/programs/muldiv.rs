//! Multiply/divide program.
//!
//! Word layout:
//!
//! | Index | Value |
//! |---|---|
//! | 0 | `factorial(n)` |
//! | 1 | wrapping sum of every case result |
//! | 2.. | case results, catalog order |

use std::hint::black_box;

use tracing::{debug, info};

use crate::alu::{self, Alu};
use crate::common::constants::MULDIV_HEADER_WORDS;
use crate::common::error::SinkError;
use crate::config::{MemoryMap, MulDivConfig};
use crate::sink::ResultSink;
use crate::vectors::{CATALOG, TestCase, accumulate, wrapping_sum};

use super::{Program, RunReport};

/// Evaluates the factorial and every test case, then publishes them.
#[derive(Clone, Debug)]
pub struct MulDivProgram {
    factorial_n: u32,
    map: MemoryMap,
    cases: Vec<TestCase>,
}

impl MulDivProgram {
    /// Program over the built-in catalog.
    pub fn from_config(config: &MulDivConfig) -> Self {
        Self::with_cases(config, CATALOG.to_vec())
    }

    /// Program over a caller-supplied case list.
    pub const fn with_cases(config: &MulDivConfig, cases: Vec<TestCase>) -> Self {
        Self {
            factorial_n: config.factorial_n,
            map: config.memory,
            cases,
        }
    }

    /// Cases in evaluation order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Reference word layout built from the catalog's recorded expectations.
    pub fn expected_words(&self) -> Vec<u32> {
        let mut words = vec![alu::factorial(self.factorial_n), accumulate(&self.cases)];
        words.extend(self.cases.iter().map(|case| case.expected));
        words
    }

    /// Evaluates every case at run time, operands opaque to the optimiser.
    fn evaluate(&self) -> Vec<u32> {
        self.cases
            .iter()
            .map(|case| Alu::execute(case.op, black_box(case.a), black_box(case.b)))
            .collect()
    }
}

impl Program for MulDivProgram {
    fn name(&self) -> &'static str {
        "muldiv"
    }

    fn memory_map(&self) -> MemoryMap {
        self.map
    }

    fn emit(&self, sink: &mut dyn ResultSink) -> Result<RunReport, SinkError> {
        info!(cases = self.cases.len(), n = self.factorial_n, "muldiv program start");

        let factorial = alu::factorial(black_box(self.factorial_n));
        let results = self.evaluate();
        let accumulator = wrapping_sum(results.iter().copied());

        for (case, &result) in self.cases.iter().zip(&results) {
            let evaluated = TestCase { expected: result, ..*case };
            sink.describe(&evaluated.to_string())?;
        }
        sink.describe(&format!("Factorial({}) = {factorial}", self.factorial_n))?;
        sink.describe(&format!("Dummy: {accumulator}"))?;

        let mut words = Vec::with_capacity(MULDIV_HEADER_WORDS + results.len());
        words.push(factorial);
        words.push(accumulator);
        words.extend_from_slice(&results);
        for (index, &word) in words.iter().enumerate() {
            sink.write_word(index, word)?;
        }
        debug!(words = words.len(), "muldiv words published");

        Ok(RunReport {
            program: self.name(),
            words,
            factorial: Some(factorial),
            accumulator: Some(accumulator),
            ..RunReport::default()
        })
    }
}
