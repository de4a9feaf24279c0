//! Two-term additive recurrence with 8-bit wraparound.
//!
//! With seed `(prev, first)` the table is `first, prev + first, ...` and every
//! later element is the `u8` wrapping sum of the two before it. The default
//! seed `(0, 1)` produces the Fibonacci numbers modulo 256.

use serde::{Deserialize, Serialize};

/// Default number of elements.
pub const DEFAULT_LEN: usize = 10;

/// The two terms preceding the table's second element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Term before the first element.
    pub prev: u8,
    /// First element of the table.
    pub first: u8,
}

impl Default for Seed {
    fn default() -> Self {
        Self { prev: 0, first: 1 }
    }
}

/// An ordered table produced by the recurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SequenceTable {
    seed: Seed,
    elements: Vec<u8>,
}

impl SequenceTable {
    /// Generates `len` elements from `seed`.
    pub fn generate(seed: Seed, len: usize) -> Self {
        let mut elements = Vec::with_capacity(len);
        let (mut a, mut b) = (seed.prev, seed.first);
        for _ in 0..len {
            elements.push(b);
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }
        Self { seed, elements }
    }

    /// Seed the table was generated from.
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Elements in order.
    pub fn elements(&self) -> &[u8] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for SequenceTable {
    fn default() -> Self {
        Self::generate(Seed::default(), DEFAULT_LEN)
    }
}
