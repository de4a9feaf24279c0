//! Crate-wide constants.

/// Width of an RV32 register in bits.
pub const XLEN: u32 = 32;

/// Number of bytes in a 32-bit output word.
pub const WORD_BYTES: u64 = 4;

/// Value written to the completion flag when a run has finished.
pub const DONE_VALUE: u8 = 1;

/// Completion flag value before any run has finished.
pub const NOT_DONE_VALUE: u8 = 0;

/// Longest sequence table a program may emit.
///
/// The reference program indexes the table with an 8-bit counter.
pub const MAX_SEQUENCE_LEN: usize = u8::MAX as usize;

/// Number of leading words the multiply/divide program writes before the
/// per-case results (factorial result, accumulator).
pub const MULDIV_HEADER_WORDS: usize = 2;
