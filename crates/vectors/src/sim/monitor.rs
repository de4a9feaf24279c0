//! External observer of a memory-mapped run.
//!
//! Mirrors what a hardware test bench does: poll the completion byte with a
//! bounded budget, then compare the output window with the reference layout.

use std::thread;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::constants::WORD_BYTES;
use crate::common::error::{Error, Result};
use crate::sink::MemoryImage;
use crate::soc::CompletionFlag;

/// How long a monitor waits for completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollBudget {
    /// Maximum number of polls before giving up.
    pub max_polls: u64,
    /// Pause between polls.
    pub interval: Duration,
}

impl Default for PollBudget {
    fn default() -> Self {
        Self {
            max_polls: 10_000,
            interval: Duration::from_micros(100),
        }
    }
}

/// One location in the output window that differs from the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImageMismatch {
    /// Word or byte index.
    pub index: usize,
    /// Address of the location.
    pub addr: u64,
    /// Reference value.
    pub expected: u32,
    /// Value in the image; `None` when the index lies outside the window.
    pub observed: Option<u32>,
}

/// Polls a completion flag and verifies memory images.
#[derive(Clone, Debug)]
pub struct Monitor {
    flag: CompletionFlag,
}

impl Monitor {
    /// Observes `flag`.
    pub const fn new(flag: CompletionFlag) -> Self {
        Self { flag }
    }

    /// Single poll: `true` once the flag reads 1.
    pub fn poll(&self) -> bool {
        self.flag.is_done()
    }

    /// Polls until the flag rises or the budget runs out.
    ///
    /// Returns the number of polls it took.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] when the budget is exhausted.
    pub fn wait(&self, budget: PollBudget) -> Result<u64> {
        for poll in 1..=budget.max_polls {
            if self.poll() {
                debug!(polls = poll, "completion observed");
                return Ok(poll);
            }
            thread::sleep(budget.interval);
        }
        warn!(polls = budget.max_polls, "completion flag never rose");
        Err(Error::Timeout {
            polls: budget.max_polls,
        })
    }

    /// Compares words `0..expected.len()` of `image` with `expected`.
    pub fn verify_words(image: &MemoryImage, expected: &[u32]) -> Vec<ImageMismatch> {
        expected
            .iter()
            .enumerate()
            .filter_map(|(index, &want)| {
                let observed = image.word(index);
                (observed != Some(want)).then(|| ImageMismatch {
                    index,
                    addr: image.base_addr + index as u64 * WORD_BYTES,
                    expected: want,
                    observed,
                })
            })
            .collect()
    }

    /// Compares bytes `0..expected.len()` of `image` with `expected`.
    pub fn verify_bytes(image: &MemoryImage, expected: &[u8]) -> Vec<ImageMismatch> {
        expected
            .iter()
            .enumerate()
            .filter_map(|(index, &want)| {
                let observed = image.byte(index);
                (observed != Some(want)).then(|| ImageMismatch {
                    index,
                    addr: image.base_addr + index as u64,
                    expected: u32::from(want),
                    observed: observed.map(u32::from),
                })
            })
            .collect()
    }
}
