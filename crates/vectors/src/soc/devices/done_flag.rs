//! Completion flag device.
//!
//! A single memory-mapped control byte that a program sets to `1` as its last
//! write. External observers poll it through a [`CompletionFlag`] handle that
//! shares the same atomic:
//!
//! * `0` - the run has not finished.
//! * `1` - every result has been written.
//!
//! Writes of any other value, and repeated writes of `1`, are ignored so the
//! flag is never observed in a third state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{info, warn};

use crate::common::constants::{DONE_VALUE, NOT_DONE_VALUE};
use crate::soc::traits::Device;

/// Shared, cloneable view of a completion flag.
#[derive(Clone, Debug, Default)]
pub struct CompletionFlag {
    value: Arc<AtomicU8>,
}

impl CompletionFlag {
    /// Creates a flag in the not-done state.
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU8::new(NOT_DONE_VALUE)),
        }
    }

    /// Current raw value (0 or 1).
    pub fn value(&self) -> u8 {
        self.value.load(Ordering::Acquire)
    }

    /// Whether the run has finished.
    pub fn is_done(&self) -> bool {
        self.value() == DONE_VALUE
    }

    /// Moves the flag from 0 to 1. Returns `false` if it was already set.
    pub fn raise(&self) -> bool {
        self.value
            .compare_exchange(NOT_DONE_VALUE, DONE_VALUE, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Memory-mapped completion byte.
#[derive(Debug)]
pub struct DoneFlag {
    addr: u64,
    flag: CompletionFlag,
}

impl DoneFlag {
    /// Creates the device at `addr`, publishing through `flag`.
    pub const fn new(addr: u64, flag: CompletionFlag) -> Self {
        Self { addr, flag }
    }

    /// Handle observers can poll.
    pub fn flag(&self) -> CompletionFlag {
        self.flag.clone()
    }

    fn handle_write(&self, val: u8) {
        if val != DONE_VALUE {
            warn!(addr = self.addr, val, "ignoring non-completion write to done flag");
        } else if self.flag.raise() {
            info!(addr = self.addr, "completion flag raised");
        } else {
            warn!(addr = self.addr, "completion flag already raised");
        }
    }
}

impl Device for DoneFlag {
    fn name(&self) -> &str {
        "DONE"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.addr, 1)
    }

    fn read_u8(&self, _offset: u64) -> u8 {
        self.flag.value()
    }

    fn write_u8(&mut self, offset: u64, val: u8) {
        if offset == 0 {
            self.handle_write(val);
        }
    }
}
