//! Output memory window.
//!
//! A zero-initialised, byte-addressed RAM region that receives the words and
//! bytes a program publishes in memory-mapped mode.

use super::traits::Device;

/// RAM window on the output bus.
#[derive(Clone, Debug)]
pub struct Memory {
    base_addr: u64,
    data: Vec<u8>,
}

impl Memory {
    /// Creates a zeroed window of `size` bytes at `base_addr`.
    pub fn new(base_addr: u64, size: usize) -> Self {
        Self {
            base_addr,
            data: vec![0; size],
        }
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        "OUTPUT"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.data.len() as u64)
    }

    fn read_u8(&self, offset: u64) -> u8 {
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.data.get(i).copied())
            .unwrap_or(0)
    }

    fn write_u8(&mut self, offset: u64, val: u8) {
        if let Some(slot) = usize::try_from(offset)
            .ok()
            .and_then(|i| self.data.get_mut(i))
        {
            *slot = val;
        }
    }
}
