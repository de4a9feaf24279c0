//! Memory-mapped backend.
//!
//! Word `i` lands at `base + 4 * i` (little-endian), byte `i` at `base + i`.
//! The completion byte lives at its own address outside the output window and
//! is written last.

use serde::Serialize;
use tracing::debug;

use crate::common::constants::{DONE_VALUE, WORD_BYTES};
use crate::common::error::SinkError;
use crate::config::MemoryMap;
use crate::soc::{Bus, CompletionFlag, DoneFlag, Memory};

use super::ResultSink;

/// Sink that stores results on a device bus.
#[derive(Debug)]
pub struct MmioSink {
    bus: Bus,
    map: MemoryMap,
    flag: CompletionFlag,
}

impl MmioSink {
    /// Builds a bus with an output window and a completion flag per `map`.
    pub fn new(map: MemoryMap) -> Self {
        let flag = CompletionFlag::new();
        let mut bus = Bus::new();
        bus.add_device(Box::new(Memory::new(map.base_addr, map.window_len())));
        bus.add_device(Box::new(DoneFlag::new(map.done_addr, flag.clone())));
        Self::with_bus(bus, map, flag)
    }

    /// Uses a caller-assembled bus. `flag` must be the handle of the
    /// [`DoneFlag`] mapped at `map.done_addr`; otherwise
    /// [`ResultSink::signal_done`] fails with [`SinkError::CompletionLost`].
    pub const fn with_bus(bus: Bus, map: MemoryMap, flag: CompletionFlag) -> Self {
        Self { bus, map, flag }
    }

    /// Memory map in use.
    pub const fn map(&self) -> &MemoryMap {
        &self.map
    }

    /// Mutable access to the bus, e.g. to read back results.
    pub const fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    fn word_addr(&self, index: usize) -> Result<u64, SinkError> {
        let overflow = SinkError::AddressOverflow {
            base: self.map.base_addr,
            index,
        };
        u64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(WORD_BYTES))
            .and_then(|off| self.map.base_addr.checked_add(off))
            .ok_or(overflow)
    }

    fn byte_addr(&self, index: usize) -> Result<u64, SinkError> {
        u64::try_from(index)
            .ok()
            .and_then(|off| self.map.base_addr.checked_add(off))
            .ok_or(SinkError::AddressOverflow {
                base: self.map.base_addr,
                index,
            })
    }

    /// Reads back word `index`.
    ///
    /// # Errors
    ///
    /// Same address errors as [`ResultSink::write_word`].
    pub fn read_word(&mut self, index: usize) -> Result<u32, SinkError> {
        let addr = self.word_addr(index)?;
        self.bus.read_u32(addr)
    }

    /// Reads back byte `index`.
    ///
    /// # Errors
    ///
    /// Same address errors as [`ResultSink::write_byte`].
    pub fn read_byte(&mut self, index: usize) -> Result<u8, SinkError> {
        let addr = self.byte_addr(index)?;
        self.bus.read_u8(addr)
    }

    /// Snapshot of the whole output window and the completion byte.
    ///
    /// # Errors
    ///
    /// [`SinkError::Unmapped`] if the window is not fully mapped.
    pub fn image(&mut self) -> Result<MemoryImage, SinkError> {
        let mut bytes = Vec::with_capacity(self.map.window_len());
        for index in 0..self.map.window_len() {
            bytes.push(self.read_byte(index)?);
        }
        let done = self.bus.read_u8(self.map.done_addr)?;
        Ok(MemoryImage {
            base_addr: self.map.base_addr,
            done_addr: self.map.done_addr,
            bytes,
            done,
        })
    }
}

impl ResultSink for MmioSink {
    fn write_word(&mut self, index: usize, value: u32) -> Result<(), SinkError> {
        let addr = self.word_addr(index)?;
        debug!(index, addr, value, "mmio word");
        self.bus.write_u32(addr, value)
    }

    fn write_byte(&mut self, index: usize, value: u8) -> Result<(), SinkError> {
        let addr = self.byte_addr(index)?;
        debug!(index, addr, value, "mmio byte");
        self.bus.write_u8(addr, value)
    }

    fn signal_done(&mut self) -> Result<(), SinkError> {
        if self.flag.is_done() {
            return Err(SinkError::AlreadySignalled);
        }
        self.bus.write_u8(self.map.done_addr, DONE_VALUE)?;
        if self.flag.is_done() {
            Ok(())
        } else {
            Err(SinkError::CompletionLost {
                addr: self.map.done_addr,
            })
        }
    }

    fn completion(&self) -> CompletionFlag {
        self.flag.clone()
    }
}

/// Contents of the output window after a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryImage {
    /// Address of `bytes[0]`.
    pub base_addr: u64,
    /// Address of the completion byte.
    pub done_addr: u64,
    /// Raw window contents.
    pub bytes: Vec<u8>,
    /// Completion byte value.
    pub done: u8,
}

impl MemoryImage {
    /// Little-endian word at word position `index`, if inside the window.
    pub fn word(&self, index: usize) -> Option<u32> {
        let start = index.checked_mul(WORD_BYTES as usize)?;
        let chunk = self.bytes.get(start..start.checked_add(WORD_BYTES as usize)?)?;
        Some(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    /// Byte at position `index`, if inside the window.
    pub fn byte(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }
}
