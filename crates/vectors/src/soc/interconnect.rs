//! Output bus for memory-mapped results.
//!
//! This module implements the bus that routes physical address accesses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range and sorted for lookup.
//! 2. **Access routing:** Byte and word reads/writes by address with a last-device hint.
//! 3. **Faults:** Accesses no device claims are reported as [`SinkError::Unmapped`].

use std::fmt;

use crate::common::constants::WORD_BYTES;
use crate::common::error::SinkError;

use super::devices::Device;

/// Bus connecting the program to its output devices; routes accesses by address.
pub struct Bus {
    /// Registered devices, sorted by base address.
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl Bus {
    /// Creates an empty bus; add devices with `add_device`.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            last_device_idx: 0,
        }
    }

    /// Registers a device on the bus; devices are sorted by base address for lookup.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
    }

    /// Returns whether the given address is backed by any device.
    pub fn is_valid_address(&self, addr: u64) -> bool {
        self.devices.iter().any(|d| d.contains(addr))
    }

    /// Names of the attached devices in address order.
    pub fn device_names(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.name()).collect()
    }

    fn find_index(&mut self, addr: u64) -> Option<usize> {
        if let Some(dev) = self.devices.get(self.last_device_idx) {
            if dev.contains(addr) {
                return Some(self.last_device_idx);
            }
        }
        let idx = self.devices.iter().position(|d| d.contains(addr))?;
        self.last_device_idx = idx;
        Some(idx)
    }

    /// Finds the device claiming `addr` and the offset within it.
    ///
    /// `len` bytes starting at `addr` must all belong to the same device.
    fn route(&mut self, addr: u64, len: u64) -> Result<(&mut dyn Device, u64), SinkError> {
        let idx = self.find_index(addr).ok_or(SinkError::Unmapped { addr })?;
        let dev = &mut *self.devices[idx];
        let last = addr
            .checked_add(len - 1)
            .ok_or(SinkError::Unmapped { addr })?;
        if !dev.contains(last) {
            return Err(SinkError::Unmapped { addr: last });
        }
        let offset = addr - dev.address_range().0;
        Ok((dev, offset))
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// [`SinkError::Unmapped`] when no device claims `addr`.
    pub fn write_u8(&mut self, addr: u64, val: u8) -> Result<(), SinkError> {
        let (dev, offset) = self.route(addr, 1)?;
        dev.write_u8(offset, val);
        Ok(())
    }

    /// Writes a little-endian word.
    ///
    /// # Errors
    ///
    /// [`SinkError::Unmapped`] when the four bytes are not inside one device.
    pub fn write_u32(&mut self, addr: u64, val: u32) -> Result<(), SinkError> {
        let (dev, offset) = self.route(addr, WORD_BYTES)?;
        dev.write_u32(offset, val);
        Ok(())
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`SinkError::Unmapped`] when no device claims `addr`.
    pub fn read_u8(&mut self, addr: u64) -> Result<u8, SinkError> {
        let (dev, offset) = self.route(addr, 1)?;
        Ok(dev.read_u8(offset))
    }

    /// Reads a little-endian word.
    ///
    /// # Errors
    ///
    /// [`SinkError::Unmapped`] when the four bytes are not inside one device.
    pub fn read_u32(&mut self, addr: u64) -> Result<u32, SinkError> {
        let (dev, offset) = self.route(addr, WORD_BYTES)?;
        Ok(dev.read_u32(offset))
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("devices", &self.device_names())
            .finish_non_exhaustive()
    }
}
