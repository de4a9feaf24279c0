//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by all bus-attached components. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Byte and word read/write at device-relative offsets.
//!
//! All implementors must be `Send + Sync` so a bus can move to a worker thread
//! while monitors observe shared device state.

/// Trait for memory-mapped devices attached to the output bus.
///
/// Word accesses default to four little-endian byte accesses; devices with
/// word-level side effects override them.
pub trait Device: Send + Sync {
    /// Returns a short name for this device (e.g., `"OUTPUT"`, `"DONE"`).
    fn name(&self) -> &str;
    /// Returns (base_address, size_in_bytes) for this device's region.
    fn address_range(&self) -> (u64, u64);
    /// Reads one byte at the given device-relative offset.
    fn read_u8(&self, offset: u64) -> u8;
    /// Writes one byte at the given offset.
    fn write_u8(&mut self, offset: u64, val: u8);

    /// Reads four bytes (little-endian) at the given offset.
    fn read_u32(&self, offset: u64) -> u32 {
        u32::from_le_bytes([
            self.read_u8(offset),
            self.read_u8(offset + 1),
            self.read_u8(offset + 2),
            self.read_u8(offset + 3),
        ])
    }

    /// Writes four bytes (little-endian) at the given offset.
    fn write_u32(&mut self, offset: u64, val: u32) {
        for (i, byte) in val.to_le_bytes().into_iter().enumerate() {
            self.write_u8(offset + i as u64, byte);
        }
    }

    /// Returns whether `addr` falls inside this device's region.
    fn contains(&self, addr: u64) -> bool {
        let (start, size) = self.address_range();
        addr >= start && addr - start < size
    }
}
