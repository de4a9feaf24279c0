//! Memory-mapped target model.
//!
//! 1. **Traits:** The `Device` interface every bus-attached component implements.
//! 2. **Interconnect:** The bus that routes accesses by address range.
//! 3. **Memory:** The output RAM window.
//! 4. **Devices:** The completion flag.

/// MMIO devices.
pub mod devices;

/// Address-routed bus.
pub mod interconnect;

/// Output RAM window.
pub mod memory;

/// Device trait.
pub mod traits;

pub use devices::{CompletionFlag, DoneFlag};
pub use interconnect::Bus;
pub use memory::Memory;
pub use traits::Device;
