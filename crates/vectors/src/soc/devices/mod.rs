//! Memory-mapped devices on the output bus.

/// Completion flag device and its observer handle.
pub mod done_flag;

pub use crate::soc::traits::Device;
pub use done_flag::{CompletionFlag, DoneFlag};
