/// Completion monitor and image verification.
pub mod monitor;


/// Runner in both output modes.
pub mod runner;
