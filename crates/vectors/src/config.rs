//! Configuration for the test programs and their output.
//!
//! This module defines all configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Memory maps of the reference target and the default table shape.
//! 2. **Structures:** General, multiply/divide program and sequence program sections.
//! 3. **Enums:** The runtime-selected output mode.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::load`) or
//! use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{MAX_SEQUENCE_LEN, MULDIV_HEADER_WORDS, WORD_BYTES};
use crate::common::error::ConfigError;
use crate::vectors::CATALOG_LEN;
use crate::vectors::sequence::Seed;

/// Default configuration constants.
///
/// These values reproduce the memory map of the reference target when not
/// explicitly overridden in a configuration file.
mod defaults {
    /// Base of the data memory used by the multiply/divide program.
    pub const DATA_MEM_BASE: u64 = 0x1000_0000;

    /// Where the multiply/divide program starts writing words.
    pub const MULDIV_BASE: u64 = DATA_MEM_BASE + 0x20;

    /// Output window of the multiply/divide program (up to `DATA_MEM_BASE + 0xE0`).
    pub const MULDIV_WINDOW: u64 = 0xC0;

    /// Completion byte of the multiply/divide program.
    pub const MULDIV_DONE: u64 = DATA_MEM_BASE + 0xFF;

    /// Factorial input (6! = 720).
    pub const FACTORIAL_N: u32 = 6;

    /// MMIO region used by the sequence program.
    pub const MMIO_BASE: u64 = 0x0200_0000;

    /// Where the sequence program starts writing bytes.
    pub const SEQUENCE_BASE: u64 = MMIO_BASE + 0x10;

    /// Output window of the sequence program.
    pub const SEQUENCE_WINDOW: u64 = 0x100;

    /// Completion byte of the sequence program.
    pub const SEQUENCE_DONE: u64 = MMIO_BASE + 0x0C;

    /// Number of sequence elements.
    pub const SEQUENCE_LEN: usize = crate::vectors::sequence::DEFAULT_LEN;

    /// Largest output window accepted (1 MiB).
    pub const MAX_WINDOW: u64 = 1 << 20;
}

/// How results are made observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OutputMode {
    /// Human-readable lines on a text stream.
    #[default]
    Diagnostic,
    /// Raw words and bytes at fixed addresses plus a completion byte.
    #[serde(alias = "Mmio", alias = "MMIO")]
    MemoryMapped,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rvm_vectors::config::{Config, OutputMode};
///
/// let json = r#"{
///     "general": { "output": "MemoryMapped" },
///     "sequence": { "length": 14, "seed": { "prev": 0, "first": 1 } }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.output, OutputMode::MemoryMapped);
/// assert_eq!(config.sequence.length, 14);
/// assert_eq!(config.muldiv.factorial_n, 6);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Output selection.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Multiply/divide program settings.
    #[serde(default)]
    pub muldiv: MulDivConfig,
    /// Sequence program settings.
    #[serde(default)]
    pub sequence: SequenceConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, or any validation error.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks the sequence length and both memory maps.
    ///
    /// # Errors
    ///
    /// The first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence.length > MAX_SEQUENCE_LEN {
            return Err(ConfigError::SequenceTooLong {
                len: self.sequence.length,
                max: MAX_SEQUENCE_LEN,
            });
        }
        self.muldiv
            .memory
            .validate("muldiv", MulDivConfig::output_bytes())?;
        self.sequence
            .memory
            .validate("sequence", self.sequence.length as u64)?;
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Output backend selected at runtime.
    #[serde(default)]
    pub output: OutputMode,
}

/// Placement of a program's output window and completion byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryMap {
    /// First byte of the output window.
    pub base_addr: u64,
    /// Size of the output window in bytes.
    pub window_bytes: u64,
    /// Address of the completion byte; must lie outside the window.
    pub done_addr: u64,
}

impl MemoryMap {
    /// Window size as a host length. Validation keeps it far below `usize::MAX`.
    pub fn window_len(&self) -> usize {
        usize::try_from(self.window_bytes).unwrap_or(usize::MAX)
    }

    /// One past the last window byte, or `None` if the window wraps.
    pub const fn window_end(&self) -> Option<u64> {
        self.base_addr.checked_add(self.window_bytes)
    }

    fn validate(&self, program: &'static str, needed: u64) -> Result<(), ConfigError> {
        if self.window_bytes > defaults::MAX_WINDOW {
            return Err(ConfigError::WindowTooLarge {
                program,
                window: self.window_bytes,
                max: defaults::MAX_WINDOW,
            });
        }
        let end = self.window_end().ok_or(ConfigError::WindowWraps {
            program,
            base: self.base_addr,
            window: self.window_bytes,
        })?;
        if needed > self.window_bytes {
            return Err(ConfigError::WindowTooSmall {
                program,
                window: self.window_bytes,
                needed,
            });
        }
        if self.done_addr >= self.base_addr && self.done_addr < end {
            return Err(ConfigError::FlagInsideWindow {
                program,
                done: self.done_addr,
                base: self.base_addr,
                end,
            });
        }
        Ok(())
    }
}

/// Multiply/divide program settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MulDivConfig {
    /// Input of the factorial computed with MUL.
    #[serde(default = "MulDivConfig::default_factorial_n")]
    pub factorial_n: u32,

    /// Output placement in memory-mapped mode.
    #[serde(default = "MulDivConfig::default_memory")]
    pub memory: MemoryMap,
}

impl MulDivConfig {
    fn default_factorial_n() -> u32 {
        defaults::FACTORIAL_N
    }

    fn default_memory() -> MemoryMap {
        MemoryMap {
            base_addr: defaults::MULDIV_BASE,
            window_bytes: defaults::MULDIV_WINDOW,
            done_addr: defaults::MULDIV_DONE,
        }
    }

    /// Bytes the program writes: header words plus one word per catalog case.
    pub const fn output_bytes() -> u64 {
        (MULDIV_HEADER_WORDS + CATALOG_LEN) as u64 * WORD_BYTES
    }
}

impl Default for MulDivConfig {
    fn default() -> Self {
        Self {
            factorial_n: defaults::FACTORIAL_N,
            memory: Self::default_memory(),
        }
    }
}

/// Sequence program settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceConfig {
    /// Number of elements (at most 255).
    #[serde(default = "SequenceConfig::default_length")]
    pub length: usize,

    /// Recurrence seed.
    #[serde(default)]
    pub seed: Seed,

    /// Output placement in memory-mapped mode.
    #[serde(default = "SequenceConfig::default_memory")]
    pub memory: MemoryMap,
}

impl SequenceConfig {
    fn default_length() -> usize {
        defaults::SEQUENCE_LEN
    }

    fn default_memory() -> MemoryMap {
        MemoryMap {
            base_addr: defaults::SEQUENCE_BASE,
            window_bytes: defaults::SEQUENCE_WINDOW,
            done_addr: defaults::SEQUENCE_DONE,
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            length: defaults::SEQUENCE_LEN,
            seed: Seed::default(),
            memory: Self::default_memory(),
        }
    }
}
