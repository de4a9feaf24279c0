//! Sequence program: byte `i` of the output is element `i` of the table.

use tracing::{debug, info};

use crate::common::error::SinkError;
use crate::config::{MemoryMap, SequenceConfig};
use crate::sink::ResultSink;
use crate::vectors::{Seed, SequenceTable};

use super::{Program, RunReport};

/// Generates the recurrence table and publishes it.
#[derive(Clone, Debug)]
pub struct SequenceProgram {
    seed: Seed,
    length: usize,
    map: MemoryMap,
}

impl SequenceProgram {
    /// Program described by `config`.
    pub const fn from_config(config: &SequenceConfig) -> Self {
        Self {
            seed: config.seed,
            length: config.length,
            map: config.memory,
        }
    }

    /// Reference byte layout.
    pub fn expected_bytes(&self) -> Vec<u8> {
        SequenceTable::generate(self.seed, self.length).elements().to_vec()
    }
}

impl Program for SequenceProgram {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn memory_map(&self) -> MemoryMap {
        self.map
    }

    fn emit(&self, sink: &mut dyn ResultSink) -> Result<RunReport, SinkError> {
        info!(
            length = self.length,
            prev = self.seed.prev,
            first = self.seed.first,
            "sequence program start"
        );

        let table = SequenceTable::generate(self.seed, self.length);
        for element in table.elements() {
            sink.describe(&element.to_string())?;
        }
        sink.describe(&format!("Size of elements array: {}", table.len()))?;

        for (index, &element) in table.elements().iter().enumerate() {
            sink.write_byte(index, element)?;
        }
        debug!(bytes = table.len(), "sequence bytes published");

        Ok(RunReport {
            program: self.name(),
            bytes: table.elements().to_vec(),
            ..RunReport::default()
        })
    }
}
