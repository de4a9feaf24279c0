//! Runner in diagnostic and memory-mapped modes.

use pretty_assertions::assert_eq;
use rvm_vectors::config::{Config, OutputMode};
use rvm_vectors::programs::{MulDivProgram, ProgramKind, SequenceProgram};
use rvm_vectors::sim::{Monitor, PollBudget, Runner};
use rvm_vectors::{Error, common::ConfigError};

use crate::common::harness::{init_tracing, mmio_config, run_program};

#[test]
fn diagnostic_mode_prints_and_has_no_image() {
    let (outcome, text) = run_program(ProgramKind::MulDiv, Config::default());
    assert!(outcome.image.is_none());
    assert_eq!(outcome.report.factorial, Some(720));
    assert_eq!(outcome.report.accumulator, Some(3_405_834_848));
    assert!(text.contains("Factorial(6) = 720\nDummy: 3405834848\nDone: 1\n"));
    assert!(text.ends_with("Done: 1\n"));
}

#[test]
fn mmio_muldiv_image_matches_reference() {
    let config = mmio_config();
    let expected = MulDivProgram::from_config(&config.muldiv).expected_words();
    let (outcome, text) = run_program(ProgramKind::MulDiv, config);
    assert!(text.is_empty());

    let image = outcome.image.unwrap();
    assert_eq!(image.done, 1);
    assert_eq!(image.word(0), Some(720));
    assert_eq!(image.word(1), Some(0xCB00_EA60));
    assert_eq!(image.word(11), Some(u32::MAX)); // DIV 10 / 0
    assert!(Monitor::verify_words(&image, &expected).is_empty());
    // Unwritten tail of the window stays zero.
    assert!(image.bytes[80..].iter().all(|&b| b == 0));
}

#[test]
fn mmio_sequence_image_matches_reference() {
    let mut config = mmio_config();
    config.sequence.length = 14;
    let expected = SequenceProgram::from_config(&config.sequence).expected_bytes();
    let (outcome, _) = run_program(ProgramKind::Sequence, config);

    let image = outcome.image.unwrap();
    assert_eq!(image.base_addr, 0x0200_0010);
    assert_eq!(image.done_addr, 0x0200_000C);
    assert_eq!(&image.bytes[..14], expected.as_slice());
    assert_eq!(image.byte(13), Some(121));
    assert!(Monitor::verify_bytes(&image, &expected).is_empty());
}

#[test]
fn runner_rejects_invalid_config() {
    let mut config = Config::default();
    config.sequence.length = 300;
    let err = Runner::new(config).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::SequenceTooLong { .. })));
}

#[test]
fn spawned_run_is_observed_by_monitor() {
    init_tracing();
    let runner = Runner::new(mmio_config()).unwrap();
    assert_eq!(runner.config().general.output, OutputMode::MemoryMapped);

    let (monitor, handle) = runner.spawn_memory_mapped(ProgramKind::MulDiv);
    let budget = PollBudget {
        max_polls: 100_000,
        ..PollBudget::default()
    };
    let polls = monitor.wait(budget).unwrap();
    assert!(polls >= 1);

    let outcome = handle.join().unwrap().unwrap();
    assert!(monitor.poll());
    let image = outcome.image.unwrap();
    let expected = MulDivProgram::from_config(&runner.config().muldiv).expected_words();
    assert!(Monitor::verify_words(&image, &expected).is_empty());
}

#[test]
fn spawn_ignores_diagnostic_mode() {
    let runner = Runner::new(Config::default()).unwrap();
    let (monitor, handle) = runner.spawn_memory_mapped(ProgramKind::Sequence);
    let outcome = handle.join().unwrap().unwrap();
    assert!(outcome.image.is_some());
    assert!(monitor.poll());
}

#[test]
fn outcome_serializes_to_json() {
    let (outcome, _) = run_program(ProgramKind::Sequence, mmio_config());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["report"]["program"], "sequence");
    assert_eq!(json["report"]["done"], 1);
    assert_eq!(json["image"]["done_addr"], 0x0200_000C);
}
