//! Completion monitor: polling budget and image verification.

use std::time::Duration;

use pretty_assertions::assert_eq;
use rvm_vectors::Error;
use rvm_vectors::sim::{ImageMismatch, Monitor, PollBudget};
use rvm_vectors::sink::MemoryImage;
use rvm_vectors::soc::CompletionFlag;

fn image(bytes: Vec<u8>) -> MemoryImage {
    MemoryImage {
        base_addr: 0x1000,
        done_addr: 0x2000,
        bytes,
        done: 1,
    }
}

#[test]
fn poll_reports_state() {
    let flag = CompletionFlag::new();
    let monitor = Monitor::new(flag.clone());
    assert!(!monitor.poll());
    assert!(flag.raise());
    assert!(monitor.poll());
}

#[test]
fn wait_times_out_with_budget() {
    let monitor = Monitor::new(CompletionFlag::new());
    let budget = PollBudget {
        max_polls: 3,
        interval: Duration::from_micros(1),
    };
    assert!(matches!(monitor.wait(budget), Err(Error::Timeout { polls: 3 })));
}

#[test]
fn wait_returns_immediately_when_done() {
    let flag = CompletionFlag::new();
    assert!(flag.raise());
    assert_eq!(Monitor::new(flag).wait(PollBudget::default()).unwrap(), 1);
}

#[test]
fn zero_budget_times_out() {
    let flag = CompletionFlag::new();
    assert!(flag.raise());
    let budget = PollBudget {
        max_polls: 0,
        interval: Duration::ZERO,
    };
    assert!(matches!(Monitor::new(flag).wait(budget), Err(Error::Timeout { polls: 0 })));
}

#[test]
fn verify_words_reports_differences() {
    let img = image(vec![1, 0, 0, 0, 9, 0, 0, 0]);
    assert!(Monitor::verify_words(&img, &[1, 9]).is_empty());

    let diffs = Monitor::verify_words(&img, &[1, 2, 3]);
    assert_eq!(
        diffs,
        vec![
            ImageMismatch { index: 1, addr: 0x1004, expected: 2, observed: Some(9) },
            ImageMismatch { index: 2, addr: 0x1008, expected: 3, observed: None },
        ]
    );
}

#[test]
fn verify_bytes_reports_differences() {
    let img = image(vec![1, 1, 2, 4]);
    let diffs = Monitor::verify_bytes(&img, &[1, 1, 2, 3]);
    assert_eq!(
        diffs,
        vec![ImageMismatch { index: 3, addr: 0x1003, expected: 3, observed: Some(4) }]
    );
}
