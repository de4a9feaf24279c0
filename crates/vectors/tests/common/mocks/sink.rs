use std::sync::{Arc, Mutex};

use mockall::mock;
use rvm_vectors::ResultSink;
use rvm_vectors::common::SinkError;
use rvm_vectors::soc::CompletionFlag;

mock! {
    pub Sink {}
    impl ResultSink for Sink {
        fn write_word(&mut self, index: usize, value: u32) -> Result<(), SinkError>;
        fn write_byte(&mut self, index: usize, value: u8) -> Result<(), SinkError>;
        fn signal_done(&mut self) -> Result<(), SinkError>;
        fn describe(&mut self, line: &str) -> Result<(), SinkError>;
        fn completion(&self) -> CompletionFlag;
    }
}

/// One call observed by a [`logging_sink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCall {
    Word(usize, u32),
    Byte(usize, u8),
    Describe(String),
    Done,
}

/// Builds a mock sink that accepts every call and records it in order.
///
/// `signal_done` raises `flag`, like a real backend.
pub fn logging_sink(flag: &CompletionFlag) -> (MockSink, Arc<Mutex<Vec<SinkCall>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut sink = MockSink::new();

    let l = Arc::clone(&log);
    let _ = sink.expect_write_word().returning(move |i, v| {
        l.lock().unwrap().push(SinkCall::Word(i, v));
        Ok(())
    });
    let l = Arc::clone(&log);
    let _ = sink.expect_write_byte().returning(move |i, v| {
        l.lock().unwrap().push(SinkCall::Byte(i, v));
        Ok(())
    });
    let l = Arc::clone(&log);
    let _ = sink.expect_describe().returning(move |line| {
        l.lock().unwrap().push(SinkCall::Describe(line.to_owned()));
        Ok(())
    });
    let l = Arc::clone(&log);
    let f = flag.clone();
    let _ = sink.expect_signal_done().times(1).returning(move || {
        l.lock().unwrap().push(SinkCall::Done);
        assert!(f.raise());
        Ok(())
    });
    let f = flag.clone();
    let _ = sink.expect_completion().returning(move || f.clone());

    (sink, log)
}
