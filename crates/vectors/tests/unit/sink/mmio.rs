//! Memory-mapped backend: address layout, endianness and faults.

use pretty_assertions::assert_eq;
use rvm_vectors::Error;
use rvm_vectors::common::SinkError;
use rvm_vectors::config::{Config, MemoryMap, SequenceConfig};
use rvm_vectors::programs::SequenceProgram;
use rvm_vectors::sim::execute;
use rvm_vectors::sink::{MmioSink, ResultSink};
use rvm_vectors::soc::{Bus, CompletionFlag, DoneFlag, Memory};

fn muldiv_sink() -> MmioSink {
    MmioSink::new(Config::default().muldiv.memory)
}

#[test]
fn words_are_little_endian_at_base_plus_4i() {
    let mut sink = muldiv_sink();
    sink.write_word(2, 0x1122_3344).unwrap();

    let bus = sink.bus_mut();
    assert_eq!(bus.read_u8(0x1000_0028).unwrap(), 0x44);
    assert_eq!(bus.read_u8(0x1000_002B).unwrap(), 0x11);
    assert_eq!(bus.read_u32(0x1000_0028).unwrap(), 0x1122_3344);
    assert_eq!(sink.read_word(2).unwrap(), 0x1122_3344);
}

#[test]
fn bytes_land_at_base_plus_i() {
    let mut sink = MmioSink::new(Config::default().sequence.memory);
    sink.write_byte(0, 1).unwrap();
    sink.write_byte(9, 55).unwrap();
    assert_eq!(sink.bus_mut().read_u8(0x0200_0010).unwrap(), 1);
    assert_eq!(sink.bus_mut().read_u8(0x0200_0019).unwrap(), 55);
    assert_eq!(sink.read_byte(9).unwrap(), 55);
}

#[test]
fn write_past_window_is_unmapped() {
    let mut sink = muldiv_sink();
    // 0xC0 / 4 = 48 words fit.
    sink.write_word(47, 1).unwrap();
    let err = sink.write_word(48, 1).unwrap_err();
    assert!(matches!(err, SinkError::Unmapped { addr: 0x1000_00E0 }));
}

#[test]
fn word_straddling_window_end_is_unmapped() {
    let map = MemoryMap {
        base_addr: 0x4000,
        window_bytes: 6,
        done_addr: 0x5000,
    };
    let mut sink = MmioSink::new(map);
    let err = sink.write_word(1, 0xFFFF_FFFF).unwrap_err();
    assert!(matches!(err, SinkError::Unmapped { addr: 0x4007 }));
}

#[test]
fn index_overflowing_address_space() {
    let map = MemoryMap {
        base_addr: u64::MAX - 3,
        window_bytes: 4,
        done_addr: 0,
    };
    let mut sink = MmioSink::new(map);
    sink.write_word(0, 5).unwrap();
    let err = sink.write_word(1, 5).unwrap_err();
    assert!(matches!(err, SinkError::AddressOverflow { index: 1, .. }));
    assert!(matches!(
        sink.write_byte(usize::MAX, 0),
        Err(SinkError::AddressOverflow { .. })
    ));
}

#[test]
fn done_flag_is_written_last_and_once() {
    let mut sink = muldiv_sink();
    let flag = sink.completion();
    assert_eq!(sink.bus_mut().read_u8(0x1000_00FF).unwrap(), 0);

    sink.signal_done().unwrap();
    assert_eq!(flag.value(), 1);
    assert_eq!(sink.bus_mut().read_u8(0x1000_00FF).unwrap(), 1);
    assert!(matches!(sink.signal_done(), Err(SinkError::AlreadySignalled)));
}

#[test]
fn image_snapshots_window_and_flag() {
    let mut sink = muldiv_sink();
    sink.write_word(0, 720).unwrap();
    sink.write_word(1, 0xCB00_EA60).unwrap();
    sink.signal_done().unwrap();

    let image = sink.image().unwrap();
    assert_eq!(image.base_addr, 0x1000_0020);
    assert_eq!(image.done_addr, 0x1000_00FF);
    assert_eq!(image.bytes.len(), 0xC0);
    assert_eq!(image.done, 1);
    assert_eq!(image.word(0), Some(720));
    assert_eq!(image.word(1), Some(0xCB00_EA60));
    assert_eq!(image.word(2), Some(0));
    assert_eq!(image.word(48), None);
    assert_eq!(image.byte(4), Some(0x60));
    assert_eq!(image.byte(0xC0), None);
}

#[test]
fn device_names_in_address_order() {
    let mut sink = muldiv_sink();
    assert_eq!(sink.bus_mut().device_names(), ["OUTPUT", "DONE"]);
    assert_eq!(sink.map().done_addr, 0x1000_00FF);
}

fn sequence_bus(map: MemoryMap, done_device_is_flag: bool, flag: &CompletionFlag) -> Bus {
    let mut bus = Bus::new();
    bus.add_device(Box::new(Memory::new(map.base_addr, map.window_len())));
    if done_device_is_flag {
        bus.add_device(Box::new(DoneFlag::new(map.done_addr, flag.clone())));
    } else {
        bus.add_device(Box::new(Memory::new(map.done_addr, 1)));
    }
    bus
}

#[test]
fn assembled_bus_with_flag_device_completes() {
    let config = SequenceConfig::default();
    let flag = CompletionFlag::new();
    let bus = sequence_bus(config.memory, true, &flag);
    let mut sink = MmioSink::with_bus(bus, config.memory, flag.clone());

    let report = execute(&SequenceProgram::from_config(&config), &mut sink).unwrap();
    assert_eq!(report.done, 1);
    assert!(flag.is_done());
}

#[test]
fn completion_without_flag_device_is_an_error() {
    let config = SequenceConfig::default();
    let flag = CompletionFlag::new();
    let bus = sequence_bus(config.memory, false, &flag);
    let mut sink = MmioSink::with_bus(bus, config.memory, flag.clone());

    let err = execute(&SequenceProgram::from_config(&config), &mut sink).unwrap_err();
    assert!(matches!(
        err,
        Error::Sink(SinkError::CompletionLost { addr: 0x0200_000C })
    ));
    assert!(!flag.is_done());
    // The value still landed in the plain memory cell.
    assert_eq!(sink.bus_mut().read_u8(0x0200_000C).unwrap(), 1);
}
