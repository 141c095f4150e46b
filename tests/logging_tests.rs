/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Tests for diagnostic logging during normalization

use ever_rs::units::{normalize, MillimeterConvention};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Logger that keeps every record in memory
struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_legacy_millimeter_is_not_a_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let length = normalize("1", "mm", MillimeterConvention::Legacy).unwrap();
    assert_eq!(length.meters(), 1.0 / 1.0e-3);

    let records = LOGGER.records.lock().unwrap();
    assert!(records.iter().all(|(level, _)| *level > Level::Warn));
    assert!(records
        .iter()
        .any(|(level, message)| *level == Level::Info && message.contains("legacy millimeter")));
}
