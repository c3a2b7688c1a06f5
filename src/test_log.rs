//! Capture logger for asserting on warnings in tests.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> =
        const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| {
            c.borrow_mut().push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

/// Run `f` and return its result with every record it logged on this
/// thread.
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
    let result = f();
    let records = CAPTURED.with(RefCell::take);
    (result, records)
}

/// Messages logged at `Warn`.
pub(crate) fn warnings(records: &[(Level, String)]) -> Vec<&str> {
    records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.as_str())
        .collect()
}
