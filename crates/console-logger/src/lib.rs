//! Console Logger
//!
//! `log` backend that writes to the browser console and keeps the most
//! recent lines in a circular buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the console with a bounded history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            history: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Format a record as `[LEVEL target] message`
    pub fn format(record: &Record) -> String {
        format!("[{} {}] {}", record.level(), record.target(), record.args())
    }

    /// Push a line, evicting the oldest when full
    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut history) = self.history.lock() {
            while history.len() >= self.capacity {
                history.pop_front();
            }
            history.push_back(line);
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Buffered lines of the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_last_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        assert_eq!(logger.recent(), vec!["[INFO test] two", "[INFO test] three"]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 8);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Error, "shown");

        assert_eq!(logger.recent(), vec!["[ERROR test] shown"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "dropped");
        assert!(logger.recent().is_empty());
    }
}
