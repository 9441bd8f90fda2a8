//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.debug/info/warn/error`
//! on wasm32 and to stderr on native targets (tests, tooling). Lines are
//! prefixed with a local `chrono` timestamp.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Logger instance installed by [`init`]
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
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
        let line = format_record(record);
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}
