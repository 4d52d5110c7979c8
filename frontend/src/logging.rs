//! Routes the `log` facade to the browser console.

use gloo_console::{debug, error, info, warn};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => error!(line),
            Level::Warn => warn!(line),
            Level::Info => info!(line),
            Level::Debug | Level::Trace => debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Debug builds log at `Debug`, release builds at `Info`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
