// src/utils/logger.rs

use log::{Level, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

pub fn init() -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let tag = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => " WARN",
        Level::Info => " INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
      };
      eprintln!("[{}] {}", tag, record.args());
    }
  }

  fn flush(&self) {}
}
