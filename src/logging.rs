use std::sync::OnceLock;

use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use serde::Serialize;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

#[derive(Debug, Serialize, Clone)]
pub struct LogMessage {
    level: String,
    target: String,
    message: String,
    timestamp: String,
}

impl LogMessage {
    fn from_record(record: &Record) -> Self {
        Self {
            level: record.level().to_string(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            timestamp: Local::now().to_rfc3339(),
        }
    }

    fn render(&self, json: bool) -> String {
        if json {
            if let Ok(line) = serde_json::to_string(self) {
                return line;
            }
        }
        format!("{} [{}] {}", self.timestamp, self.level, self.message)
    }
}

/// Writes timestamped records to stderr
pub struct ConsoleLogger {
    level: LevelFilter,
    json: bool,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, json: bool) -> Self {
        Self { level, json }
    }

    /// Installs the logger as the global `log` backend. Fails if one is already set.
    ///
    /// `level` and `json` are fixed by the first call in the process. A later call cannot
    /// change them: it returns `Err` and the original settings stay in effect.
    pub fn init(level: LevelFilter, json: bool) -> Result<(), SetLoggerError> {
        let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, json));
        log::set_logger(logger).map(|()| log::set_max_level(logger.level))
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", LogMessage::from_record(record).render(self.json));
        }
    }

    fn flush(&self) {}
}
