use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

use log::{self, Level, LevelFilter, Log, Metadata, Record};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::Error;

fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "-".to_string())
}

fn format_record(record: &Record) -> String {
    format!("{} {} - {}", timestamp(), record.level(), record.args())
}

struct ConsoleLogger {
    level: Level
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

struct FileLogger {
    level: Level,
    handle: Mutex<File>
}

impl FileLogger {
    pub fn new(path: &str, level: Level) -> Result<FileLogger, io::Error> {
        let file = File::create(path)?;

        Ok(FileLogger {
            level: level,
            handle: Mutex::new(file)
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut handle) = self.handle.lock() {
                // A failed log write must not abort generation.
                let _ = writeln!(handle, "{}", format_record(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut handle) = self.handle.lock() {
            let _ = handle.flush();
        }
    }
}

/// Installs the global logger. Logs go to stderr unless `log_path` is given,
/// in which case that file is created (or truncated) and used instead.
pub fn init_logger(level: LevelFilter, log_path: Option<&str>) -> Result<(), Error> {
    let record_level = level.to_level().unwrap_or(Level::Error);

    let logger: Box<dyn Log> = match log_path {
        Some(path) => Box::new(FileLogger::new(path, record_level)?),
        None => Box::new(ConsoleLogger { level: record_level })
    };

    log::set_boxed_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
