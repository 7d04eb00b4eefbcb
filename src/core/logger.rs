use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::{
    Error,
    error::Result,
};

static CONTACTS_LOGGER: ContactsLogger = ContactsLogger {
    console: AtomicBool::new(true),
    file: Mutex::new(None),
};

struct ContactsLogger {
    console: AtomicBool,
    file: Mutex<Option<File>>,
}

impl log::Log for ContactsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if self.console.load(Ordering::Relaxed) {
            println!("{}", line);
        }

        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                _ = file.flush();
            }
        }
    }
}

/// Installs the crate logger at `level`, mirroring every line into `file`
/// (opened in append mode) when given.
pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let sink = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Io(format!("Opening log file {} error: {e}", path)))?
        ),
        None => None,
    };

    if let Ok(mut guard) = CONTACTS_LOGGER.file.lock() {
        *guard = sink;
    }
    CONTACTS_LOGGER.console.store(true, Ordering::Relaxed);

    _ = log::set_logger(&CONTACTS_LOGGER);
    log::set_max_level(level);
    Ok(())
}

pub fn revert_console_output() {
    CONTACTS_LOGGER.console.store(false, Ordering::Relaxed);
}

pub fn teardown() {
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = CONTACTS_LOGGER.file.lock() {
        guard.take();
    }
}
