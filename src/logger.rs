use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Byte sink for log output, typically the kernel console driver.
pub trait Console: Sync + Send {
    fn write(&self, bytes: &[u8]);
}

#[derive(Debug)]
pub struct ConsoleLog<C: Console> {
    console: C,
    level: LevelFilter,
}
impl<C: Console> ConsoleLog<C> {
    pub const fn new(console: C, level: LevelFilter) -> Self {
        ConsoleLog { console, level }
    }
}
impl<C: Console> Log for ConsoleLog<C> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        struct Writer<'a, C: Console>(&'a C);
        impl<C: Console> Write for Writer<'_, C> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0.write(s.as_bytes());
                Ok(())
            }
        }
        let _ = writeln!(
            Writer(&self.console),
            "[{}] ({}) -- {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

#[cfg(target_has_atomic = "ptr")]
/// Installs `logger` as the process logger and sets the global maximum level.
/// # Errors
/// Returns an error if a logger was already installed.
pub fn init(logger: &'static dyn Log, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
