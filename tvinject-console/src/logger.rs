//! [`log`] facade backed by the console.

use log::{Log, Metadata, Record, SetLoggerError};

use crate::ConsoleWriter;

/// Logger writing every enabled record as a console line.
///
/// Lines carry only the record's message, levels and targets are not rendered. Use
/// [`log::set_max_level`] to choose which records reach the console.
#[derive(Debug, Default)]
pub struct ConsoleLogger(());

impl ConsoleLogger {
    /// A `const` version of `ConsoleLogger::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = ConsoleLogger(());
}

impl Log for ConsoleLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        ConsoleWriter::system().println(*record.args());
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] as the global logger.
///
/// The maximum level is left untouched.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&ConsoleLogger::DEFAULT)
}
