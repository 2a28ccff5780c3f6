use std::path::PathBuf;

use nix::unistd::Pid;

/// A result with the [`Error`] error.
pub type Result<T> = core::result::Result<T, Error>;

/// Reasons a console line was not emitted.
///
/// Only [`try_println`](crate::try_println) and
/// [`ConsoleWriter::try_println`](crate::ConsoleWriter::try_println) surface these, the plain
/// `println` entry points discard them.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The console device could not be opened.
    #[error("console device {} is unavailable", path.display())]
    DeviceUnavailable {
        /// The device path that was tried.
        path: PathBuf,
        /// Why opening failed.
        #[source]
        source: std::io::Error,
    },

    /// The operating system did not report an executable path for the process.
    #[error("executable path of process {pid} could not be resolved")]
    ProcessPathUnresolvable {
        /// The process that was queried.
        pid: Pid,
    },
}
