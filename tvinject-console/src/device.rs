//! Access to the raw console device node.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Well-known path of the system console device.
pub const CONSOLE_PATH: &str = "/dev/console";

/// Flags added on top of read/write access when opening the device.
///
/// The caller never becomes the controlling terminal's owner, writes are not buffered by the
/// kernel, and a busy device fails immediately instead of blocking the host process.
const OPEN_FLAGS: libc::c_int = libc::O_NOCTTY | libc::O_SYNC | libc::O_NONBLOCK;

/// An open handle to a console device.
///
/// The descriptor is closed when the handle is dropped, so every exit path of a logging call
/// releases it.
#[derive(Debug)]
pub struct ConsoleHandle {
    file: File,
}

impl ConsoleHandle {
    /// Opens the device at `path` for a single line.
    pub fn open(path: &Path) -> Result<Self> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(OPEN_FLAGS)
            .open(path)
            .map(|file| Self { file })
            .map_err(|source| Error::DeviceUnavailable {
                path: PathBuf::from(path),
                source,
            })
    }

    /// Writes `line` with a single write call.
    ///
    /// A short or failed write is not retried, the line is best-effort.
    pub fn write_line(&mut self, line: &[u8]) {
        // this is a logger, ignore any errors writing
        let _ = self.file.write(line);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn open_missing_device_reports_path() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("console");

        let error = ConsoleHandle::open(&path).unwrap_err();

        match error {
            Error::DeviceUnavailable { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn open_does_not_create_or_truncate() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"0123456789").unwrap();

        let mut handle = ConsoleHandle::open(file.path()).unwrap();
        handle.write_line(b"ab");
        drop(handle);

        assert_eq!(std::fs::read(file.path()).unwrap(), b"ab23456789");
    }
}
