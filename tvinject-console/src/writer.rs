use core::fmt;
use std::borrow::Cow;
use std::path::Path;

use crate::device::{CONSOLE_PATH, ConsoleHandle};
use crate::line::{LineBuffer, compose_line};
use crate::process::{
    MAXPATHLEN, ResolveExecutablePath, SystemExecutablePath, basename, current_pid,
};
use crate::{Error, Result};

/// Writes process-tagged lines to a console device.
///
/// Holds no open descriptor between calls: each line opens the device, resolves the calling
/// process's executable, writes, and closes again.
///
/// # Examples
///
/// ```rust,no_run
/// use tvinject_console::ConsoleWriter;
///
/// let console = ConsoleWriter::system();
/// console.println(format_args!("hooked {} symbols", 12));
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleWriter<R = SystemExecutablePath> {
    device: Cow<'static, Path>,
    resolver: R,
}

impl ConsoleWriter {
    /// A writer for [`CONSOLE_PATH`] that asks the operating system for executable paths.
    pub fn system() -> Self {
        Self {
            device: Cow::Borrowed(Path::new(CONSOLE_PATH)),
            resolver: SystemExecutablePath,
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::system()
    }
}

impl<R> ConsoleWriter<R>
where
    R: ResolveExecutablePath,
{
    /// Targets the device node at `device` instead.
    pub fn with_device(self, device: impl Into<Cow<'static, Path>>) -> Self {
        Self {
            device: device.into(),
            ..self
        }
    }

    /// Resolves executable paths through `resolver` instead.
    pub fn with_resolver<T>(self, resolver: T) -> ConsoleWriter<T>
    where
        T: ResolveExecutablePath,
    {
        ConsoleWriter {
            device: self.device,
            resolver,
        }
    }

    /// The device node lines are written to.
    pub fn device(&self) -> &Path {
        &self.device
    }

    /// Writes one line, discarding every failure.
    pub fn println(&self, args: fmt::Arguments<'_>) {
        let _ = self.try_println(args);
    }

    /// Writes one line, reporting why nothing was written.
    ///
    /// The device is closed before returning on every path, including when the executable path
    /// cannot be resolved.
    pub fn try_println(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(|line| {
            // `LineBuffer` never fails, an error can only come from an argument's `Display` impl.
            let _ = fmt::write(line, args);
        })
    }

    /// Writes one line with a pre-formatted message, discarding every failure.
    ///
    /// `message` is copied verbatim, it does not need to be UTF-8.
    pub fn println_bytes(&self, message: &[u8]) {
        let _ = self.try_println_bytes(message);
    }

    /// Writes one line with a pre-formatted message, reporting why nothing was written.
    pub fn try_println_bytes(&self, message: &[u8]) -> Result<()> {
        self.emit(|line| line.push_bytes(message))
    }

    fn emit(&self, body: impl FnOnce(&mut LineBuffer)) -> Result<()> {
        let pid = current_pid();
        let mut console = ConsoleHandle::open(&self.device)?;

        let mut path = [0u8; MAXPATHLEN];
        let length = self
            .resolver
            .resolve(pid, &mut path)
            .filter(|&length| length > 0)
            .ok_or(Error::ProcessPathUnresolvable { pid })?;
        let path = path.get(..length).unwrap_or(&path);

        let line = compose_line(basename(path), body);
        console.write_line(line.as_bytes());
        Ok(())
    }
}
