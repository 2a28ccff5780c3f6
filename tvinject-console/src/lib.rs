//! Process-tagged diagnostic lines on the system console.
//!
//! Libraries injected into arbitrary host processes cannot rely on the host having any logging
//! framework set up. This crate writes straight to the console device instead, tagging each line
//! with the name of the executable that emitted it:
//!
//! ```text
//! ESC[32;1m[<executable>]ESC[0m <message>
//! ```
//!
//! Logging never fails the caller. When the device cannot be opened or the executable path cannot
//! be resolved the line is dropped, and overlong lines are truncated. [`try_println`] reports the
//! first two cases for callers that want to know.
//!
//! # Features
//!
//! - `log`: [`logger::ConsoleLogger`], a `log::Log` implementation writing console lines.
//!   Default: disabled.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use core::fmt;

pub mod device;
mod error;
mod ffi;
pub mod line;
#[cfg(feature = "log")]
pub mod logger;
pub mod process;
mod writer;

pub use self::error::{Error, Result};
pub use self::ffi::tvinject_console_println;
pub use self::writer::ConsoleWriter;

/// Writes one line to the system console, tagged with the calling process's executable name.
///
/// Failures are discarded, see [`try_println`] for a variant reporting them.
pub fn println(args: fmt::Arguments<'_>) {
    ConsoleWriter::system().println(args);
}

/// Writes one line to the system console, reporting why nothing was written.
pub fn try_println(args: fmt::Arguments<'_>) -> Result<()> {
    ConsoleWriter::system().try_println(args)
}

/// Writes a formatted line to the system console, tagged with the calling process's executable
/// name.
///
/// Takes the same arguments as [`std::format!`]. Never fails and never panics on a missing device.
///
/// # Examples
///
/// ```rust,no_run
/// tvinject_console::console_println!("starting with {} args", 3);
/// ```
#[macro_export]
macro_rules! console_println {
    ($($arg:tt)*) => {
        $crate::println(::core::format_args!($($arg)*))
    };
}
