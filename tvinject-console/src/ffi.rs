//! C entry point for the hooking code of an injected library.

use core::ffi::{CStr, c_char};

use crate::ConsoleWriter;
use crate::process::ResolveExecutablePath;

/// Writes `message` as one console line, tagged with the calling process's executable name.
///
/// The message is written verbatim and does not need to be UTF-8. C callers format it before
/// the call. A null `message` writes nothing.
///
/// # Safety
///
/// `message` must be null or point to a NUL-terminated string that stays valid and unmodified
/// for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tvinject_console_println(message: *const c_char) {
    // SAFETY: forwarded from the caller.
    unsafe { println_c_str(&ConsoleWriter::system(), message) };
}

/// Writes the bytes of `message` up to its NUL through `writer`.
///
/// # Safety
///
/// Same contract as [`tvinject_console_println`].
pub(crate) unsafe fn println_c_str<R>(writer: &ConsoleWriter<R>, message: *const c_char)
where
    R: ResolveExecutablePath,
{
    if message.is_null() {
        return;
    }
    // SAFETY: non-null, and the caller guarantees a valid NUL-terminated string.
    let message = unsafe { CStr::from_ptr(message) };
    writer.println_bytes(message.to_bytes());
}
