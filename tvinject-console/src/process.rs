//! Identity of the calling process.
//!
//! Nothing here is cached: an injected library may outlive an `exec` of its host, so the pid
//! and executable path are queried again for every line.

use nix::unistd::Pid;

/// Capacity of the executable path buffer, in bytes.
pub const MAXPATHLEN: usize = 1024;

/// Returns the identifier of the calling process.
pub fn current_pid() -> Pid {
    nix::unistd::getpid()
}

/// Source of the absolute executable path of a process.
pub trait ResolveExecutablePath {
    /// Fills `buffer` with the executable path of `pid` and returns the number of bytes written.
    ///
    /// Returns `None` where the operating system reports a non-positive length, including when
    /// the path does not fit into `buffer`.
    fn resolve(&self, pid: Pid, buffer: &mut [u8]) -> Option<usize>;
}

impl<F> ResolveExecutablePath for F
where
    F: Fn(Pid, &mut [u8]) -> Option<usize>,
{
    fn resolve(&self, pid: Pid, buffer: &mut [u8]) -> Option<usize> {
        self(pid, buffer)
    }
}

/// Resolves executable paths through the operating system.
///
/// Apple targets ask `proc_pidpath`, Linux and Android read the `/proc/<pid>/exe` link. Every
/// other target fails resolution, which silences the logger.
///
/// Linux appends ` (deleted)` to the link once the executable was replaced or removed on disk.
/// That marker is stripped, so the tag keeps naming the executable the process was started from.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutablePath;

impl ResolveExecutablePath for SystemExecutablePath {
    #[cfg(target_vendor = "apple")]
    fn resolve(&self, pid: Pid, buffer: &mut [u8]) -> Option<usize> {
        let capacity = u32::try_from(buffer.len()).unwrap_or(u32::MAX);
        // SAFETY: `buffer` is valid for writes of `capacity` bytes, which never exceeds its length.
        let length =
            unsafe { libc::proc_pidpath(pid.as_raw(), buffer.as_mut_ptr().cast(), capacity) };
        usize::try_from(length).ok().filter(|&length| length > 0)
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn resolve(&self, pid: Pid, buffer: &mut [u8]) -> Option<usize> {
        use std::os::unix::ffi::OsStrExt;

        let link = format!("/proc/{pid}/exe");
        let path = nix::fcntl::readlink(link.as_str()).ok()?;
        copy_path(strip_deleted_marker(path.as_bytes()), buffer)
    }

    #[cfg(not(any(target_vendor = "apple", target_os = "linux", target_os = "android")))]
    fn resolve(&self, _pid: Pid, _buffer: &mut [u8]) -> Option<usize> {
        None
    }
}

/// Copies `path` into `buffer`, leaving room for a terminator like `proc_pidpath` does.
#[cfg_attr(
    not(any(target_os = "linux", target_os = "android", test)),
    expect(dead_code, reason = "only the procfs resolver copies paths")
)]
fn copy_path(path: &[u8], buffer: &mut [u8]) -> Option<usize> {
    if path.is_empty() || path.len() >= buffer.len() {
        return None;
    }
    buffer[..path.len()].copy_from_slice(path);
    Some(path.len())
}

/// Removes the marker procfs appends to links of unlinked executables.
#[cfg_attr(
    not(any(target_os = "linux", target_os = "android", test)),
    expect(dead_code, reason = "only the procfs resolver sees the marker")
)]
fn strip_deleted_marker(path: &[u8]) -> &[u8] {
    path.strip_suffix(b" (deleted)").unwrap_or(path)
}

/// Returns the final component of `path`.
///
/// That is everything after the last `/`, or all of `path` when it has no separator.
pub fn basename(path: &[u8]) -> &[u8] {
    match path.iter().rposition(|&byte| byte == b'/') {
        Some(separator) => &path[separator + 1..],
        None => path,
    }
}
