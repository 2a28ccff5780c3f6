//! Composition of a single console line.

use core::fmt;

use crate::process::MAXPATHLEN;

/// Bold green, applied to the process tag.
pub const TAG_COLOR: &str = "\x1b[32;1m";

/// Resets the color after the process tag.
pub const RESET: &str = "\x1b[0m";

/// Capacity of a formatted line, in bytes, including the terminator slot bounded prints reserve.
pub const LINE_CAPACITY: usize = 2 * MAXPATHLEN;

/// A fixed-size line that silently truncates once full.
///
/// At most `LINE_CAPACITY - 1` bytes are kept, the same amount a bounded C print into a buffer
/// of `LINE_CAPACITY` bytes leaves before its terminator. Truncation may split a multi-byte
/// character or drop the trailing newline.
pub struct LineBuffer {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
    truncated: bool,
}

impl LineBuffer {
    /// Creates an empty line.
    pub const fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    /// Appends as much of `bytes` as still fits.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let available = LINE_CAPACITY - 1 - self.len;
        let taken = bytes.len().min(available);
        self.bytes[self.len..self.len + taken].copy_from_slice(&bytes[..taken]);
        self.len += taken;
        self.truncated |= taken < bytes.len();
    }

    /// The bytes composed so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Whether any appended bytes were dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("line", &self.as_bytes().escape_ascii().to_string())
            .field("truncated", &self.truncated)
            .finish()
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Overflow truncates.
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}

/// Composes `ESC[32;1m[<process>]ESC[0m <body>\n`, with `body` appending the message.
pub fn compose_line(process: &[u8], body: impl FnOnce(&mut LineBuffer)) -> LineBuffer {
    let mut line = LineBuffer::new();
    line.push_bytes(TAG_COLOR.as_bytes());
    line.push_bytes(b"[");
    line.push_bytes(process);
    line.push_bytes(b"]");
    line.push_bytes(RESET.as_bytes());
    line.push_bytes(b" ");
    body(&mut line);
    line.push_bytes(b"\n");
    line
}

/// Formats `ESC[32;1m[<process>]ESC[0m <message>\n`.
pub fn format_line(process: &[u8], message: fmt::Arguments<'_>) -> LineBuffer {
    compose_line(process, |line| {
        // `LineBuffer` never fails, an error can only come from an argument's `Display` impl.
        let _ = fmt::write(line, message);
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn formats_tagged_line() {
        let line = format_line(b"App", format_args!("starting with {} args", 3));

        assert_eq!(
            line.as_bytes().escape_ascii().to_string(),
            "\\x1b[32;1m[App]\\x1b[0m starting with 3 args\\n"
        );
        assert!(!line.is_truncated());
    }

    #[test]
    fn keeps_non_utf8_process_names() {
        let line = format_line(b"caf\xe9", format_args!("ready"));

        assert_eq!(line.as_bytes(), b"\x1b[32;1m[caf\xe9]\x1b[0m ready\n");
    }

    #[test]
    fn composes_raw_message_bytes() {
        let line = compose_line(b"App", |line| line.push_bytes(b"\xff\xfe raw"));

        assert_eq!(line.as_bytes(), b"\x1b[32;1m[App]\x1b[0m \xff\xfe raw\n");
    }

    #[test]
    fn empty_message() {
        let line = format_line(b"sh", format_args!(""));

        assert_eq!(line.as_bytes(), b"\x1b[32;1m[sh]\x1b[0m \n");
    }

    #[test_case(0; "empty")]
    #[test_case(LINE_CAPACITY - 1; "exactly full")]
    #[test_case(LINE_CAPACITY; "one over")]
    #[test_case(3 * LINE_CAPACITY; "far over")]
    fn push_bytes_keeps_at_most_capacity_minus_one(length: usize) {
        let mut line = LineBuffer::new();

        line.push_bytes(&vec![b'x'; length]);

        assert_eq!(line.as_bytes().len(), length.min(LINE_CAPACITY - 1));
        assert_eq!(line.is_truncated(), length > LINE_CAPACITY - 1);
    }

    #[test]
    fn long_message_loses_newline() {
        let message = "y".repeat(LINE_CAPACITY);

        let line = format_line(b"App", format_args!("{message}"));

        assert_eq!(line.as_bytes().len(), LINE_CAPACITY - 1);
        assert!(line.as_bytes().starts_with(b"\x1b[32;1m[App]\x1b[0m yyy"));
        assert_eq!(line.as_bytes().last(), Some(&b'y'));
        assert!(line.is_truncated());
    }

    #[test]
    fn truncation_may_split_characters() {
        let prefix = TAG_COLOR.len() + "[A]".len() + RESET.len() + 1;
        let filler = "z".repeat(LINE_CAPACITY - 2 - prefix);

        let line = format_line(b"A", format_args!("{filler}é"));

        assert_eq!(line.as_bytes().len(), LINE_CAPACITY - 1);
        assert_eq!(line.as_bytes().last(), Some(&0xc3));
    }
}
