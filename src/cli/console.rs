//! Output side of the interpreter.
//!
//! Everything the interpreter prints is decomposed into single bytes handed
//! to a [`Sink`]. [`Console`] sits on top of the sink and applies terminal
//! translation: `\n` goes out as `\r\n` and a backspace as the visual erase
//! sequence `\b \b`.

use core::fmt;

use heapless::String;

use super::binding::{Binding, Status};
use super::{ASCII_BACKSPACE, ASCII_LF, PRINT_BUFFER_SIZE};

/// Clears the terminal and moves the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const OK_TAG: &str = "[OK] ";
const FAIL_TAG: &str = "[FAIL] ";
const OK_TAG_COLOR: &str = "\x1b[32m[OK]  \x1b[0m ";
const FAIL_TAG_COLOR: &str = "\x1b[31m[FAIL]\x1b[0m ";

/// A byte-at-a-time output device, typically a UART transmit register.
///
/// Any `FnMut(u8) -> Status` is a sink:
///
/// ```rust
/// use libcli::cli::{Sink, Status};
///
/// let mut sent = 0usize;
/// let mut uart = |_byte: u8| {
///     sent += 1;
///     Status::Ok
/// };
/// uart.put_char(b'x');
/// ```
pub trait Sink {
    /// Transmit one byte.
    fn put_char(&mut self, byte: u8) -> Status;
}

impl<F> Sink for F
where
    F: FnMut(u8) -> Status,
{
    fn put_char(&mut self, byte: u8) -> Status {
        self(byte)
    }
}

/// Terminal output handed to command handlers.
///
/// Also gives handlers read access to the registered bindings, which is how
/// the built-in `help` command lists them.
pub struct Console<'c> {
    sink: &'c mut dyn Sink,
    bindings: &'c [Binding<'c>],
    color: bool,
}

impl<'c> Console<'c> {
    /// Wrap a sink.
    ///
    /// `color` selects ANSI coloured status tags.
    pub fn new(sink: &'c mut dyn Sink, bindings: &'c [Binding<'c>], color: bool) -> Self {
        Self {
            sink,
            bindings,
            color,
        }
    }

    fn put(&mut self, byte: u8) {
        if self.sink.put_char(byte) == Status::Fail {
            warn!("sink rejected byte {=u8:#x}", byte);
        }
    }

    /// Write one byte with terminal translation.
    pub fn write_byte(&mut self, byte: u8) {
        match byte {
            ASCII_LF => {
                self.put(b'\r');
                self.put(b'\n');
            }
            ASCII_BACKSPACE => {
                self.put(ASCII_BACKSPACE);
                self.put(b' ');
                self.put(ASCII_BACKSPACE);
            }
            _ => self.put(byte),
        }
    }

    /// Write a string with terminal translation.
    pub fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte);
        }
    }

    /// Formatted print followed by a newline.
    ///
    /// The text is rendered into a [`PRINT_BUFFER_SIZE`] byte buffer first;
    /// anything beyond that is silently dropped.
    pub fn print(&mut self, args: fmt::Arguments<'_>) {
        let mut buffer = Truncating::<PRINT_BUFFER_SIZE>::new();
        // Truncating never reports an error.
        let _ = fmt::write(&mut buffer, args);
        self.write_str(buffer.as_str());
        self.write_byte(ASCII_LF);
    }

    /// Write the `[OK]` or `[FAIL]` tag for `status`.
    pub fn write_status(&mut self, status: Status) {
        let tag = match (status, self.color) {
            (Status::Ok, false) => OK_TAG,
            (Status::Ok, true) => OK_TAG_COLOR,
            (Status::Fail, false) => FAIL_TAG,
            (Status::Fail, true) => FAIL_TAG_COLOR,
        };
        self.write_str(tag);
    }

    /// Every registered binding, in registration order.
    pub fn bindings(&self) -> &'c [Binding<'c>] {
        self.bindings
    }
}

impl fmt::Write for Console<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("bindings", &self.bindings.len())
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Fixed-size format target that keeps what fits and drops the rest.
struct Truncating<const N: usize> {
    text: String<N>,
}

impl<const N: usize> Truncating<N> {
    fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    fn as_str(&self) -> &str {
        &self.text
    }
}

impl<const N: usize> fmt::Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn render(f: impl FnOnce(&mut Console<'_>)) -> Vec<u8> {
        let mut out = Vec::new();
        let mut sink = |b: u8| {
            out.push(b);
            Status::Ok
        };
        let mut console = Console::new(&mut sink, &[], false);
        f(&mut console);
        out
    }

    #[test]
    fn test_newline_becomes_crlf() {
        assert_eq!(render(|c| c.write_str("a\nb")), b"a\r\nb");
    }

    #[test]
    fn test_backspace_becomes_erase_sequence() {
        assert_eq!(render(|c| c.write_byte(ASCII_BACKSPACE)), b"\x08 \x08");
    }

    #[test]
    fn test_print_appends_newline() {
        assert_eq!(render(|c| c.print(format_args!("x={}", 5))), b"x=5\r\n");
    }

    #[test]
    fn test_print_truncates() {
        let long = [b'z'; PRINT_BUFFER_SIZE + 40];
        let long = core::str::from_utf8(&long).unwrap();
        let out = render(|c| c.print(format_args!("{}", long)));
        // PRINT_BUFFER_SIZE bytes of text plus the CRLF.
        assert_eq!(out.len(), PRINT_BUFFER_SIZE + 2);
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(render(|c| c.write_status(Status::Ok)), b"[OK] ");
        assert_eq!(render(|c| c.write_status(Status::Fail)), b"[FAIL] ");

        let mut out = Vec::new();
        let mut sink = |b: u8| {
            out.push(b);
            Status::Ok
        };
        Console::new(&mut sink, &[], true).write_status(Status::Fail);
        assert_eq!(out, FAIL_TAG_COLOR.as_bytes());
    }

    #[test]
    fn test_colour_tags_share_width() {
        let mut out = Vec::new();
        let mut sink = |b: u8| {
            out.push(b);
            Status::Ok
        };
        Console::new(&mut sink, &[], true).write_status(Status::Ok);
        assert_eq!(out, b"\x1b[32m[OK]  \x1b[0m ");
        // "[OK]  " and "[FAIL]" are both six columns wide.
        assert_eq!(OK_TAG_COLOR.len(), FAIL_TAG_COLOR.len());
    }

    #[test]
    fn test_fmt_write() {
        use core::fmt::Write;
        assert_eq!(render(|c| write!(c, "{}-{}", 1, 2).unwrap()), b"1-2");
    }
}
