//! Fixed-capacity input line with byte-level editing.

use heapless::Vec;

use super::{ASCII_BACKSPACE, ASCII_CR, ASCII_DEL, ASCII_LF};

/// What a single [`LineBuffer::edit`] did to the line.
///
/// The line buffer itself never produces output; the session uses this to
/// decide what to echo back to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The byte was a carriage return and was dropped.
    Discarded,
    /// The byte was appended to the line.
    Stored(u8),
    /// A backspace or delete removed the last byte.
    Erased,
    /// A backspace or delete arrived on an empty line.
    Ignored,
    /// The line is full and the byte was rejected.
    Full,
}

/// A line of raw input bytes holding at most `N` bytes.
///
/// `len() <= N` holds after every operation. A full line is treated as
/// complete: [`is_ready`](Self::is_ready) reports `true` so the dispatcher
/// can consume it even though no newline was received.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Apply one input byte to the line.
    ///
    /// Rules, in order:
    ///
    /// 1. `\r` is always discarded so CRLF and LF terminals behave the same.
    /// 2. Backspace (`0x08`) and DEL (`0x7F`) remove the last byte, or do
    ///    nothing on an empty line. They are honoured on a full line so the
    ///    user can edit their way out of it.
    /// 3. Any other byte is rejected with [`Edit::Full`] once the line holds
    ///    `N` bytes, and appended otherwise.
    pub fn edit(&mut self, byte: u8) -> Edit {
        match byte {
            ASCII_CR => Edit::Discarded,
            ASCII_BACKSPACE | ASCII_DEL => match self.bytes.pop() {
                Some(_) => Edit::Erased,
                None => Edit::Ignored,
            },
            _ => match self.bytes.push(byte) {
                Ok(()) => Edit::Stored(byte),
                Err(_) => Edit::Full,
            },
        }
    }

    /// Whether the line can be handed to the tokenizer.
    ///
    /// True iff the most recently stored byte is `\n` or the line is full.
    pub fn is_ready(&self) -> bool {
        self.bytes.last() == Some(&ASCII_LF) || self.is_full()
    }

    /// Whether the line holds `N` bytes.
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// Number of bytes currently stored.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no bytes are stored.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Maximum number of bytes the line can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Drop every stored byte.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}
