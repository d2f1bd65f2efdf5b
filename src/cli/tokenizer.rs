//! Splitting a completed line into arguments.

use core::str;

use heapless::Vec;

use super::{ASCII_LF, ASCII_SPACE, MAX_ARGS};

/// Errors produced while splitting a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// A token is not valid UTF-8.
    InvalidUtf8,
}

/// Arguments parsed from one line, borrowed from the line buffer.
///
/// `argv()[0]` is the command name.
#[derive(Debug, Clone)]
pub struct Args<'l> {
    argv: Vec<&'l str, MAX_ARGS>,
    overflowed: bool,
}

impl<'l> Args<'l> {
    /// Number of arguments, the command name included.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// The arguments in input order.
    pub fn argv(&self) -> &[&'l str] {
        &self.argv
    }

    /// The command name, if the line held any token at all.
    pub fn name(&self) -> Option<&'l str> {
        self.argv.first().copied()
    }

    /// Whether the line held no tokens.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Whether the line held more than [`MAX_ARGS`] tokens.
    ///
    /// Only the first [`MAX_ARGS`] are kept; the rest of the line is ignored.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

fn is_delimiter(byte: u8) -> bool {
    byte == ASCII_SPACE || byte == ASCII_LF
}

/// Split `line` into space/newline separated arguments.
///
/// Runs of delimiters never produce empty tokens. The final byte of the line
/// always closes the pending token, so a line that filled the buffer without
/// a trailing newline still yields its last argument intact.
pub fn tokenize(line: &[u8]) -> Result<Args<'_>, TokenizeError> {
    let mut argv = Vec::new();
    let mut overflowed = false;
    let mut start = None;
    let last = line.len().saturating_sub(1);

    for (i, &byte) in line.iter().enumerate() {
        let delimiter = is_delimiter(byte);
        if !delimiter && start.is_none() {
            start = Some(i);
        }
        if !delimiter && i != last {
            continue;
        }

        if let Some(begin) = start.take() {
            let end = if delimiter { i } else { i + 1 };
            let token =
                str::from_utf8(&line[begin..end]).map_err(|_| TokenizeError::InvalidUtf8)?;
            if argv.push(token).is_err() {
                overflowed = true;
                break;
            }
        }
    }

    Ok(Args { argv, overflowed })
}
