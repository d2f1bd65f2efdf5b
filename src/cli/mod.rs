//! Line-editing command interpreter
//!
//! This module provides the interactive command line for embedded devices.
//! Bytes arrive one at a time from a UART receive interrupt or polling loop,
//! are edited into a line, split into arguments and dispatched to the
//! handler registered under the first argument.
//!
//! ## Architecture
//!
//! ```text
//!   receive(byte)                        process()
//!        |                                   |
//!        v                                   v
//! +-------------+   line ready    +---------------+   name    +----------+
//! | LineBuffer  | --------------> |   tokenize    | --------> | Registry |
//! | (256 bytes) |                 | (16 args max) |           | (10 max) |
//! +-------------+                 +---------------+           +----------+
//!        |                                                          |
//!        | echo                                        Handler::call|
//!        v                                                          v
//! +---------------------------- Console ------------------------------+
//! |               \n -> \r\n, backspace -> \b \b                      |
//! +------------------------------- Sink ------------------------------+
//!                                  |
//!                                  v
//!                             put_char(u8)
//! ```
//!
//! ## Features
//!
//! - Byte-at-a-time line editing with echo, backspace and DEL
//! - Up to [`MAX_BINDINGS`] commands, registered and removed at runtime
//! - Built-in `help` and `clear` commands
//! - Formatted output for handlers through [`Console`]
//! - Runtime [`Config`] that can be loaded from JSON
//! - Integrity seal over the command table
//! - No heap, no `std`
//!
//! ## Usage
//!
//! ```rust
//! use libcli::cli::{Cli, Config, Console, Status};
//!
//! fn hello(_argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
//!     console.print(format_args!("Hello World!"));
//!     Status::Ok
//! }
//!
//! let mut config = Config::default();
//! config.clear_on_init = false;
//! config.banner = None;
//!
//! let mut output = Vec::new();
//! let mut cli = Cli::with_config(
//!     |byte: u8| {
//!         output.push(byte);
//!         Status::Ok
//!     },
//!     config,
//! );
//! cli.init().unwrap();
//! cli.register("hello", &hello, "Says hello").unwrap();
//!
//! // Normally fed from the UART receive path.
//! for &byte in b"hello\r\n" {
//!     cli.receive(byte).unwrap();
//!     if cli.is_ready_to_process() {
//!         cli.process().unwrap();
//!     }
//! }
//! drop(cli);
//!
//! assert_eq!(output, b"> hello\r\nHello World!\r\n> ");
//! ```
//!
//! ## Handlers with state
//!
//! Anything implementing [`Handler`] can be registered. Closures work as long
//! as they outlive the session:
//!
//! ```rust
//! use core::cell::Cell;
//! use libcli::cli::{Cli, Console, Status};
//!
//! let hits = Cell::new(0);
//! let count = |_argc: usize, _argv: &[&str], _console: &mut Console<'_>| {
//!     hits.set(hits.get() + 1);
//!     Status::Ok
//! };
//!
//! let mut cli = Cli::new(|_byte: u8| Status::Ok);
//! cli.init().unwrap();
//! cli.register("count", &count, "Counts invocations").unwrap();
//! cli.input(b"count\ncount\n").unwrap();
//! assert_eq!(hits.get(), 2);
//! ```

mod binding;
mod builtins;
mod config;
mod console;
mod error;
mod integrity;
mod line_buffer;
mod registry;
mod session;
mod tokenizer;


pub use binding::{Binding, CommandFn, Handler, Status};
pub use builtins::{CLEAR_NAME, CLEAR_TEXT, HELP_NAME, HELP_TEXT, clear, help};
pub use config::{Config, MAX_BANNER_LEN, MAX_PROMPT_LEN, OverflowPolicy};
pub use console::{CLEAR_SCREEN, Console, Sink};
pub use error::Error;
pub use integrity::Seal;
pub use line_buffer::{Edit, LineBuffer};
pub use registry::Registry;
pub use session::Cli;
pub use tokenizer::{Args, TokenizeError, tokenize};

/// Size of the receive line buffer in bytes.
pub const RX_BUFFER_SIZE: usize = 256;

/// Maximum number of registered commands, built-ins included.
pub const MAX_BINDINGS: usize = 10;

/// Maximum command name length in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum help text length in bytes.
pub const MAX_HELP_LEN: usize = 64;

/// Maximum number of arguments per line, the command name included.
pub const MAX_ARGS: usize = 16;

/// Maximum length of one [`Console::print`] call in bytes.
pub const PRINT_BUFFER_SIZE: usize = 128;

/// ASCII backspace.
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed.
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return.
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete.
pub const ASCII_DEL: u8 = 0x7F;
/// ASCII space.
pub const ASCII_SPACE: u8 = 0x20;

/// Register several commands on a [`Cli`] in one go.
///
/// Stops at the first failure and returns its error.
///
/// ```rust
/// use libcli::cli::{Cli, Console, Status};
/// use libcli::register_bindings;
///
/// fn on(_argc: usize, _argv: &[&str], _console: &mut Console<'_>) -> Status {
///     Status::Ok
/// }
/// fn off(_argc: usize, _argv: &[&str], _console: &mut Console<'_>) -> Status {
///     Status::Ok
/// }
///
/// let mut cli = Cli::new(|_byte: u8| Status::Ok);
/// cli.init().unwrap();
/// register_bindings!(cli, {
///     "on" => (&on, "Switches the relay on"),
///     "off" => (&off, "Switches the relay off"),
/// })
/// .unwrap();
/// assert!(cli.registry().contains("off"));
/// ```
#[macro_export]
macro_rules! register_bindings {
    ($cli:expr, { $($name:literal => ($handler:expr, $help:literal)),* $(,)? }) => {{
        let mut result: ::core::result::Result<(), $crate::cli::Error> = Ok(());
        $(
            if result.is_ok() {
                result = $cli.register($name, $handler, $help);
            }
        )*
        result
    }};
}
