//! # libcli - Embedded command line interpreter
//!
//! A small line-editing command interpreter for microcontrollers. The
//! application feeds it received bytes one at a time, typically straight from
//! a UART, and it takes care of echo, backspace handling, argument splitting
//! and dispatch to registered commands. Output goes through a single
//! byte-at-a-time [`Sink`](cli::Sink).
//!
//! The library is designed for embedded systems: it is `no_std`, never
//! allocates and has all capacities fixed at compile time.
//!
//! ## Features
//!
//! - Byte-at-a-time line editing with echo, backspace and DEL
//! - Runtime command registration and removal
//! - Built-in `help` and `clear` commands
//! - Formatted output for command handlers
//! - Runtime configuration loadable from JSON
//! - CRC32 integrity seal over the command table
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust,no_run
//! use libcli::cli::{Cli, Console, Status};
//!
//! # fn uart_write(_byte: u8) {}
//! # fn uart_read() -> Option<u8> { None }
//! fn hello(_argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
//!     console.print(format_args!("Hello World!"));
//!     Status::Ok
//! }
//!
//! let mut cli = Cli::new(|byte: u8| {
//!     uart_write(byte);
//!     Status::Ok
//! });
//! cli.init().unwrap();
//! cli.register("hello", &hello, "Says hello").unwrap();
//!
//! loop {
//!     if let Some(byte) = uart_read() {
//!         cli.receive_and_process(byte).unwrap();
//!     }
//! }
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux hosts, for testing and simulation
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![doc(html_root_url = "https://shishir-dey.github.io/libcli/")]

#[macro_use]
mod log;

/// The command line interpreter.
///
/// Contains the session type, the command registry, line editing and the
/// output console handed to command handlers.
pub mod cli;
