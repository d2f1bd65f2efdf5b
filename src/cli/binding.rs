//! Command bindings: a name, the handler it dispatches to and its help text.

use core::fmt;

use heapless::String;

use super::console::Console;
use super::error::Error;
use super::{MAX_HELP_LEN, MAX_NAME_LEN};

/// Result reported by a command handler.
///
/// Purely informational: the dispatcher behaves the same either way and only
/// echoes it when [`Config::report_status`](super::Config::report_status) is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The command completed.
    Ok,
    /// The command failed.
    Fail,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Status::Ok => defmt::write!(f, "Ok"),
            Status::Fail => defmt::write!(f, "Fail"),
        }
    }
}

/// Something a command name can dispatch to.
///
/// Handlers receive the argument count, the arguments themselves (`argv[0]`
/// is always the command name) and a [`Console`] to write their output to.
/// Any state a handler needs is carried by the handler value itself.
///
/// Plain functions and closures with the matching signature implement this
/// trait automatically:
///
/// ```rust
/// use libcli::cli::{Console, Status};
///
/// fn hello(_argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
///     console.write_str("Hello World!\n");
///     Status::Ok
/// }
/// ```
///
/// Handlers with their own state implement it directly:
///
/// ```rust
/// use core::cell::Cell;
/// use libcli::cli::{Console, Handler, Status};
///
/// struct Counter {
///     hits: Cell<u32>,
/// }
///
/// impl Handler for Counter {
///     fn call(&self, _argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
///         self.hits.set(self.hits.get() + 1);
///         console.print(format_args!("hits: {}", self.hits.get()));
///         Status::Ok
///     }
/// }
/// ```
pub trait Handler {
    /// Run the command.
    fn call(&self, argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status;
}

impl<F> Handler for F
where
    F: Fn(usize, &[&str], &mut Console<'_>) -> Status,
{
    fn call(&self, argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status {
        self(argc, argv, console)
    }
}

/// Function pointer form of a handler.
pub type CommandFn = fn(argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status;

/// A registered command.
///
/// Name and help text are copied in; the handler is borrowed for `'a`.
#[derive(Clone)]
pub struct Binding<'a> {
    name: String<MAX_NAME_LEN>,
    handler: &'a dyn Handler,
    help: String<MAX_HELP_LEN>,
}

impl<'a> Binding<'a> {
    /// Build a binding, validating name and help text.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyName`] / [`Error::EmptyHelp`] - empty strings
    /// * [`Error::InvalidName`] - the name contains a space or a control byte
    /// * [`Error::NameTooLong`] / [`Error::HelpTooLong`] - the string does not fit
    pub fn new(name: &str, handler: &'a dyn Handler, help: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if name.bytes().any(|b| b == b' ' || b.is_ascii_control()) {
            return Err(Error::InvalidName);
        }
        if help.is_empty() {
            return Err(Error::EmptyHelp);
        }

        let name = String::try_from(name).map_err(|_| Error::NameTooLong)?;
        let help = String::try_from(help).map_err(|_| Error::HelpTooLong)?;

        Ok(Self { name, handler, help })
    }

    /// The command name as typed by the user.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The one-line description shown by `help`.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The handler invoked on dispatch.
    pub fn handler(&self) -> &'a dyn Handler {
        self.handler
    }
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}
