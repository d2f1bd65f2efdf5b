//! Error types for the command interpreter

use core::fmt;

/// Errors returned by interpreter operations.
///
/// These are programmer errors: calling into a session that was never
/// initialized, registering a malformed or duplicate binding, removing a
/// binding that does not exist. Mistakes made by the person typing at the
/// terminal (unknown command, overlong line) are never reported through this
/// type; they are written to the output sink and the interpreter recovers on
/// its own.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The session has not been initialized, or was deinitialized.
    NotInitialized,
    /// `init` was called on a session that is already running.
    AlreadyInitialized,
    /// A command name was empty.
    EmptyName,
    /// A command name contains whitespace or control bytes and could never be typed.
    InvalidName,
    /// A command name exceeds [`MAX_NAME_LEN`](super::MAX_NAME_LEN).
    NameTooLong,
    /// A help text was empty.
    EmptyHelp,
    /// A help text exceeds [`MAX_HELP_LEN`](super::MAX_HELP_LEN).
    HelpTooLong,
    /// A binding with the same name is already registered.
    DuplicateName,
    /// The registry holds [`MAX_BINDINGS`](super::MAX_BINDINGS) entries already.
    RegistryFull,
    /// No binding with the given name is registered.
    NotFound,
    /// A configuration string does not fit its fixed-size field.
    ValueTooLong,
    /// A JSON configuration document could not be parsed.
    ConfigParse,
    /// A configuration could not be serialized into the provided buffer.
    ConfigSerialize,
    /// The registry contents no longer match their integrity seal.
    IntegrityViolation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::NotInitialized => "interpreter is not initialized",
            Error::AlreadyInitialized => "interpreter is already initialized",
            Error::EmptyName => "command name is empty",
            Error::InvalidName => "command name contains whitespace or control characters",
            Error::NameTooLong => "command name is too long",
            Error::EmptyHelp => "help text is empty",
            Error::HelpTooLong => "help text is too long",
            Error::DuplicateName => "a command with this name is already registered",
            Error::RegistryFull => "command registry is full",
            Error::NotFound => "no command with this name is registered",
            Error::ValueTooLong => "configuration value is too long",
            Error::ConfigParse => "configuration could not be parsed",
            Error::ConfigSerialize => "configuration could not be serialized",
            Error::IntegrityViolation => "command registry failed its integrity check",
        };
        f.write_str(text)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotInitialized => defmt::write!(f, "NotInitialized"),
            Error::AlreadyInitialized => defmt::write!(f, "AlreadyInitialized"),
            Error::EmptyName => defmt::write!(f, "EmptyName"),
            Error::InvalidName => defmt::write!(f, "InvalidName"),
            Error::NameTooLong => defmt::write!(f, "NameTooLong"),
            Error::EmptyHelp => defmt::write!(f, "EmptyHelp"),
            Error::HelpTooLong => defmt::write!(f, "HelpTooLong"),
            Error::DuplicateName => defmt::write!(f, "DuplicateName"),
            Error::RegistryFull => defmt::write!(f, "RegistryFull"),
            Error::NotFound => defmt::write!(f, "NotFound"),
            Error::ValueTooLong => defmt::write!(f, "ValueTooLong"),
            Error::ConfigParse => defmt::write!(f, "ConfigParse"),
            Error::ConfigSerialize => defmt::write!(f, "ConfigSerialize"),
            Error::IntegrityViolation => defmt::write!(f, "IntegrityViolation"),
        }
    }
}
