//! The interpreter session: line editing, dispatch and lifecycle.

use core::fmt;

use super::binding::{Binding, Handler, Status};
use super::builtins::{self, CLEAR_NAME, CLEAR_TEXT, HELP_NAME, HELP_TEXT};
use super::config::{Config, OverflowPolicy};
use super::console::{CLEAR_SCREEN, Console, Sink};
use super::error::Error;
use super::line_buffer::{Edit, LineBuffer};
use super::registry::Registry;
use super::tokenizer::{TokenizeError, tokenize};
use super::{ASCII_BACKSPACE, ASCII_LF, MAX_BINDINGS, RX_BUFFER_SIZE};

const BUFFER_FULL: &str = "\nBuffer is full\n";
const TOO_MANY_ARGUMENTS: &str = "Too many arguments\n";
const UNKNOWN_COMMAND: &str = "Unknown command: ";
const HELP_HINT: &str = "Type 'help' to list all commands\n";
const INVALID_INPUT: &str = "Invalid characters in input\n";

/// A command-line session bound to one output sink.
///
/// The session owns its line buffer and command table; handlers and their
/// context are borrowed for `'a`. Several sessions can live side by side,
/// each driven by its own input loop.
///
/// # Lifecycle
///
/// A new session is inert. [`init`](Self::init) registers the built-in
/// `help` and `clear` commands and writes the banner and first prompt;
/// every other operation returns [`Error::NotInitialized`] until then.
/// [`deinit`](Self::deinit) drops all state and returns the session to the
/// inert state.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{Cli, Console, Status};
///
/// fn add(argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status {
///     if argc != 3 {
///         console.print(format_args!("usage: add <a> <b>"));
///         return Status::Fail;
///     }
///     match (argv[1].parse::<i32>(), argv[2].parse::<i32>()) {
///         (Ok(a), Ok(b)) => {
///             console.print(format_args!("{}", a + b));
///             Status::Ok
///         }
///         _ => Status::Fail,
///     }
/// }
///
/// let mut output = Vec::new();
/// let mut cli = Cli::new(|byte: u8| {
///     output.push(byte);
///     Status::Ok
/// });
/// cli.init().unwrap();
/// cli.register("add", &add, "Adds two numbers").unwrap();
/// cli.input(b"add 3 4\r\n").unwrap();
/// drop(cli);
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("7\r\n"));
/// ```
pub struct Cli<'a, S: Sink> {
    sink: S,
    initialized: bool,
    line: LineBuffer<RX_BUFFER_SIZE>,
    registry: Registry<'a, MAX_BINDINGS>,
    config: Config,
}

impl<'a, S: Sink> Cli<'a, S> {
    /// Create an uninitialized session with the default [`Config`].
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, Config::default())
    }

    /// Create an uninitialized session.
    pub fn with_config(sink: S, config: Config) -> Self {
        Self {
            sink,
            initialized: false,
            line: LineBuffer::new(),
            registry: Registry::new(),
            config,
        }
    }

    /// Start the session.
    ///
    /// Registers `help` and `clear`, clears the screen if configured to,
    /// then writes the banner and the prompt.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyInitialized`] - the session is already running
    pub fn init(&mut self) -> Result<(), Error> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }

        self.line.clear();
        self.registry.clear();
        self.registry
            .register(Binding::new(HELP_NAME, &builtins::HELP, HELP_TEXT)?)?;
        self.registry
            .register(Binding::new(CLEAR_NAME, &builtins::CLEAR, CLEAR_TEXT)?)?;
        self.initialized = true;

        let mut console = Console::new(&mut self.sink, self.registry.as_slice(), self.config.color);
        if self.config.clear_on_init {
            console.write_str(CLEAR_SCREEN);
        }
        if let Some(banner) = &self.config.banner {
            console.write_str(banner);
            console.write_byte(ASCII_LF);
        }
        console.write_str(&self.config.prompt);

        debug!("cli initialized");
        Ok(())
    }

    /// Stop the session, dropping the line buffer and every binding.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    pub fn deinit(&mut self) -> Result<(), Error> {
        self.check()?;
        self.line.clear();
        self.registry.clear();
        self.initialized = false;
        debug!("cli deinitialized");
        Ok(())
    }

    /// Whether [`init`](Self::init) has run and [`deinit`](Self::deinit) has not.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Feed one received byte into the line editor.
    ///
    /// Carriage returns are dropped, backspace and DEL erase, everything else
    /// is appended and echoed. Input arriving on a full line is answered with
    /// a "Buffer is full" message and handled per [`Config::overflow`].
    ///
    /// Nothing is dispatched here; call [`process`](Self::process) afterwards.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the byte is dropped and nothing is written
    pub fn receive(&mut self, byte: u8) -> Result<(), Error> {
        self.check()?;

        let edit = self.line.edit(byte);
        let mut console = Console::new(&mut self.sink, self.registry.as_slice(), self.config.color);
        match edit {
            Edit::Discarded | Edit::Ignored => {}
            Edit::Stored(stored) => {
                if self.config.echo {
                    console.write_byte(stored);
                }
            }
            Edit::Erased => {
                if self.config.echo {
                    console.write_byte(ASCII_BACKSPACE);
                }
            }
            Edit::Full => {
                warn!("line buffer full, rejected {=u8:#x}", byte);
                console.write_str(BUFFER_FULL);
                if self.config.overflow == OverflowPolicy::Reset {
                    self.line.clear();
                    console.write_str(&self.config.prompt);
                }
            }
        }
        Ok(())
    }

    /// Whether the current line is complete: it ends in `\n` or filled the buffer.
    pub fn is_ready_to_process(&self) -> bool {
        self.initialized && self.line.is_ready()
    }

    /// Dispatch the current line if it is complete.
    ///
    /// Splits the line into arguments, runs the matching handler or reports
    /// an unknown command, then clears the line and writes the prompt. An
    /// empty line only re-prompts. Incomplete lines are left untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    pub fn process(&mut self) -> Result<(), Error> {
        self.check()?;
        if !self.line.is_ready() {
            return Ok(());
        }

        let mut console = Console::new(&mut self.sink, self.registry.as_slice(), self.config.color);
        if self.line.is_full() {
            console.write_byte(ASCII_LF);
        }

        match tokenize(self.line.as_bytes()) {
            Ok(args) => {
                if args.overflowed() {
                    console.write_str(TOO_MANY_ARGUMENTS);
                }
                if let Some(name) = args.name() {
                    match self.registry.find(name) {
                        Some(binding) => {
                            trace!("dispatching {=str} with {=usize} args", name, args.argc());
                            let status =
                                binding.handler().call(args.argc(), args.argv(), &mut console);
                            if self.config.report_status {
                                console.write_status(status);
                                console.write_byte(ASCII_LF);
                            }
                        }
                        None => {
                            console.write_status(Status::Fail);
                            console.write_str(UNKNOWN_COMMAND);
                            console.write_str(name);
                            console.write_byte(ASCII_LF);
                            console.write_str(HELP_HINT);
                        }
                    }
                }
            }
            Err(TokenizeError::InvalidUtf8) => {
                console.write_status(Status::Fail);
                console.write_str(INVALID_INPUT);
            }
        }

        console.write_str(&self.config.prompt);
        self.line.clear();
        Ok(())
    }

    /// [`receive`](Self::receive) followed by [`process`](Self::process).
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    pub fn receive_and_process(&mut self, byte: u8) -> Result<(), Error> {
        self.receive(byte)?;
        self.process()
    }

    /// Run every byte of `data` through [`receive_and_process`](Self::receive_and_process).
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    pub fn input(&mut self, data: &[u8]) -> Result<(), Error> {
        for &byte in data {
            self.receive_and_process(byte)?;
        }
        Ok(())
    }

    /// Register a command.
    ///
    /// Name and help text are copied; `handler` stays borrowed for the
    /// lifetime of the session.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    /// * any error from [`Binding::new`] or [`Registry::register`]
    pub fn register(
        &mut self,
        name: &str,
        handler: &'a dyn Handler,
        help: &str,
    ) -> Result<(), Error> {
        self.check()?;
        let binding = Binding::new(name, handler, help)?;
        self.register_binding(binding)
    }

    /// Register a prebuilt binding.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    /// * [`Error::DuplicateName`] / [`Error::RegistryFull`]
    pub fn register_binding(&mut self, binding: Binding<'a>) -> Result<(), Error> {
        self.check()?;
        debug!("registering {=str}", binding.name());
        self.registry.register(binding)
    }

    /// Remove the command called `name`.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    /// * [`Error::EmptyName`] / [`Error::NotFound`]
    pub fn unregister(&mut self, name: &str) -> Result<(), Error> {
        self.check()?;
        debug!("unregistering {=str}", name);
        self.registry.unregister(name).map(|_| ())
    }

    /// Formatted print to the terminal followed by a newline.
    ///
    /// Output longer than [`PRINT_BUFFER_SIZE`](super::PRINT_BUFFER_SIZE)
    /// bytes is truncated.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] - the session is not running
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        self.check()?;
        Console::new(&mut self.sink, self.registry.as_slice(), self.config.color).print(args);
        Ok(())
    }

    /// Check the command table against its integrity seal.
    ///
    /// # Errors
    ///
    /// * [`Error::IntegrityViolation`] - the table was corrupted
    pub fn verify_integrity(&self) -> Result<(), Error> {
        self.registry.verify()
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Change the configuration of a running session.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The pending input line.
    pub fn line(&self) -> &LineBuffer<RX_BUFFER_SIZE> {
        &self.line
    }

    /// The command table.
    pub fn registry(&self) -> &Registry<'a, MAX_BINDINGS> {
        &self.registry
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The output sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the session and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn check(&self) -> Result<(), Error> {
        if !self.initialized {
            warn!("cli used before init");
            return Err(Error::NotInitialized);
        }
        debug_assert!(
            self.registry.verify().is_ok(),
            "cli command table failed its integrity check"
        );
        Ok(())
    }
}

impl<S: Sink> fmt::Debug for Cli<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("initialized", &self.initialized)
            .field("line", &self.line.len())
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
