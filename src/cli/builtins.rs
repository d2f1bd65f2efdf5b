//! Commands every session registers on `init`.

use super::binding::{CommandFn, Status};
use super::console::{CLEAR_SCREEN, Console};

/// Name of the built-in command listing.
pub const HELP_NAME: &str = "help";
/// Help text of [`HELP_NAME`].
pub const HELP_TEXT: &str = "Lists all commands";
/// Name of the built-in screen clear.
pub const CLEAR_NAME: &str = "clear";
/// Help text of [`CLEAR_NAME`].
pub const CLEAR_TEXT: &str = "Clears the screen";

pub(crate) static HELP: CommandFn = help;
pub(crate) static CLEAR: CommandFn = clear;

/// List every binding, in registration order, `help` included.
pub fn help(_argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
    console.write_str("\n");
    for binding in console.bindings() {
        console.write_str("* ");
        console.write_str(binding.name());
        console.write_str(": \n              ");
        console.write_str(binding.help());
        console.write_str("\n");
    }
    Status::Ok
}

/// Clear the terminal and home the cursor.
pub fn clear(_argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
    console.write_str(CLEAR_SCREEN);
    Status::Ok
}
