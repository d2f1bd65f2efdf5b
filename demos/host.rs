//! Runs the interpreter on a desktop terminal.
//!
//! ```text
//! cargo run --example host --features std
//! ```
//!
//! The terminal already echoes typed characters and hands over whole lines,
//! so local echo is turned off.

use std::io::{self, Read, Write};

use libcli::cli::{Cli, Config, Console, Status};
use libcli::register_bindings;

fn hello(_argc: usize, _argv: &[&str], console: &mut Console<'_>) -> Status {
    console.print(format_args!("Hello World!"));
    Status::Ok
}

fn args(argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status {
    console.print(format_args!("argc = {}", argc));
    for (i, arg) in argv.iter().enumerate() {
        console.print(format_args!("argv[{}] = {}", i, arg));
    }
    Status::Ok
}

fn echo(argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status {
    if argc < 2 {
        console.print(format_args!("usage: echo <text>..."));
        return Status::Fail;
    }
    for (i, arg) in argv[1..].iter().enumerate() {
        if i > 0 {
            console.write_str(" ");
        }
        console.write_str(arg);
    }
    console.write_str("\n");
    Status::Ok
}

fn add(argc: usize, argv: &[&str], console: &mut Console<'_>) -> Status {
    if argc != 3 {
        console.print(format_args!("usage: add <a> <b>"));
        return Status::Fail;
    }
    match (argv[1].parse::<i64>(), argv[2].parse::<i64>()) {
        (Ok(a), Ok(b)) => {
            console.print(format_args!("{} + {} = {}", a, b, a + b));
            Status::Ok
        }
        _ => {
            console.print(format_args!("add: arguments must be integers"));
            Status::Fail
        }
    }
}

fn dummy(_argc: usize, _argv: &[&str], _console: &mut Console<'_>) -> Status {
    Status::Ok
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut config = Config::default();
    config.echo = false;
    config.report_status = true;

    let mut cli = Cli::with_config(
        move |byte: u8| {
            let mut out = stdout.lock();
            match out.write_all(&[byte]).and_then(|_| out.flush()) {
                Ok(()) => Status::Ok,
                Err(_) => Status::Fail,
            }
        },
        config,
    );
    cli.init()?;

    register_bindings!(cli, {
        "hello" => (&hello, "Prints hello world"),
        "args" => (&args, "Lists its arguments"),
        "echo" => (&echo, "Echoes its arguments"),
        "add" => (&add, "Adds two integers"),
        "dummy" => (&dummy, "Registered and removed again"),
    })?;
    cli.unregister("dummy")?;

    for byte in io::stdin().lock().bytes() {
        cli.receive_and_process(byte?)?;
    }

    cli.deinit()?;
    Ok(())
}
