use std::io;
use std::process::{Command, Output};

/// Execute a command and capture its output
pub fn execute_command(cmd: &str, args: &[&str]) -> io::Result<Output> {
    Command::new(cmd).args(args).output()
}

/// Render a command line for log and error messages
pub fn display_command(cmd: &str, args: &[&str]) -> String {
    std::iter::once(cmd)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
