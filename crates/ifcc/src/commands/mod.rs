//! Command handlers for the `ifc` CLI.
//!
//! Each handler writes to the streams it is given and returns a [`Status`];
//! `main` turns that into the process exit code.

use std::io::Write;

mod check;
mod explain;

pub use check::{check_manifest, parse_check_args, CheckArgs, OutputFormat};
pub use explain::explain_error;

/// How a command finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Every subject conforms.
    Success,
    /// At least one subject violates an interface it declared.
    Violations,
    /// Usage, I/O or manifest error.
    Failure,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Violations => 1,
            Status::Failure => 2,
        }
    }
}

/// `ifc version`
pub fn print_version(out: &mut impl Write) -> Status {
    let _ = writeln!(out, "ifc {}", env!("CARGO_PKG_VERSION"));
    Status::Success
}
