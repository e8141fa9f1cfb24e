//! Diagnostic system for conformance and manifest errors.
//!
//! Every diagnostic carries:
//! - An error code for searchability (`ifc explain E1002`)
//! - A clear message (what went wrong)
//! - Labels pointing at the method reference involved (`Fooable#foo`)
//! - Notes (why it's wrong) and suggestions (how to fix it)
//!
//! Emitters render diagnostics for terminals or as JSON for tooling.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
