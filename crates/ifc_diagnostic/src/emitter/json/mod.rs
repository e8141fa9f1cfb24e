//! JSON Emitter
//!
//! Machine-readable diagnostic output: a JSON array with one object per
//! diagnostic, one object per line.

use std::io::Write;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;

        let _ = write!(self.writer, "\n  ");
        // Only fails on I/O errors; keep the array well-formed regardless.
        if serde_json::to_writer(&mut self.writer, diagnostic).is_err() {
            let _ = write!(self.writer, "null");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _failed: usize) {
        // The array itself is the summary.
    }
}
