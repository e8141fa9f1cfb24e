//! The `check` command: replay a manifest and report violations.

use std::io::Write;
use std::path::PathBuf;

use ifc_check::SignaturePolicy;
use ifc_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, JsonEmitter, TerminalEmitter};

use super::Status;
use crate::manifest::{CheckReport, Manifest};

/// Report format for `ifc check`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The conformance reports as plain text.
    #[default]
    Text,
    /// A JSON array of diagnostics.
    Json,
}

/// Parsed `ifc check` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckArgs {
    pub manifest: PathBuf,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub exact: bool,
}

impl CheckArgs {
    pub fn policy(&self) -> SignaturePolicy {
        if self.exact {
            SignaturePolicy::Exact
        } else {
            SignaturePolicy::Compatible
        }
    }
}

/// Parse the arguments following `ifc check`.
pub fn parse_check_args(args: &[String]) -> Result<CheckArgs, String> {
    let mut manifest = None;
    let mut format = OutputFormat::default();
    let mut color = ColorMode::default();
    let mut exact = false;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--format=") {
            format = match value {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => return Err(format!("unknown format `{other}` (expected text or json)")),
            };
        } else if let Some(value) = arg.strip_prefix("--color=") {
            color = value.parse()?;
        } else if arg == "--exact" {
            exact = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else if manifest.is_none() {
            manifest = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }

    let manifest = manifest.ok_or_else(|| "missing manifest path".to_string())?;
    Ok(CheckArgs {
        manifest,
        format,
        color,
        exact,
    })
}

/// Check the manifest named by `args`.
///
/// Reports go to `out`. In text mode, manifest errors and the summary go to
/// `err`; `err_is_tty` decides colour for [`ColorMode::Auto`].
#[tracing::instrument(level = "debug", skip_all, fields(manifest = %args.manifest.display()))]
pub fn check_manifest(
    args: &CheckArgs,
    out: &mut impl Write,
    err: &mut impl Write,
    err_is_tty: bool,
) -> Status {
    let outcome = Manifest::load(&args.manifest).and_then(|m| m.check(args.policy()));

    match (args.format, outcome) {
        (OutputFormat::Text, Ok(report)) => {
            write_text_reports(&report, out);
            let failures = report.failure_count();
            if failures > 0 {
                let mut emitter = TerminalEmitter::with_color_mode(err, args.color, err_is_tty);
                emitter.emit_summary(failures);
                emitter.flush();
            }
            status_of(&report)
        }
        (OutputFormat::Text, Err(e)) => {
            let mut emitter = TerminalEmitter::with_color_mode(err, args.color, err_is_tty);
            emitter.emit(&e.to_diagnostic());
            emitter.flush();
            Status::Failure
        }
        (OutputFormat::Json, Ok(report)) => {
            let diagnostics: Vec<Diagnostic> =
                report.failures().flat_map(|f| f.to_diagnostics()).collect();
            write_json(&diagnostics, out);
            status_of(&report)
        }
        (OutputFormat::Json, Err(e)) => {
            write_json(&[e.to_diagnostic()], out);
            Status::Failure
        }
    }
}

fn status_of(report: &CheckReport) -> Status {
    if report.is_success() {
        Status::Success
    } else {
        Status::Violations
    }
}

/// One report per failing subject, separated by blank lines.
fn write_text_reports(report: &CheckReport, out: &mut impl Write) {
    for (i, failure) in report.failures().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{failure}");
    }
}

fn write_json(diagnostics: &[Diagnostic], out: &mut impl Write) {
    let mut emitter = JsonEmitter::new(out);
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
