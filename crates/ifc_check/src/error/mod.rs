//! The conformance error.
//!
//! All violations of one subject aggregate into a single
//! [`ConformanceError`]. Its `Display` is the formatted report; for tooling
//! it also expands into one [`Diagnostic`] per violation.

use ifc_diagnostic::{Diagnostic, ErrorCode};
use ifc_ir::Name;

use crate::format::{class_ref, instance_ref};
use crate::{CheckResult, SignatureMismatch};

/// A subject failed to conform to one or more of its declared interfaces.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{report}")]
pub struct ConformanceError {
    subject: Name,
    result: CheckResult,
    report: String,
}

impl ConformanceError {
    pub(crate) fn new(subject: Name, result: CheckResult, report: String) -> Self {
        ConformanceError {
            subject,
            result,
            report,
        }
    }

    pub fn subject(&self) -> &Name {
        &self.subject
    }

    /// The per-interface violation records.
    pub fn result(&self) -> &CheckResult {
        &self.result
    }

    /// The formatted report (same text as `Display`).
    pub fn report(&self) -> &str {
        &self.report
    }

    /// One diagnostic per violation, grouped by interface.
    ///
    /// Codes: E1001 missing class method, E1002 missing instance method,
    /// E1003 class method signature mismatch, E1004 instance method
    /// signature mismatch.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        let subject = &self.subject;
        let mut diagnostics = Vec::with_capacity(self.result.violation_count());

        for (iface, record) in self.result.iter() {
            for method in &record.missing_class_methods {
                diagnostics.push(missing(
                    ErrorCode::E1001,
                    subject,
                    iface,
                    &class_ref(iface, method),
                    "class method",
                    method,
                ));
            }
            for method in &record.missing_instance_methods {
                diagnostics.push(missing(
                    ErrorCode::E1002,
                    subject,
                    iface,
                    &instance_ref(iface, method),
                    "method",
                    method,
                ));
            }
            for (method, mismatch) in &record.class_method_signature_errors {
                diagnostics.push(mismatched(
                    ErrorCode::E1003,
                    subject,
                    &class_ref(iface, method),
                    &class_ref(subject, method),
                    mismatch,
                ));
            }
            for (method, mismatch) in &record.instance_method_signature_errors {
                diagnostics.push(mismatched(
                    ErrorCode::E1004,
                    subject,
                    &instance_ref(iface, method),
                    &instance_ref(subject, method),
                    mismatch,
                ));
            }
        }

        diagnostics
    }
}

fn missing(
    code: ErrorCode,
    subject: &Name,
    iface: &Name,
    reference: &str,
    kind: &str,
    method: &Name,
) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(format!("`{subject}` does not implement `{reference}`"))
        .with_label(reference, format!("required by `{iface}`"))
        .with_secondary_label(subject.as_str(), "declares conformance here")
        .with_suggestion(format!("define {kind} `{method}` on `{subject}`"))
}

fn mismatched(
    code: ErrorCode,
    subject: &Name,
    required: &str,
    provided: &str,
    mismatch: &SignatureMismatch,
) -> Diagnostic {
    let diag = Diagnostic::error(code)
        .with_message(format!(
            "`{subject}` implements `{required}` with incompatible arguments"
        ))
        .with_label(required, format!("expected arguments: {}", mismatch.expected))
        .with_secondary_label(provided, format!("actual arguments: {}", mismatch.actual));
    mismatch
        .reasons
        .iter()
        .fold(diag, |diag, reason| diag.with_note(reason.to_string()))
}
