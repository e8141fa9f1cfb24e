//! Conformance report rendering.
//!
//! ```text
//! Stuff must implement:
//!   - Barable#bar
//!   - Fooable.foo
//! Stuff must implement correctly:
//!   - Stuffable#stuff:
//!     - expected arguments: (req, req, opt=, bar:, foo:)
//!     - actual arguments: (req, opt=, *rest, **keyrest)
//! ```
//!
//! Class-level methods render as `Interface.method`, instance-level methods
//! as `Interface#method`. Within an interface, class-level entries come
//! first. A section is only written when it has entries, and an empty
//! result renders as the empty string. There is no trailing newline.

use ifc_ir::Name;

use crate::{CheckResult, SignatureMismatch};

/// `Interface.method`
pub(crate) fn class_ref(interface: &Name, method: &Name) -> String {
    format!("{interface}.{method}")
}

/// `Interface#method`
pub(crate) fn instance_ref(interface: &Name, method: &Name) -> String {
    format!("{interface}#{method}")
}

/// Render `result` as the report for `subject`.
pub fn format_errors(subject: &str, result: &CheckResult) -> String {
    let missing: Vec<String> = result
        .iter()
        .flat_map(|(iface, record)| {
            let class = record
                .missing_class_methods
                .iter()
                .map(move |m| class_ref(iface, m));
            let instance = record
                .missing_instance_methods
                .iter()
                .map(move |m| instance_ref(iface, m));
            class.chain(instance)
        })
        .collect();

    let mismatched: Vec<(String, &SignatureMismatch)> = result
        .iter()
        .flat_map(|(iface, record)| {
            let class = record
                .class_method_signature_errors
                .iter()
                .map(move |(m, mismatch)| (class_ref(iface, m), mismatch));
            let instance = record
                .instance_method_signature_errors
                .iter()
                .map(move |(m, mismatch)| (instance_ref(iface, m), mismatch));
            class.chain(instance)
        })
        .collect();

    let mut lines: Vec<String> = Vec::new();

    if !missing.is_empty() {
        lines.push(format!("{subject} must implement:"));
        lines.extend(missing.iter().map(|r| format!("  - {r}")));
    }

    if !mismatched.is_empty() {
        lines.push(format!("{subject} must implement correctly:"));
        for (reference, mismatch) in &mismatched {
            lines.push(format!("  - {reference}:"));
            lines.push(format!("    - expected arguments: {}", mismatch.expected));
            lines.push(format!("    - actual arguments: {}", mismatch.actual));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests;
