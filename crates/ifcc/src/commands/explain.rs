//! The `explain` command: display documentation for error codes.

use std::io::Write;

use ifc_diagnostic::{ErrorCode, ErrorDocs};

use super::Status;

/// Display the documentation for `code_str`.
pub fn explain_error(code_str: &str, out: &mut impl Write, err: &mut impl Write) -> Status {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "Unknown error code: {code_str}");
        let _ = writeln!(err);
        let _ = writeln!(err, "Codes have the format EXXXX where X is a digit.");
        let _ = writeln!(err, "Examples: E1002, E2001");
        return Status::Failure;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = write!(out, "{doc}");
        Status::Success
    } else {
        let _ = writeln!(err, "No documentation available for {code} ({})", code.summary());
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_prints_docs() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert_eq!(explain_error("e1004", &mut out, &mut err), Status::Success);
        let out = String::from_utf8_lossy(&out);
        assert!(out.starts_with("# E1004: Instance Method Signature Mismatch"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_code_fails() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert_eq!(explain_error("E9999", &mut out, &mut err), Status::Failure);
        assert!(out.is_empty());
        assert!(String::from_utf8_lossy(&err).contains("Unknown error code: E9999"));
    }
}
