use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("`Bad` does not implement `Fooable#foo`")
        .with_label("Fooable#foo", "required here")
        .with_secondary_label("Bad", "declared conformance here")
        .with_note("interfaces are checked when the definition is finished")
        .with_suggestion("define `foo` on `Bad`");

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.primary_target(), Some("Fooable#foo"));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_unlabeled_diagnostic_has_no_target() {
    let diag = Diagnostic::error(ErrorCode::E2003).with_message("duplicate");
    assert_eq!(diag.primary_target(), None);
    assert_eq!(diag.to_string(), "error [E2003]: duplicate");
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("signature mismatch")
        .with_label("Stuffable#stuff", "expected (req, aaa:, bbb:)")
        .with_note("missing keyword `aaa`");

    assert_eq!(
        diag.to_string(),
        "error [E1004]: signature mismatch\n  --> Stuffable#stuff: expected (req, aaa:, bbb:)\n  = note: missing keyword `aaa`"
    );
}
