use super::*;
use ifc_ir::{CanonicalParam, CanonicalParams};
use pretty_assertions::assert_eq;

use crate::{MismatchReason, ViolationRecord};

fn mismatch(expected: Vec<CanonicalParam>, actual: Vec<CanonicalParam>) -> SignatureMismatch {
    SignatureMismatch {
        expected: CanonicalParams::new(expected),
        actual: CanonicalParams::new(actual),
        reasons: vec![MismatchReason::MissingRest],
    }
}

#[test]
fn renders_both_sections() {
    let result: CheckResult = [
        (
            "Barable",
            ViolationRecord {
                missing_instance_methods: vec![Name::from("bar")],
                ..ViolationRecord::default()
            },
        ),
        (
            "Fooable",
            ViolationRecord {
                missing_class_methods: vec![Name::from("foo")],
                ..ViolationRecord::default()
            },
        ),
        (
            "Stuffable",
            ViolationRecord {
                instance_method_signature_errors: vec![(
                    Name::from("stuff"),
                    mismatch(
                        vec![
                            CanonicalParam::Req,
                            CanonicalParam::Req,
                            CanonicalParam::Opt,
                            CanonicalParam::Key(Name::from("bar")),
                            CanonicalParam::Key(Name::from("foo")),
                        ],
                        vec![
                            CanonicalParam::Req,
                            CanonicalParam::Opt,
                            CanonicalParam::Rest,
                            CanonicalParam::KeyRest,
                        ],
                    ),
                )],
                ..ViolationRecord::default()
            },
        ),
    ]
    .into_iter()
    .collect();

    let expected = "\
Stuff must implement:
  - Barable#bar
  - Fooable.foo
Stuff must implement correctly:
  - Stuffable#stuff:
    - expected arguments: (req, req, opt=, bar:, foo:)
    - actual arguments: (req, opt=, *rest, **keyrest)";

    assert_eq!(format_errors("Stuff", &result), expected);
}

#[test]
fn empty_result_renders_nothing() {
    assert_eq!(format_errors("Stuff", &CheckResult::new()), "");
}

#[test]
fn class_entries_precede_instance_entries() {
    let result: CheckResult = [(
        "Widget",
        ViolationRecord {
            missing_class_methods: vec![Name::from("build")],
            missing_instance_methods: vec![Name::from("draw")],
            class_method_signature_errors: vec![(
                Name::from("load"),
                mismatch(vec![CanonicalParam::Rest], vec![]),
            )],
            ..ViolationRecord::default()
        },
    )]
    .into_iter()
    .collect();

    let expected = "\
Thing must implement:
  - Widget.build
  - Widget#draw
Thing must implement correctly:
  - Widget.load:
    - expected arguments: (*rest)
    - actual arguments: ()";

    assert_eq!(format_errors("Thing", &result), expected);
}

#[test]
fn empty_records_are_not_kept() {
    let result: CheckResult = [("Fooable", ViolationRecord::default())]
        .into_iter()
        .collect();
    assert!(result.is_empty());
    assert_eq!(format_errors("Good", &result), "");
}
