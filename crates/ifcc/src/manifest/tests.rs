use super::*;
use pretty_assertions::assert_eq;

const STUFF: &str = r#"{
  "universal_base": ["new"],
  "interfaces": [
    { "name": "Fooable", "instance_methods": { "foo": "" } },
    { "name": "Barable", "instance_methods": { "bar": "" } },
    { "name": "Stuffable",
      "class_methods": { "new": "*args", "build": "" },
      "instance_methods": { "stuff": "thing, aaa:, bbb: 2" } }
  ],
  "subjects": [
    { "name": "Good", "implements": [["Fooable"]], "instance_methods": { "foo": "" } },
    { "name": "Bad3", "implements": [["Fooable"], ["Barable"]] },
    { "name": "Thing",
      "implements": [["Stuffable"]],
      "class_methods": { "build": "" },
      "instance_methods": { "stuff": "thing" } }
  ]
}"#;

#[test]
fn method_lists_keep_file_order() {
    let manifest =
        Manifest::from_json(r#"{ "interfaces": [{ "name": "I", "instance_methods": { "z": "", "a": "x" } }] }"#)
            .unwrap();
    let names: Vec<&str> = manifest.interfaces[0]
        .instance_methods
        .iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["z", "a"]);
}

#[test]
fn checks_every_subject_in_order() {
    let report = Manifest::from_json(STUFF)
        .unwrap()
        .check(SignaturePolicy::Compatible)
        .unwrap();

    let subjects: Vec<(&str, bool)> = report
        .outcomes
        .iter()
        .map(|(name, outcome)| (name.as_str(), outcome.is_ok()))
        .collect();
    assert_eq!(
        subjects,
        vec![("Good", true), ("Bad3", false), ("Thing", false)]
    );
    assert_eq!(report.failure_count(), 2);
    assert!(!report.is_success());

    let reports: Vec<String> = report.failures().map(ToString::to_string).collect();
    assert_eq!(
        reports,
        vec![
            "Bad3 must implement:\n  - Fooable#foo\n  - Barable#bar".to_string(),
            "Thing must implement correctly:\n  - Stuffable#stuff:\n    - expected arguments: (req, aaa:, bbb:)\n    - actual arguments: (req)".to_string(),
        ]
    );
}

#[test]
fn unknown_interface() {
    let manifest = Manifest::from_json(r#"{ "subjects": [{ "name": "X", "implements": [["Nope"]] }] }"#)
        .unwrap();
    let err = manifest.check(SignaturePolicy::Compatible).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2002);
    assert_eq!(err.to_string(), "`X` declares unknown interface `Nope`");
}

#[test]
fn duplicate_definitions() {
    let manifest = Manifest::from_json(
        r#"{ "interfaces": [{ "name": "I" }, { "name": "I" }] }"#,
    )
    .unwrap();
    let err = manifest.check(SignaturePolicy::Compatible).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2003);

    let manifest =
        Manifest::from_json(r#"{ "subjects": [{ "name": "S" }, { "name": "S" }] }"#).unwrap();
    let err = manifest.check(SignaturePolicy::Compatible).unwrap_err();
    assert_eq!(err.to_string(), "subject `S` is defined more than once");
}

#[test]
fn malformed_signature() {
    let manifest = Manifest::from_json(
        r#"{ "interfaces": [{ "name": "I", "instance_methods": { "m": "k:, a" } }] }"#,
    )
    .unwrap();
    let err = manifest.check(SignaturePolicy::Compatible).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
    assert!(err.to_string().starts_with("`I#m`: "));

    let diag = err.to_diagnostic();
    assert_eq!(diag.primary_target(), Some("I#m"));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn invalid_json_and_unknown_fields() {
    let err = Manifest::from_json("{").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2004);

    let err = Manifest::from_json(r#"{ "interfacez": [] }"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2004);

    let err = Manifest::from_json(
        r#"{ "interfaces": [{ "name": "I", "instance_methods": { "m": "", "m": "a" } }] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("listed twice"));
}

#[test]
fn missing_file() {
    let err = Manifest::load(Path::new("/nonexistent/ifc-manifest.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2004);
    assert!(err.to_string().starts_with("cannot read `/nonexistent/ifc-manifest.json`"));
}

#[test]
fn exact_policy_is_applied() {
    let src = r#"{
      "interfaces": [{ "name": "I", "instance_methods": { "m": "a" } }],
      "subjects": [{ "name": "S", "implements": [["I"]], "instance_methods": { "m": "a, b = 1" } }]
    }"#;
    let manifest = Manifest::from_json(src).unwrap();
    assert!(manifest.check(SignaturePolicy::Compatible).unwrap().is_success());
    assert!(!manifest.check(SignaturePolicy::Exact).unwrap().is_success());
}

#[test]
fn universal_base_from_manifest() {
    let manifest = Manifest::from_json(STUFF).unwrap();
    let options = manifest.check_options(SignaturePolicy::Compatible);
    assert!(options.universal_base.contains("new"));
}
