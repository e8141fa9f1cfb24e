use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn parses_defaults() {
    let parsed = parse_check_args(&args(&["m.json"])).unwrap();
    assert_eq!(parsed.manifest, PathBuf::from("m.json"));
    assert_eq!(parsed.format, OutputFormat::Text);
    assert_eq!(parsed.color, ColorMode::Auto);
    assert_eq!(parsed.policy(), SignaturePolicy::Compatible);
}

#[test]
fn parses_every_option() {
    let parsed =
        parse_check_args(&args(&["--format=json", "m.json", "--color=never", "--exact"])).unwrap();
    assert_eq!(parsed.format, OutputFormat::Json);
    assert_eq!(parsed.color, ColorMode::Never);
    assert_eq!(parsed.policy(), SignaturePolicy::Exact);
}

#[test]
fn rejects_bad_arguments() {
    assert_eq!(
        parse_check_args(&args(&[])).unwrap_err(),
        "missing manifest path"
    );
    assert!(parse_check_args(&args(&["m.json", "--format=xml"])).is_err());
    assert!(parse_check_args(&args(&["m.json", "--color=sometimes"])).is_err());
    assert!(parse_check_args(&args(&["m.json", "--verbose"])).is_err());
    assert!(parse_check_args(&args(&["a.json", "b.json"])).is_err());
}

#[test]
fn missing_manifest_is_a_failure() {
    let args = parse_check_args(&args(&["/nonexistent/m.json", "--color=never"])).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let status = check_manifest(&args, &mut out, &mut err, false);

    assert_eq!(status, Status::Failure);
    assert!(out.is_empty());
    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("error[E2004]: cannot read"));
    assert!(err.ends_with("\n\n"));
    assert!(!err.contains("failed to conform"));
}
