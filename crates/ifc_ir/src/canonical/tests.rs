use super::*;
use pretty_assertions::assert_eq;

#[test]
fn markers_per_kind() {
    let params: CanonicalParams = [
        CanonicalParam::Req,
        CanonicalParam::Req,
        CanonicalParam::Opt,
        CanonicalParam::Key(Name::from("bar")),
        CanonicalParam::Key(Name::from("foo")),
    ]
    .into_iter()
    .collect();

    assert_eq!(params.to_string(), "(req, req, opt=, bar:, foo:)");
}

#[test]
fn variadic_markers() {
    let params = CanonicalParams::new(vec![
        CanonicalParam::Req,
        CanonicalParam::Opt,
        CanonicalParam::Rest,
        CanonicalParam::KeyRest,
    ]);

    assert_eq!(params.to_string(), "(req, opt=, *rest, **keyrest)");
    assert_eq!(params.len(), 4);
}

#[test]
fn empty_list() {
    let params = CanonicalParams::default();
    assert!(params.is_empty());
    assert_eq!(params.to_string(), "()");
}
