use super::*;
use pretty_assertions::assert_eq;

fn sig(src: &str) -> Signature {
    Signature::parse(src).unwrap()
}

#[test]
fn define_and_lookup() {
    let mut table = MethodTable::new();
    assert!(table.define("foo", sig("a")).is_none());
    assert!(table.define("bar", Signature::empty()).is_none());

    assert!(table.contains("foo"));
    assert!(!table.contains("baz"));
    assert_eq!(table.get("foo"), Some(&sig("a")));
    assert_eq!(table.len(), 2);
}

#[test]
fn redefinition_keeps_position() {
    let mut table = MethodTable::new();
    table.define("first", Signature::empty());
    table.define("second", Signature::empty());
    let previous = table.define("first", sig("x, y"));

    assert_eq!(previous, Some(Signature::empty()));
    let names: Vec<&str> = table.names().map(Name::as_str).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(table.get("first"), Some(&sig("x, y")));
}

#[test]
fn collect_from_pairs() {
    let table: MethodTable = [("a", Signature::empty()), ("b", sig("*rest"))]
        .into_iter()
        .collect();
    assert_eq!(table.iter().count(), 2);
    assert!(table.get("b").unwrap().has_rest());
}
