//! Owned identifiers for interfaces, subjects, methods and parameters.

use std::borrow::Borrow;
use std::fmt;

/// An identifier.
///
/// Cheap to compare and hash; hashes identically to the underlying `str`
/// so maps keyed by `Name` can be queried with `&str`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Name(Box<str>);

impl Name {
    /// Create a name from anything string-like.
    pub fn new(s: impl Into<Box<str>>) -> Self {
        Name(s.into())
    }

    /// The empty name (used for anonymous `*`, `**` and `&` parameters).
    pub fn empty() -> Self {
        Name(Box::from(""))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(Box::from(s))
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(s.into_boxed_str())
    }
}

impl From<&Name> for Name {
    fn from(n: &Name) -> Self {
        n.clone()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn lookup_by_str() {
        let mut map = FxHashMap::default();
        map.insert(Name::from("foo"), 1);
        assert_eq!(map.get("foo"), Some(&1));
        assert_eq!(map.get("bar"), None);
    }

    #[test]
    fn display_and_debug() {
        let name = Name::from("stuff");
        assert_eq!(name.to_string(), "stuff");
        assert_eq!(format!("{name:?}"), "\"stuff\"");
        assert!(Name::empty().is_empty());
    }
}
