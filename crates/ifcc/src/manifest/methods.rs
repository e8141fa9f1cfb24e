use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A JSON object of method name -> signature notation, in file order.
///
/// `serde_json` maps do not keep insertion order without its
/// `preserve_order` feature, so the entries are collected directly from
/// the map visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodList(Vec<(String, String)>);

impl MethodList {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, sig)| (name.as_str(), sig.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for MethodList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MethodListVisitor;

        impl<'de> Visitor<'de> for MethodListVisitor {
            type Value = MethodList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of method names to parameter lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<MethodList, A::Error> {
                let mut entries: Vec<(String, String)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, sig)) = map.next_entry::<String, String>()? {
                    if entries.iter().any(|(existing, _)| *existing == name) {
                        return Err(serde::de::Error::custom(format!(
                            "method `{name}` is listed twice"
                        )));
                    }
                    entries.push((name, sig));
                }
                Ok(MethodList(entries))
            }
        }

        deserializer.deserialize_map(MethodListVisitor)
    }
}
