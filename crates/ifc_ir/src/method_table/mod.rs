//! Ordered method tables.
//!
//! Methods are stored in a single `Vec<MethodDef>` in definition order, with
//! a name -> index map for lookup. Redefining a method replaces its
//! signature in place and keeps its original position.

use rustc_hash::FxHashMap;

use crate::{Name, Signature};

/// A named method and its signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodDef {
    pub name: Name,
    pub signature: Signature,
}

/// Name -> signature map that remembers definition order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodTable {
    methods: Vec<MethodDef>,
    by_name: FxHashMap<Name, usize>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine a method.
    ///
    /// Returns the previous signature when the method already existed.
    pub fn define(&mut self, name: impl Into<Name>, signature: Signature) -> Option<Signature> {
        let name = name.into();
        if let Some(&idx) = self.by_name.get(&name) {
            let previous = std::mem::replace(&mut self.methods[idx].signature, signature);
            return Some(previous);
        }
        self.by_name.insert(name.clone(), self.methods.len());
        self.methods.push(MethodDef { name, signature });
        None
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.by_name
            .get(name)
            .and_then(|&i| self.methods.get(i))
            .map(|m| &m.signature)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodDef> {
        self.methods.iter()
    }

    /// Method names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.methods.iter().map(|m| &m.name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<N: Into<Name>> FromIterator<(N, Signature)> for MethodTable {
    fn from_iter<T: IntoIterator<Item = (N, Signature)>>(iter: T) -> Self {
        let mut table = MethodTable::new();
        for (name, signature) in iter {
            table.define(name, signature);
        }
        table
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
