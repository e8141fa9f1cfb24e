//! Checker configuration.

use ifc_ir::Name;
use rustc_hash::FxHashSet;

/// How strictly a subject's signature must match the interface's.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignaturePolicy {
    /// The subject must accept every call shape the interface accepts.
    /// Extra optional parameters, a new rest, and relaxed keywords are fine.
    #[default]
    Compatible,
    /// Canonical parameter lists must be identical.
    Exact,
}

/// Class-level method names every type already has.
///
/// Interfaces never require these, so they are left out of the class-method
/// comparison on both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniversalBase {
    names: FxHashSet<Name>,
}

impl UniversalBase {
    pub fn new<N: Into<Name>>(names: impl IntoIterator<Item = N>) -> Self {
        names.into_iter().collect()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<Name>> FromIterator<N> for UniversalBase {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        UniversalBase {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Options shared by every check a [`TypeSpace`](crate::TypeSpace) runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub policy: SignaturePolicy,
    pub universal_base: UniversalBase,
}

impl CheckOptions {
    #[must_use]
    pub fn with_policy(mut self, policy: SignaturePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_universal_base(mut self, base: UniversalBase) -> Self {
        self.universal_base = base;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_compatible_and_empty() {
        let opts = CheckOptions::default();
        assert_eq!(opts.policy, SignaturePolicy::Compatible);
        assert!(opts.universal_base.is_empty());
    }

    #[test]
    fn universal_base_lookup() {
        let base = UniversalBase::new(["new", "allocate", "new"]);
        assert_eq!(base.len(), 2);
        assert!(base.contains("new"));
        assert!(!base.contains("build"));
    }

    #[test]
    fn builder_methods() {
        let opts = CheckOptions::default()
            .with_policy(SignaturePolicy::Exact)
            .with_universal_base(UniversalBase::new(["new"]));
        assert_eq!(opts.policy, SignaturePolicy::Exact);
        assert!(opts.universal_base.contains("new"));
    }
}
