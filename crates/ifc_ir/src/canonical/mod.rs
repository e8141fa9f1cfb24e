//! Canonical parameter lists.
//!
//! The canonical form is what mismatch reports carry and what the exact
//! comparison policy compares: positional kinds in declaration order,
//! keyword names sorted, then a keyword rest marker. Parameter names of
//! positionals and the block parameter are not part of it.

use std::fmt;

use crate::Name;

/// One entry of a canonical parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalParam {
    Req,
    Opt,
    Rest,
    /// A named keyword, required or optional.
    Key(Name),
    KeyRest,
}

/// Renders with the per-kind markers used in diagnostics:
/// `req`, `opt=`, `*rest`, `name:`, `**keyrest`.
impl fmt::Display for CanonicalParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalParam::Req => f.write_str("req"),
            CanonicalParam::Opt => f.write_str("opt="),
            CanonicalParam::Rest => f.write_str("*rest"),
            CanonicalParam::Key(name) => write!(f, "{name}:"),
            CanonicalParam::KeyRest => f.write_str("**keyrest"),
        }
    }
}

/// A canonical parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CanonicalParams(Vec<CanonicalParam>);

impl CanonicalParams {
    pub fn new(params: Vec<CanonicalParam>) -> Self {
        CanonicalParams(params)
    }

    #[inline]
    pub fn as_slice(&self) -> &[CanonicalParam] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalParam> {
        self.0.iter()
    }
}

impl FromIterator<CanonicalParam> for CanonicalParams {
    fn from_iter<T: IntoIterator<Item = CanonicalParam>>(iter: T) -> Self {
        CanonicalParams(iter.into_iter().collect())
    }
}

/// Renders as `(req, opt=, *rest, bar:, **keyrest)`.
impl fmt::Display for CanonicalParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests;
