//! A single declared parameter.

use std::fmt;

use crate::Name;

/// The shape of a declared parameter.
///
/// Only the shape takes part in conformance checking; parameter types and
/// default values are never compared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKind {
    /// Positional, required (`name`).
    Req,
    /// Positional with a default (`name = value`).
    Opt,
    /// Captures remaining positional arguments (`*name`).
    Rest,
    /// Keyword, required (`name:`).
    KeyReq,
    /// Keyword with a default (`name: value`).
    KeyOpt,
    /// Captures remaining keyword arguments (`**name`).
    KeyRest,
    /// Trailing callback (`&name`). Never compared.
    Block,
}

impl ParamKind {
    /// Whether this parameter is passed by keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(self, ParamKind::KeyReq | ParamKind::KeyOpt | ParamKind::KeyRest)
    }

    /// Whether this parameter is passed by position.
    #[inline]
    pub fn is_positional(self) -> bool {
        matches!(self, ParamKind::Req | ParamKind::Opt | ParamKind::Rest)
    }

    /// Short tag for tracing output.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Req => "req",
            ParamKind::Opt => "opt",
            ParamKind::Rest => "rest",
            ParamKind::KeyReq => "keyreq",
            ParamKind::KeyOpt => "key",
            ParamKind::KeyRest => "keyrest",
            ParamKind::Block => "block",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared parameter: its shape plus its name.
///
/// Anonymous splats (`*`, `**`, `&`) carry an empty name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    pub kind: ParamKind,
    pub name: Name,
}

impl Param {
    pub fn new(kind: ParamKind, name: impl Into<Name>) -> Self {
        Param {
            kind,
            name: name.into(),
        }
    }

    #[inline]
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

/// Renders in parameter-list notation. Defaults are not stored, so optional
/// parameters render their default as `…`.
impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParamKind::Req => write!(f, "{}", self.name),
            ParamKind::Opt => write!(f, "{} = …", self.name),
            ParamKind::Rest => write!(f, "*{}", self.name),
            ParamKind::KeyReq => write!(f, "{}:", self.name),
            ParamKind::KeyOpt => write!(f, "{}: …", self.name),
            ParamKind::KeyRest => write!(f, "**{}", self.name),
            ParamKind::Block => write!(f, "&{}", self.name),
        }
    }
}
