//! Method signatures.
//!
//! A `Signature` is an ordered list of [`Param`]s whose order is validated on
//! construction:
//!
//! ```text
//! req*  opt*  *rest?  req*  (key: | key: v)*  **keyrest?  &block?
//! ```
//!
//! Trailing required parameters (after optionals or a rest) are allowed, the
//! same as leading ones. Shape properties are computed once into
//! [`ShapeFlags`] so the comparator can gate work without rescanning.

mod parse;

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{CanonicalParam, CanonicalParams, Name, Param, ParamKind};

bitflags! {
    /// Pre-computed signature properties.
    ///
    /// Computed once at construction, never recomputed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ShapeFlags: u8 {
        /// Has at least one optional positional parameter.
        const HAS_OPTIONAL = 1 << 0;
        /// Has a positional rest (`*args`).
        const HAS_REST = 1 << 1;
        /// Has required positionals after an optional or rest.
        const HAS_POST_REQUIRED = 1 << 2;
        /// Has at least one named keyword.
        const HAS_KEYWORDS = 1 << 3;
        /// Has at least one required keyword.
        const HAS_REQUIRED_KEYWORDS = 1 << 4;
        /// Has a keyword rest (`**opts`).
        const HAS_KEYREST = 1 << 5;
        /// Has a trailing block parameter.
        const HAS_BLOCK = 1 << 6;
    }
}

/// Why a parameter list was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// A parameter appears where its kind is not allowed.
    #[error("parameter `{param}` ({kind}) cannot follow a {after} parameter")]
    OutOfOrder {
        param: String,
        kind: ParamKind,
        after: ParamKind,
    },

    /// Two parameters share a name.
    #[error("duplicate parameter name `{0}`")]
    DuplicateName(String),

    /// A non-splat parameter has no name, or the name is not an identifier.
    #[error("invalid parameter name `{0}`")]
    InvalidName(String),

    /// The textual notation could not be parsed.
    #[error("malformed parameter list at `{fragment}`: {reason}")]
    Malformed {
        fragment: String,
        reason: &'static str,
    },
}

/// Positional stage reached while validating parameter order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Leading,
    Optional,
    Rest,
    Post,
    Keyword,
    KeyRest,
    Block,
}

/// A validated method signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    params: SmallVec<[Param; 4]>,
    flags: ShapeFlags,
}

impl Signature {
    /// A signature with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a signature from parameters, validating order and names.
    pub fn new(params: impl IntoIterator<Item = Param>) -> Result<Self, SignatureError> {
        let params: SmallVec<[Param; 4]> = params.into_iter().collect();
        let mut stage = Stage::Leading;
        let mut last_kind = ParamKind::Req;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut flags = ShapeFlags::empty();

        for param in &params {
            check_name(param)?;
            if !param.name.is_empty() && !seen.insert(param.name.as_str()) {
                return Err(SignatureError::DuplicateName(param.name.to_string()));
            }

            let next = match param.kind {
                ParamKind::Req if stage == Stage::Leading => Some(Stage::Leading),
                ParamKind::Req if matches!(stage, Stage::Optional | Stage::Rest | Stage::Post) => {
                    flags |= ShapeFlags::HAS_POST_REQUIRED;
                    Some(Stage::Post)
                }
                ParamKind::Opt if stage <= Stage::Optional => {
                    flags |= ShapeFlags::HAS_OPTIONAL;
                    Some(Stage::Optional)
                }
                ParamKind::Rest if stage < Stage::Rest => {
                    flags |= ShapeFlags::HAS_REST;
                    Some(Stage::Rest)
                }
                ParamKind::KeyReq | ParamKind::KeyOpt if stage <= Stage::Keyword => {
                    flags |= ShapeFlags::HAS_KEYWORDS;
                    if param.kind == ParamKind::KeyReq {
                        flags |= ShapeFlags::HAS_REQUIRED_KEYWORDS;
                    }
                    Some(Stage::Keyword)
                }
                ParamKind::KeyRest if stage < Stage::KeyRest => {
                    flags |= ShapeFlags::HAS_KEYREST;
                    Some(Stage::KeyRest)
                }
                ParamKind::Block if stage < Stage::Block => {
                    flags |= ShapeFlags::HAS_BLOCK;
                    Some(Stage::Block)
                }
                _ => None,
            };

            let Some(next) = next else {
                return Err(SignatureError::OutOfOrder {
                    param: param.to_string(),
                    kind: param.kind,
                    after: last_kind,
                });
            };
            stage = next;
            last_kind = param.kind;
        }

        Ok(Signature { params, flags })
    }

    /// Start a builder.
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Parse parameter-list notation, e.g. `"thing, aaa:, bbb: 2, &blk"`.
    ///
    /// Surrounding parentheses are optional; an empty string is an empty
    /// signature.
    pub fn parse(src: &str) -> Result<Self, SignatureError> {
        Self::new(parse::parse_params(src)?)
    }

    #[inline]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    #[inline]
    pub fn flags(&self) -> ShapeFlags {
        self.flags
    }

    /// Number of required positionals, leading and trailing.
    pub fn required_count(&self) -> usize {
        self.count(ParamKind::Req)
    }

    pub fn optional_count(&self) -> usize {
        self.count(ParamKind::Opt)
    }

    #[inline]
    pub fn has_rest(&self) -> bool {
        self.flags.contains(ShapeFlags::HAS_REST)
    }

    #[inline]
    pub fn has_keyrest(&self) -> bool {
        self.flags.contains(ShapeFlags::HAS_KEYREST)
    }

    #[inline]
    pub fn has_block(&self) -> bool {
        self.flags.contains(ShapeFlags::HAS_BLOCK)
    }

    /// Named keyword parameters (required and optional), in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|p| matches!(p.kind, ParamKind::KeyReq | ParamKind::KeyOpt))
    }

    /// Look up a named keyword parameter.
    pub fn keyword(&self, name: &str) -> Option<&Param> {
        self.keywords().find(|p| p.name == name)
    }

    /// The comparison form: positional kinds in order, keyword names sorted,
    /// then `keyrest`. The block parameter is dropped.
    pub fn canonical(&self) -> CanonicalParams {
        let mut params: Vec<CanonicalParam> = self
            .params
            .iter()
            .filter_map(|p| match p.kind {
                ParamKind::Req => Some(CanonicalParam::Req),
                ParamKind::Opt => Some(CanonicalParam::Opt),
                ParamKind::Rest => Some(CanonicalParam::Rest),
                _ => None,
            })
            .collect();

        let mut keywords: Vec<Name> = self.keywords().map(|p| p.name.clone()).collect();
        keywords.sort();
        params.extend(keywords.into_iter().map(CanonicalParam::Key));

        if self.has_keyrest() {
            params.push(CanonicalParam::KeyRest);
        }

        CanonicalParams::new(params)
    }

    fn count(&self, kind: ParamKind) -> usize {
        self.params.iter().filter(|p| p.kind == kind).count()
    }
}

fn check_name(param: &Param) -> Result<(), SignatureError> {
    let name = param.name.as_str();
    let anonymous_ok = matches!(
        param.kind,
        ParamKind::Rest | ParamKind::KeyRest | ParamKind::Block
    );
    if name.is_empty() {
        return if anonymous_ok {
            Ok(())
        } else {
            Err(SignatureError::InvalidName(param.to_string()))
        };
    }
    if parse::is_identifier(name) {
        Ok(())
    } else {
        Err(SignatureError::InvalidName(name.to_string()))
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::parse(s)
    }
}

/// Renders as `(a, b = …, *rest, key:, &blk)`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

/// Incremental signature construction, validated on [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
}

impl SignatureBuilder {
    #[must_use]
    pub fn req(self, name: &str) -> Self {
        self.push(ParamKind::Req, name)
    }

    #[must_use]
    pub fn opt(self, name: &str) -> Self {
        self.push(ParamKind::Opt, name)
    }

    #[must_use]
    pub fn rest(self, name: &str) -> Self {
        self.push(ParamKind::Rest, name)
    }

    #[must_use]
    pub fn key_req(self, name: &str) -> Self {
        self.push(ParamKind::KeyReq, name)
    }

    #[must_use]
    pub fn key_opt(self, name: &str) -> Self {
        self.push(ParamKind::KeyOpt, name)
    }

    #[must_use]
    pub fn key_rest(self, name: &str) -> Self {
        self.push(ParamKind::KeyRest, name)
    }

    #[must_use]
    pub fn block(self, name: &str) -> Self {
        self.push(ParamKind::Block, name)
    }

    pub fn build(self) -> Result<Signature, SignatureError> {
        Signature::new(self.params)
    }

    fn push(mut self, kind: ParamKind, name: &str) -> Self {
        self.params.push(Param::new(kind, name));
        self
    }
}
