//! Signature comparison.
//!
//! A subject's signature is compatible with an interface's when it accepts
//! every call shape the interface accepts. Widening is allowed, narrowing is
//! not. Block parameters never take part.
//!
//! # Rules
//!
//! Positional:
//! - required counts must be equal
//! - the subject may add optional positionals, and must accept at least as
//!   many as the interface unless it has a rest
//! - an interface rest requires a subject rest; the subject may add one
//!
//! Keyword:
//! - every required keyword the interface names must be named by the subject;
//!   an optional one may instead be absorbed by a subject keyword rest
//! - a required keyword may stay required or become optional; an optional
//!   keyword must stay optional
//! - extra subject keywords must be optional
//! - an interface keyword rest requires a subject keyword rest
//!
//! The comparison is pure: it never looks beyond the two signatures.

use std::fmt;

use ifc_ir::{CanonicalParams, Name, ParamKind, ShapeFlags, Signature};

use crate::SignaturePolicy;

/// One reason a subject signature fails to satisfy an interface signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MismatchReason {
    /// Different number of required positionals.
    RequiredCount { expected: usize, actual: usize },
    /// Fewer optional positionals and no rest to absorb the difference.
    TooFewOptional { expected: usize, actual: usize },
    /// The interface accepts any number of positionals, the subject does not.
    MissingRest,
    /// A keyword the interface names is absent.
    MissingKeyword(Name),
    /// An optional keyword became required.
    KeywordNowRequired(Name),
    /// The subject requires a keyword the interface never passes.
    ExtraRequiredKeyword(Name),
    /// The interface accepts arbitrary keywords, the subject does not.
    MissingKeyRest,
    /// Exact policy: compatible, but not identical.
    NotIdentical,
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchReason::RequiredCount { expected, actual } => write!(
                f,
                "expected {expected} required positional argument{}, found {actual}",
                if *expected == 1 { "" } else { "s" }
            ),
            MismatchReason::TooFewOptional { expected, actual } => write!(
                f,
                "expected at least {expected} optional positional argument{}, found {actual}",
                if *expected == 1 { "" } else { "s" }
            ),
            MismatchReason::MissingRest => f.write_str("missing a rest parameter (`*args`)"),
            MismatchReason::MissingKeyword(name) => write!(f, "missing keyword `{name}`"),
            MismatchReason::KeywordNowRequired(name) => {
                write!(f, "keyword `{name}` must stay optional")
            }
            MismatchReason::ExtraRequiredKeyword(name) => {
                write!(f, "keyword `{name}` is required but not part of the interface")
            }
            MismatchReason::MissingKeyRest => {
                f.write_str("missing a keyword rest parameter (`**opts`)")
            }
            MismatchReason::NotIdentical => f.write_str("parameter lists must match exactly"),
        }
    }
}

/// An incompatible pair of signatures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureMismatch {
    /// Canonical form of the interface's signature.
    pub expected: CanonicalParams,
    /// Canonical form of the subject's signature.
    pub actual: CanonicalParams,
    /// Never empty.
    pub reasons: Vec<MismatchReason>,
}

/// Compare a subject signature against the interface signature it implements.
///
/// Returns `None` when `actual` satisfies `expected` under `policy`.
pub fn compare(
    expected: &Signature,
    actual: &Signature,
    policy: SignaturePolicy,
) -> Option<SignatureMismatch> {
    let mut reasons = compatibility_reasons(expected, actual);

    if policy == SignaturePolicy::Exact
        && reasons.is_empty()
        && expected.canonical() != actual.canonical()
    {
        reasons.push(MismatchReason::NotIdentical);
    }

    if reasons.is_empty() {
        return None;
    }

    Some(SignatureMismatch {
        expected: expected.canonical(),
        actual: actual.canonical(),
        reasons,
    })
}

fn compatibility_reasons(expected: &Signature, actual: &Signature) -> Vec<MismatchReason> {
    let mut reasons = Vec::new();
    let want = expected.flags();
    let have = actual.flags();

    let (expected_req, actual_req) = (expected.required_count(), actual.required_count());
    if expected_req != actual_req {
        reasons.push(MismatchReason::RequiredCount {
            expected: expected_req,
            actual: actual_req,
        });
    }

    if !have.contains(ShapeFlags::HAS_REST) {
        let (expected_opt, actual_opt) = (expected.optional_count(), actual.optional_count());
        if actual_opt < expected_opt {
            reasons.push(MismatchReason::TooFewOptional {
                expected: expected_opt,
                actual: actual_opt,
            });
        }
        if want.contains(ShapeFlags::HAS_REST) {
            reasons.push(MismatchReason::MissingRest);
        }
    }

    if want.contains(ShapeFlags::HAS_KEYWORDS) {
        let absorbs_optional = have.contains(ShapeFlags::HAS_KEYREST);
        for keyword in expected.keywords() {
            match actual.keyword(keyword.name.as_str()) {
                None if absorbs_optional && keyword.kind == ParamKind::KeyOpt => {}
                None => reasons.push(MismatchReason::MissingKeyword(keyword.name.clone())),
                Some(found)
                    if keyword.kind == ParamKind::KeyOpt && found.kind == ParamKind::KeyReq =>
                {
                    reasons.push(MismatchReason::KeywordNowRequired(keyword.name.clone()));
                }
                Some(_) => {}
            }
        }
    }

    if have.contains(ShapeFlags::HAS_REQUIRED_KEYWORDS) {
        for keyword in actual.keywords() {
            if keyword.kind == ParamKind::KeyReq
                && expected.keyword(keyword.name.as_str()).is_none()
            {
                reasons.push(MismatchReason::ExtraRequiredKeyword(keyword.name.clone()));
            }
        }
    }

    if want.contains(ShapeFlags::HAS_KEYREST) && !have.contains(ShapeFlags::HAS_KEYREST) {
        reasons.push(MismatchReason::MissingKeyRest);
    }

    reasons
}
