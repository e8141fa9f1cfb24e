//! Parameter-list notation.
//!
//! ```text
//! name          required positional
//! name = expr   optional positional
//! *name         positional rest (name optional)
//! name:         required keyword
//! name: expr    optional keyword
//! **name        keyword rest (name optional)
//! &name         block (name optional)
//! ```
//!
//! Default expressions are skipped, not evaluated. Commas nested inside
//! brackets or string literals do not split parameters.

use super::SignatureError;
use crate::{Param, ParamKind};

/// Split `src` into parameters. Ordering is validated by the caller.
pub(super) fn parse_params(src: &str) -> Result<Vec<Param>, SignatureError> {
    let trimmed = strip_parens(src.trim());
    if trimmed.trim().is_empty() {
        return Ok(Vec::new());
    }

    split_top_level(trimmed)?
        .into_iter()
        .map(parse_one)
        .collect()
}

/// Whether `s` is a valid parameter identifier.
pub(super) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn strip_parens(s: &str) -> &str {
    s.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(s)
}

fn split_top_level(src: &str) -> Result<Vec<&str>, SignatureError> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in src.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| SignatureError::Malformed {
                        fragment: src[start..=i].trim().to_string(),
                        reason: "unbalanced closing bracket",
                    })?;
            }
            ',' if depth == 0 => {
                pieces.push(&src[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if quote.is_some() || depth != 0 {
        return Err(SignatureError::Malformed {
            fragment: src[start..].trim().to_string(),
            reason: "unterminated default expression",
        });
    }
    pieces.push(&src[start..]);
    Ok(pieces)
}

fn parse_one(piece: &str) -> Result<Param, SignatureError> {
    let piece = piece.trim();
    if piece.is_empty() {
        return Err(SignatureError::Malformed {
            fragment: piece.to_string(),
            reason: "empty parameter",
        });
    }

    if let Some(name) = piece.strip_prefix("**") {
        return Ok(Param::new(ParamKind::KeyRest, name.trim()));
    }
    if let Some(name) = piece.strip_prefix('*') {
        return Ok(Param::new(ParamKind::Rest, name.trim()));
    }
    if let Some(name) = piece.strip_prefix('&') {
        return Ok(Param::new(ParamKind::Block, name.trim()));
    }

    // Whichever of `:` / `=` comes first decides keyword vs optional, so
    // `a = {b: 1}` stays positional and `a: x == y` stays a keyword.
    let colon = piece.find(':');
    let equals = piece.find('=');
    match (colon, equals) {
        (Some(c), e) if e.map_or(true, |e| c < e) => {
            let (name, default) = (&piece[..c], piece[c + 1..].trim());
            let kind = if default.is_empty() {
                ParamKind::KeyReq
            } else {
                ParamKind::KeyOpt
            };
            Ok(Param::new(kind, name.trim()))
        }
        (_, Some(e)) => {
            let (name, default) = (&piece[..e], piece[e + 1..].trim());
            if default.is_empty() {
                return Err(SignatureError::Malformed {
                    fragment: piece.to_string(),
                    reason: "missing default value",
                });
            }
            Ok(Param::new(ParamKind::Opt, name.trim()))
        }
        _ => Ok(Param::new(ParamKind::Req, piece)),
    }
}
