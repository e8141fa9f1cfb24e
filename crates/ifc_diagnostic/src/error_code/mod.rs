//! Error codes for all diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1002`) with the first digit
//! indicating where it comes from. Used for `ifc explain` lookups and
//! documentation.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates the source:
/// - E1xxx: Conformance violations
/// - E2xxx: Signature notation and manifest errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Conformance Errors (E1xxx)
    /// Missing class-level method
    E1001,
    /// Missing instance-level method
    E1002,
    /// Class-level method signature mismatch
    E1003,
    /// Instance-level method signature mismatch
    E1004,

    // Manifest Errors (E2xxx)
    /// Malformed parameter list
    E2001,
    /// Unknown interface
    E2002,
    /// Duplicate definition
    E2003,
    /// Unreadable or invalid manifest
    E2004,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        // Conformance
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        // Manifest
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
        }
    }

    /// One-line summary, used as the heading of `ifc explain`.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "missing class method",
            ErrorCode::E1002 => "missing instance method",
            ErrorCode::E1003 => "class method signature mismatch",
            ErrorCode::E1004 => "instance method signature mismatch",
            ErrorCode::E2001 => "malformed parameter list",
            ErrorCode::E2002 => "unknown interface",
            ErrorCode::E2003 => "duplicate definition",
            ErrorCode::E2004 => "invalid manifest",
        }
    }

    /// Check if this is a conformance violation (E1xxx range).
    pub fn is_conformance_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is a manifest error (E2xxx range).
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2004
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serializes as the code string (`"E1002"`).
impl serde::Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Parse an error code string like `"E1002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`],
/// so it stays exhaustive without manual mirroring.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
