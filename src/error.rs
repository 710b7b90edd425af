//! Error handling for SIP URI parsing
//!
//! A single error kind, `SyntaxMismatch`, carries the reason and the byte
//! offset where the input stopped matching the URI grammar.

use thiserror::Error;

/// Why an input failed to match `scheme ":" prefix ["@" host] [";" params] ["?" headers]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// No `:` separates the scheme from the rest
    MissingScheme,
    /// Scheme token is neither `sip` nor `sips`
    UnknownScheme(String),
    /// More than one `:` before the `@`
    TooManyPrefixTokens,
    /// `@` with nothing in front of it
    EmptyUser,
    /// No host characters could be isolated
    EmptyHost,
    /// Explicit port is empty, non-numeric or out of range
    InvalidPort(String),
    /// A delimiter the grammar does not allow at this position
    UnexpectedDelimiter(char),
    /// Whitespace or control character in the input
    InvalidCharacter(char),
    /// Input exceeds the configured length limit
    TooLong { length: usize, limit: usize },
}

impl std::fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchKind::MissingScheme => write!(f, "missing scheme separator ':'"),
            MismatchKind::UnknownScheme(token) => write!(f, "unrecognized scheme '{}'", token),
            MismatchKind::TooManyPrefixTokens => {
                write!(f, "user part holds more than user and password")
            }
            MismatchKind::EmptyUser => write!(f, "empty user before '@'"),
            MismatchKind::EmptyHost => write!(f, "empty host"),
            MismatchKind::InvalidPort(token) => write!(f, "invalid port '{}'", token),
            MismatchKind::UnexpectedDelimiter(c) => write!(f, "unexpected delimiter {:?}", c),
            MismatchKind::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            MismatchKind::TooLong { length, limit } => {
                write!(f, "URI length {} exceeds maximum {}", length, limit)
            }
        }
    }
}

/// Unified error type for URI parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SipUriError {
    /// Input does not conform to the SIP URI grammar
    #[error("Invalid SIP syntax at offset {position}: {kind}")]
    SyntaxMismatch { kind: MismatchKind, position: usize },
}

impl SipUriError {
    /// Create a syntax mismatch at the given byte offset
    pub fn mismatch(kind: MismatchKind, position: usize) -> Self {
        SipUriError::SyntaxMismatch { kind, position }
    }

    /// The reason for the mismatch
    pub fn kind(&self) -> &MismatchKind {
        match self {
            SipUriError::SyntaxMismatch { kind, .. } => kind,
        }
    }

    /// Byte offset into the input where parsing stopped
    pub fn position(&self) -> usize {
        match self {
            SipUriError::SyntaxMismatch { position, .. } => *position,
        }
    }

    /// Get error category for log fields
    pub fn category(&self) -> &'static str {
        match self.kind() {
            MismatchKind::MissingScheme | MismatchKind::UnknownScheme(_) => "scheme",
            MismatchKind::TooManyPrefixTokens | MismatchKind::EmptyUser => "userinfo",
            MismatchKind::EmptyHost | MismatchKind::InvalidPort(_) => "hostport",
            MismatchKind::UnexpectedDelimiter(_) | MismatchKind::InvalidCharacter(_) => "syntax",
            MismatchKind::TooLong { .. } => "limits",
        }
    }
}

/// Result type for URI parsing
pub type SipUriResult<T> = Result<T, SipUriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SipUriError::mismatch(MismatchKind::UnknownScheme("sipps".to_string()), 0);
        let text = err.to_string();
        assert!(text.contains("Invalid SIP syntax"));
        assert!(text.contains("sipps"));
        assert!(text.contains("offset 0"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SipUriError::mismatch(MismatchKind::MissingScheme, 3).category(), "scheme");
        assert_eq!(
            SipUriError::mismatch(MismatchKind::InvalidPort("x".into()), 9).category(),
            "hostport"
        );
        let too_long = SipUriError::mismatch(MismatchKind::TooLong { length: 10, limit: 5 }, 5);
        assert_eq!(too_long.category(), "limits");
        assert_eq!(too_long.position(), 5);
    }
}
