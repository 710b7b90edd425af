//! Input validation utilities for URI parsing
//!
//! Screens raw input before the state machine runs and checks the host/port
//! segments once they are isolated.

use crate::error::{MismatchKind, SipUriError, SipUriResult};
use crate::limits::ParserLimits;

/// Check length and reject whitespace or control characters anywhere in the input
pub fn validate_input(input: &str, limits: &ParserLimits) -> SipUriResult<()> {
    if input.len() > limits.max_uri_length {
        return Err(SipUriError::mismatch(
            MismatchKind::TooLong {
                length: input.len(),
                limit: limits.max_uri_length,
            },
            limits.max_uri_length,
        ));
    }

    for (pos, ch) in input.char_indices() {
        if ch.is_whitespace() || ch.is_control() {
            return Err(SipUriError::mismatch(MismatchKind::InvalidCharacter(ch), pos));
        }
    }
    Ok(())
}

/// Validate an explicit port token; `offset` is where the token starts
pub fn validate_port(token: &str, offset: usize) -> SipUriResult<u16> {
    // u16::from_str accepts a leading '+', the grammar does not
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SipUriError::mismatch(
            MismatchKind::InvalidPort(token.to_string()),
            offset,
        ));
    }
    token
        .parse::<u16>()
        .map_err(|_| SipUriError::mismatch(MismatchKind::InvalidPort(token.to_string()), offset))
}

/// Validate an isolated host; `offset` is where the host starts
pub fn validate_host(host: &str, offset: usize) -> SipUriResult<()> {
    if host.is_empty() {
        return Err(SipUriError::mismatch(MismatchKind::EmptyHost, offset));
    }
    if let Some(pos) = host.find('@') {
        return Err(SipUriError::mismatch(
            MismatchKind::UnexpectedDelimiter('@'),
            offset + pos,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rejects_whitespace_and_controls() {
        let limits = ParserLimits::default();
        assert!(validate_input("sip:alice@atlanta.com", &limits).is_ok());

        let err = validate_input("sip:alice @atlanta.com", &limits).unwrap_err();
        assert_matches!(err.kind(), MismatchKind::InvalidCharacter(' '));
        assert_eq!(err.position(), 9);

        let err = validate_input("sip:alice\r\n@atlanta.com", &limits).unwrap_err();
        assert_matches!(err.kind(), MismatchKind::InvalidCharacter('\r'));
    }

    #[test]
    fn test_length_limit() {
        let limits = ParserLimits::default().with_max_uri_length(10);
        let err = validate_input("sip:alice@atlanta.com", &limits).unwrap_err();
        assert_matches!(err.kind(), MismatchKind::TooLong { length: 21, limit: 10 });
    }

    #[test]
    fn test_port_validation() {
        assert_eq!(validate_port("5070", 0).unwrap(), 5070);
        assert!(validate_port("", 0).is_err());
        assert!(validate_port("+80", 0).is_err());
        assert!(validate_port("70000", 0).is_err());
        assert!(validate_port("50a0", 0).is_err());
    }

    #[test]
    fn test_host_validation() {
        assert!(validate_host("atlanta.com", 0).is_ok());
        assert_matches!(
            validate_host("", 4).unwrap_err().kind(),
            MismatchKind::EmptyHost
        );
        let err = validate_host("b@c", 6).unwrap_err();
        assert_matches!(err.kind(), MismatchKind::UnexpectedDelimiter('@'));
        assert_eq!(err.position(), 7);
    }
}
