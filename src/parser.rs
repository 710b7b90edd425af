//! SIP URI parsing
//!
//! The parser is a small explicit state machine over the raw input. Each
//! state owns one component of `scheme ":" prefix ["@" host] [";" params] ["?" headers]`
//! and hands over to the next on `:`, `@`, `;` or `?`.
//!
//! Ambiguous inputs are resolved positionally:
//!
//! - With an `@` anywhere after the scheme, the text before the first `@` is
//!   `user[:password]` and the text after it is the host part.
//! - Without an `@`, a `:` after the host introduces the port, never a password.
//! - A `;` before the `@` belongs to the user (`alice;day=tuesday@atlanta.com`).
//!
//! ```
//! use sipuri::SipUriParser;
//!
//! let uri = SipUriParser::new()
//!     .parse("sip:alice:secretword@atlanta.com;transport=tcp")
//!     .unwrap();
//! assert_eq!(uri.user(), Some("alice"));
//! assert_eq!(uri.password(), Some("secretword"));
//! assert_eq!(uri.host(), Some("atlanta.com"));
//! assert_eq!(uri.port(), Some("5060"));
//! assert_eq!(uri.uri_parameters(), Some("transport=tcp"));
//! ```

use tracing::{debug, trace, warn};

use crate::error::{MismatchKind, SipUriError, SipUriResult};
use crate::limits::{ParserLimits, SchemeMatching};
use crate::types::{Scheme, SipUri};
use crate::validation;

/// Parse a URI with the default limits
pub fn parse(input: &str) -> SipUriResult<SipUri> {
    SipUriParser::new().parse(input)
}

/// Stateless SIP URI parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SipUriParser {
    limits: ParserLimits,
}

impl SipUriParser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom limits
    pub fn with_limits(limits: ParserLimits) -> Self {
        Self { limits }
    }

    /// Get the current parser limits
    pub fn limits(&self) -> &ParserLimits {
        &self.limits
    }

    /// Parse `input` into a [`SipUri`], or report where it stopped matching
    pub fn parse(&self, input: &str) -> SipUriResult<SipUri> {
        validation::validate_input(input, &self.limits)?;

        let mut machine = Machine::new(input, self.limits.scheme_matching);
        while machine.state != State::Done {
            trace!(state = ?machine.state, pos = machine.pos, "uri parser step");
            machine.step()?;
        }

        let uri = machine.uri;
        debug!(input, uri = %uri, "parsed SIP URI");
        Ok(uri)
    }

    /// Parse `input`, logging a mismatch and returning the empty record instead of an error
    pub fn parse_lenient(&self, input: &str) -> SipUri {
        match self.parse(input) {
            Ok(uri) => uri,
            Err(err) => {
                warn!(input, category = err.category(), "{}", err);
                SipUri::default()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scheme,
    PrefixOrHost,
    User,
    Password,
    Host,
    Port,
    Params,
    Headers,
    Done,
}

struct Machine<'a> {
    input: &'a str,
    pos: usize,
    state: State,
    scheme_matching: SchemeMatching,
    uri: SipUri,
}

impl<'a> Machine<'a> {
    fn new(input: &'a str, scheme_matching: SchemeMatching) -> Self {
        Self {
            input,
            pos: 0,
            state: State::Scheme,
            scheme_matching,
            uri: SipUri::default(),
        }
    }

    fn step(&mut self) -> SipUriResult<()> {
        match self.state {
            State::Scheme => self.scheme(),
            State::PrefixOrHost => {
                // The first '@' decides whether a prefix is a user or a host
                self.state = if self.input[self.pos..].contains('@') {
                    State::User
                } else {
                    State::Host
                };
                Ok(())
            }
            State::User => self.user(),
            State::Password => self.password(),
            State::Host => self.host(),
            State::Port => self.port(),
            State::Params => {
                let (end, stop) = self.scan_until(b"?");
                self.uri.uri_parameters = Some(self.input[self.pos..end].to_string());
                self.advance(end, stop);
                Ok(())
            }
            State::Headers => {
                self.uri.headers = Some(self.input[self.pos..].to_string());
                self.pos = self.input.len();
                self.state = State::Done;
                Ok(())
            }
            State::Done => Ok(()),
        }
    }

    fn scheme(&mut self) -> SipUriResult<()> {
        let colon = self
            .input
            .find(':')
            .ok_or_else(|| SipUriError::mismatch(MismatchKind::MissingScheme, self.input.len()))?;
        let token = &self.input[..colon];

        let scheme = match self.scheme_matching {
            SchemeMatching::Strict => token.parse::<Scheme>().ok(),
            SchemeMatching::CaseInsensitive => token.to_ascii_lowercase().parse::<Scheme>().ok(),
        }
        .ok_or_else(|| SipUriError::mismatch(MismatchKind::UnknownScheme(token.to_string()), 0))?;

        self.uri.scheme = Some(scheme);
        self.uri.port = Some(scheme.default_port().to_string());
        self.pos = colon + 1;
        self.state = State::PrefixOrHost;
        Ok(())
    }

    fn user(&mut self) -> SipUriResult<()> {
        // ';' and '?' stay in the user token
        let (end, stop) = self.scan_until(b":@");
        if end == self.pos {
            return Err(SipUriError::mismatch(MismatchKind::EmptyUser, self.pos));
        }
        self.uri.user = Some(self.input[self.pos..end].to_string());
        self.pos = end + 1;
        self.state = match stop {
            Some(b':') => State::Password,
            _ => State::Host,
        };
        Ok(())
    }

    fn password(&mut self) -> SipUriResult<()> {
        let (end, stop) = self.scan_until(b":@");
        if stop == Some(b':') {
            return Err(SipUriError::mismatch(MismatchKind::TooManyPrefixTokens, end));
        }
        self.uri.password = Some(self.input[self.pos..end].to_string());
        self.pos = end + 1;
        self.state = State::Host;
        Ok(())
    }

    fn host(&mut self) -> SipUriResult<()> {
        let start = self.pos;
        let (end, stop) = if self.input[start..].starts_with('[') {
            self.ipv6_reference()?
        } else {
            self.scan_until(b":;?@")
        };

        let host = &self.input[start..end];
        validation::validate_host(host, start)?;
        if stop == Some(b'@') {
            return Err(SipUriError::mismatch(MismatchKind::UnexpectedDelimiter('@'), end));
        }

        self.uri.host = Some(host.to_string());
        self.advance(end, stop);
        Ok(())
    }

    /// Bracketed IPv6 reference; colons inside the brackets are not port separators
    fn ipv6_reference(&self) -> SipUriResult<(usize, Option<u8>)> {
        let close = self.input[self.pos..]
            .find(']')
            .map(|i| self.pos + i)
            .ok_or_else(|| {
                SipUriError::mismatch(MismatchKind::UnexpectedDelimiter('['), self.pos)
            })?;
        let end = close + 1;
        match self.input[end..].chars().next() {
            None => Ok((end, None)),
            Some(c @ (':' | ';' | '?')) => Ok((end, Some(c as u8))),
            Some(c) => Err(SipUriError::mismatch(MismatchKind::UnexpectedDelimiter(c), end)),
        }
    }

    fn port(&mut self) -> SipUriResult<()> {
        let (end, stop) = self.scan_until(b":;?@");
        if let Some(delimiter @ (b':' | b'@')) = stop {
            return Err(SipUriError::mismatch(
                MismatchKind::UnexpectedDelimiter(delimiter as char),
                end,
            ));
        }
        let token = &self.input[self.pos..end];
        validation::validate_port(token, self.pos)?;
        self.uri.port = Some(token.to_string());
        self.advance(end, stop);
        Ok(())
    }

    /// Find the next delimiter from `stops` at or after `pos`
    fn scan_until(&self, stops: &[u8]) -> (usize, Option<u8>) {
        self.input.as_bytes()[self.pos..]
            .iter()
            .position(|b| stops.contains(b))
            .map_or((self.input.len(), None), |i| {
                let end = self.pos + i;
                (end, Some(self.input.as_bytes()[end]))
            })
    }

    /// Move past the delimiter at `end` into the state it introduces
    fn advance(&mut self, end: usize, stop: Option<u8>) {
        let (next, skip) = match stop {
            Some(b':') => (State::Port, 1),
            Some(b';') => (State::Params, 1),
            Some(b'?') => (State::Headers, 1),
            _ => (State::Done, 0),
        };
        self.pos = end + skip;
        self.state = next;
    }
}
