//! Parser limits and configuration for SIP URI parsing
//!
//! These limits bound the work done per URI while keeping RFC 3261 inputs intact.

/// Maximum URI length we'll accept, matching a single header line
pub const MAX_URI_LENGTH: usize = 8192;

/// Default port for the `sip` scheme (RFC 3261 19.1.2)
pub const DEFAULT_SIP_PORT: u16 = 5060;

/// Default port for the `sips` scheme (RFC 3261 19.1.2)
pub const DEFAULT_SIPS_PORT: u16 = 5061;

/// How the scheme token is compared against `sip` / `sips`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeMatching {
    /// `SIP:`, `Sips:` and friends are accepted (RFC 3261 19.1.4)
    #[default]
    CaseInsensitive,
    /// Only the lowercase tokens are accepted
    Strict,
}

/// Configurable limits for the URI parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Longest input accepted, in bytes
    pub max_uri_length: usize,
    /// Scheme case policy
    pub scheme_matching: SchemeMatching,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_uri_length: MAX_URI_LENGTH,
            scheme_matching: SchemeMatching::default(),
        }
    }
}

impl ParserLimits {
    /// Override the maximum accepted URI length
    pub fn with_max_uri_length(mut self, max_uri_length: usize) -> Self {
        self.max_uri_length = max_uri_length;
        self
    }

    /// Override the scheme case policy
    pub fn with_scheme_matching(mut self, scheme_matching: SchemeMatching) -> Self {
        self.scheme_matching = scheme_matching;
        self
    }

    /// Strict limits: exact lowercase schemes only
    pub fn strict() -> Self {
        Self::default().with_scheme_matching(SchemeMatching::Strict)
    }
}
