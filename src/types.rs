//! Common types used throughout the sipuri library

use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error::SipUriError;
use crate::limits::{DEFAULT_SIPS_PORT, DEFAULT_SIP_PORT};

/// SIP URI schemes as defined in RFC 3261
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    Sip,
    Sips,
}

impl Scheme {
    /// Port assumed when the URI does not carry one
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Sip => DEFAULT_SIP_PORT,
            Scheme::Sips => DEFAULT_SIPS_PORT,
        }
    }

    /// The lowercase scheme token
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Represents a SIP URI with all its components
///
/// Every field is optional so an absent component is never confused with an
/// empty one. `SipUri::default()` is the empty record. Records produced by
/// the parser always carry a scheme, a host and a port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SipUri {
    pub(crate) scheme: Option<Scheme>,
    pub(crate) user: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<String>,
    pub(crate) uri_parameters: Option<String>,
    pub(crate) headers: Option<String>,
}

impl SipUri {
    pub fn scheme(&self) -> Option<Scheme> {
        self.scheme
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Only ever set together with `user`
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Explicit port, or the scheme default
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Raw parameter segment without the leading `;`
    pub fn uri_parameters(&self) -> Option<&str> {
        self.uri_parameters.as_deref()
    }

    /// Raw header segment without the leading `?`
    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    /// Numeric view of the port
    pub fn port_number(&self) -> Option<u16> {
        self.port.as_deref().and_then(|p| p.parse().ok())
    }

    /// Whether the port differs from the scheme default
    pub fn has_explicit_port(&self) -> bool {
        // compared as text so "05060" survives a round trip
        match (self.scheme, self.port.as_deref()) {
            (Some(scheme), Some(port)) => port != scheme.default_port().to_string(),
            _ => false,
        }
    }

    /// Whether this is the empty record
    pub fn is_empty(&self) -> bool {
        *self == SipUri::default()
    }

    /// Labelled multi-line view, `--` for absent fields
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

/// Canonical form: `scheme ":" [user [":" password] "@"] host [":" port] [";" params] ["?" headers]`.
/// The port is omitted when it equals the scheme default.
impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(scheme) = self.scheme else {
            return Ok(());
        };
        write!(f, "{}:", scheme)?;
        if let Some(user) = &self.user {
            write!(f, "{}", user)?;
            if let Some(password) = &self.password {
                write!(f, ":{}", password)?;
            }
            write!(f, "@")?;
        }
        if let Some(host) = &self.host {
            write!(f, "{}", host)?;
        }
        if self.has_explicit_port() {
            if let Some(port) = &self.port {
                write!(f, ":{}", port)?;
            }
        }
        if let Some(params) = &self.uri_parameters {
            write!(f, ";{}", params)?;
        }
        if let Some(headers) = &self.headers {
            write!(f, "?{}", headers)?;
        }
        Ok(())
    }
}

impl FromStr for SipUri {
    type Err = SipUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

/// Display adapter returned by [`SipUri::report`]
pub struct Report<'a>(&'a SipUri);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNSET: &str = "--";
        let uri = self.0;
        writeln!(f, "Scheme: {}", uri.scheme.map_or(UNSET, Scheme::as_str))?;
        writeln!(f, "User: {}", uri.user().unwrap_or(UNSET))?;
        writeln!(f, "Password: {}", uri.password().unwrap_or(UNSET))?;
        writeln!(f, "Host: {}", uri.host().unwrap_or(UNSET))?;
        writeln!(f, "Port: {}", uri.port().unwrap_or(UNSET))?;
        writeln!(f, "URI Parameters: {}", uri.uri_parameters().unwrap_or(UNSET))?;
        writeln!(f, "Headers: {}", uri.headers().unwrap_or(UNSET))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scheme: Scheme, user: Option<&str>, host: &str, port: &str) -> SipUri {
        SipUri {
            scheme: Some(scheme),
            user: user.map(str::to_string),
            host: Some(host.to_string()),
            port: Some(port.to_string()),
            ..SipUri::default()
        }
    }

    #[test]
    fn test_scheme_strings() {
        assert_eq!(Scheme::Sip.to_string(), "sip");
        assert_eq!(Scheme::Sips.as_str(), "sips");
        assert_eq!("sips".parse::<Scheme>().unwrap(), Scheme::Sips);
        assert!("SIP".parse::<Scheme>().is_err());
        assert!("sipps".parse::<Scheme>().is_err());
        assert_eq!(Scheme::Sip.default_port(), 5060);
        assert_eq!(Scheme::Sips.default_port(), 5061);
    }

    #[test]
    fn test_default_record_is_empty() {
        let uri = SipUri::default();
        assert!(uri.is_empty());
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.port(), None);
        assert_eq!(uri.to_string(), "");
        assert!(!uri.has_explicit_port());
    }

    #[test]
    fn test_canonical_display() {
        let uri = record(Scheme::Sip, Some("alice"), "atlanta.com", "5060");
        assert_eq!(uri.to_string(), "sip:alice@atlanta.com");

        let uri = SipUri {
            password: Some("secretword".to_string()),
            uri_parameters: Some("transport=tcp".to_string()),
            headers: Some("subject=x".to_string()),
            ..record(Scheme::Sips, Some("alice"), "atlanta.com", "5080")
        };
        assert!(uri.has_explicit_port());
        assert_eq!(
            uri.to_string(),
            "sips:alice:secretword@atlanta.com:5080;transport=tcp?subject=x"
        );
    }

    #[test]
    fn test_report_marks_unset_fields() {
        let uri = record(Scheme::Sip, None, "atlanta.com", "5060");
        let report = uri.report().to_string();
        assert!(report.contains("Scheme: sip\n"));
        assert!(report.contains("User: --\n"));
        assert!(report.contains("Host: atlanta.com\n"));
        assert!(report.contains("Port: 5060\n"));
        assert!(report.ends_with("Headers: --\n"));
    }
}
