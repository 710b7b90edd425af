//! sipuri - SIP URI parser
//!
//! This library splits RFC 3261 SIP and SIPS URIs into scheme, user,
//! password, host, port, URI parameters and headers, applying the scheme
//! default port and positional disambiguation for ambiguous segments.

pub mod batch;
pub mod error;
pub mod limits;
pub mod parser;
pub mod types;
pub mod validation;
mod benchmark;

pub use batch::{count_valid, parse_batch};
pub use benchmark::*;
pub use error::{MismatchKind, SipUriError, SipUriResult};
pub use limits::{ParserLimits, SchemeMatching};
pub use parser::{parse, SipUriParser};
pub use types::{Report, Scheme, SipUri};
