//! HTTP method token

use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// A validated HTTP method.
///
/// Any RFC 9110 token is accepted, so extension methods such as `PURGE`
/// work alongside the standard ones. Case is preserved as written in the
/// suite; an empty method means `GET`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpMethod(String);

impl HttpMethod {
    /// The `GET` method.
    #[must_use]
    pub fn get() -> Self {
        Self("GET".to_string())
    }

    /// Parses a method token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMethod`] if the token contains
    /// characters outside the HTTP token alphabet.
    pub fn parse(method: &str) -> DomainResult<Self> {
        if method.is_empty() {
            return Ok(Self::get());
        }
        if method.bytes().all(is_token_byte) {
            Ok(Self(method.to_string()))
        } else {
            Err(DomainError::InvalidMethod(method.to_string()))
        }
    }

    /// Returns the method as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_token_byte(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
        | b'`' | b'|' | b'~' | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::parse(s)
    }
}

impl Default for HttpMethod {
    fn default() -> Self {
        Self::get()
    }
}
