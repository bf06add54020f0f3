//! Signed token value

use crate::error::Result;
use crate::validator::{TokenValidator, ValidatedToken};
use std::fmt;

/// An immutable signed token paired with the secret that validates it
///
/// Built by [`TokenBuilder::build`](crate::TokenBuilder::build), or wrapped
/// from an externally received string with [`Token::from_parts`]. The value
/// is never mutated; regenerating claims requires a fresh builder pass.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    raw: String,
    secret: String,
}

impl Token {
    pub(crate) fn new(raw: String, secret: String) -> Self {
        Self { raw, secret }
    }

    /// Pair an externally received token string with its secret
    pub fn from_parts(raw: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            secret: secret.into(),
        }
    }

    /// The wire-format token string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The secret paired with this token
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Run the full validation pipeline with default options
    pub fn validate(&self) -> Result<ValidatedToken> {
        TokenValidator::new().validate(&self.raw, &self.secret)
    }

    /// Run the full validation pipeline with a configured validator
    pub fn validate_with(&self, validator: &TokenValidator) -> Result<ValidatedToken> {
        validator.validate(&self.raw, &self.secret)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// The secret never appears in debug output
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("raw", &self.raw)
            .field("secret", &"<redacted>")
            .finish()
    }
}
