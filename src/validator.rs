//! Token validation
//!
//! The individual checks (structure, expiration, secret strength, signature
//! equality) are exposed as associated functions so they can be used on
//! their own. [`TokenValidator::validate`] runs the full inbound pipeline:
//! structure, then signature, then temporal claims. The first failing step
//! rejects the token.

use crate::algorithm;
use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::limits::MIN_SECRET_LENGTH;
use crate::parser::ParsedToken;

use constant_time_eq::constant_time_eq;
use std::time::{SystemTime, UNIX_EPOCH};

/// Special characters accepted by the secret strength policy
const SECRET_SPECIAL_CHARACTERS: &[char] = &['*', '&', '!', '@', '%', '^', '#', '$'];

/// Options for the inbound validation pipeline
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    validate_exp: bool,
    enforce_nbf: bool,
    leeway_seconds: u64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            validate_exp: true,
            enforce_nbf: false,
            leeway_seconds: 0,
        }
    }
}

impl ValidationOptions {
    /// Create options with defaults: `exp` enforced, `nbf` not enforced,
    /// no clock skew tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject tokens whose `nbf` claim is still in the future
    ///
    /// Off by default: `nbf` and `iat` are stored but only `exp` is
    /// enforced unless callers opt in.
    pub fn enforce_not_before(mut self) -> Self {
        self.enforce_nbf = true;
        self
    }

    /// Clock skew tolerance in seconds for temporal checks
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Disable expiration validation (use with caution!)
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }
}

/// A token that has passed the full validation pipeline
///
/// Claims are only reachable through this type once structure, signature,
/// and temporal checks have all succeeded.
pub struct ValidatedToken {
    header: Header,
    claims: Claims,
}

impl ValidatedToken {
    /// The validated header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The validated payload claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Consume the token, returning its claims
    pub fn into_claims(self) -> Claims {
        self.claims
    }
}

/// Token validator
#[derive(Debug, Clone, Default)]
pub struct TokenValidator {
    options: ValidationOptions,
}

impl TokenValidator {
    /// Create a validator with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with the given options
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Check the structural shape of a token string
    ///
    /// True iff the token splits into exactly three non-empty dot-separated
    /// segments that all decode as Base64URL, with header and payload
    /// decoding to JSON objects. No specific claims are required.
    pub fn structure(token: &str) -> bool {
        ParsedToken::from_string(token).is_ok()
    }

    /// Check that a timestamp lies strictly in the future
    ///
    /// A timestamp equal to the current second counts as expired.
    pub fn expiration(timestamp: i64) -> bool {
        timestamp > unix_now()
    }

    /// Check a secret against the strength policy
    ///
    /// Requires at least 12 characters with at least one lowercase letter,
    /// one uppercase letter, one digit, and one of `*&!@%^#$`. All four
    /// character classes and the length are required.
    pub fn secret(secret: &str) -> bool {
        secret.chars().count() >= MIN_SECRET_LENGTH
            && secret.chars().any(|c| c.is_ascii_lowercase())
            && secret.chars().any(|c| c.is_ascii_uppercase())
            && secret.chars().any(|c| c.is_ascii_digit())
            && secret.chars().any(|c| SECRET_SPECIAL_CHARACTERS.contains(&c))
    }

    /// Compare two signatures in constant time
    ///
    /// A length mismatch returns false without comparing bytes.
    pub fn signature(expected: &[u8], provided: &[u8]) -> bool {
        if expected.len() != provided.len() {
            return false;
        }
        constant_time_eq(expected, provided)
    }

    /// Run the inbound acceptance pipeline over a token string
    ///
    /// 1. Structure: split and decode, fail with the format errors.
    /// 2. Signature: recompute the MAC under the header's algorithm and
    ///    compare, fail with [`Error::SignatureInvalid`].
    /// 3. Temporal claims: check `exp` if present (and `nbf` when
    ///    enforcement is enabled), fail with [`Error::TokenExpired`] or
    ///    [`Error::TokenNotYetValid`].
    pub fn validate(&self, token: &str, secret: &str) -> Result<ValidatedToken> {
        let parsed = ParsedToken::from_string(token)?;

        let algorithm = parsed.algorithm()?;
        algorithm::signer(algorithm).verify(
            &parsed.signing_input(),
            parsed.signature_b64(),
            secret.as_bytes(),
        )?;

        let now = unix_now();
        let leeway = self.options.leeway_seconds as i64;

        if self.options.validate_exp {
            if let Some(expired_at) = parsed.claims().expiration()? {
                if now >= expired_at + leeway {
                    return Err(Error::TokenExpired { expired_at, now });
                }
            }
        }

        if self.options.enforce_nbf {
            if let Some(not_before) = parsed.claims().not_before()? {
                if not_before > now + leeway {
                    return Err(Error::TokenNotYetValid { not_before, now });
                }
            }
        }

        let (header, claims) = parsed.into_parts();
        Ok(ValidatedToken { header, claims })
    }
}

/// Current Unix timestamp in seconds
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as i64
}
