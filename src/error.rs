//! Errors for jwtsmith

use thiserror::Error;

/// Errors raised while building, parsing, or validating tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three non-empty parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("JSON encoding failed: {0}")]
    FormatJsonEncode(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Secret Errors
    // ============================================================================
    #[error(
        "Secret too weak: requires at least 12 characters with a lowercase letter, an uppercase letter, a digit, and one of *&!@%^#$"
    )]
    SecretTooWeak,

    #[error("No secret set: a secret is required to sign a token")]
    SecretMissing,

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now})")]
    TokenExpired { expired_at: i64, now: i64 },

    #[error("Token not valid until {not_before} (now: {now})")]
    TokenNotYetValid { not_before: i64, now: i64 },

    #[error("Invalid value for claim '{claim}': {reason}")]
    ClaimInvalid { claim: String, reason: String },

    #[error("Missing required field: {0}")]
    FieldMissing(String),
}

/// Result type alias for jwtsmith operations
pub type Result<T> = std::result::Result<T, Error>;
