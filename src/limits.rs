//! Size bounds for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Minimum length for a signing secret
pub(crate) const MIN_SECRET_LENGTH: usize = 12;
