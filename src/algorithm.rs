//! HMAC signing algorithms
//!
//! Every algorithm implements the common [`Algorithm`] trait for signing
//! and verification. Signing is deterministic: identical inputs always
//! produce the identical MAC. Verification recomputes the MAC and compares
//! against the provided signature in constant time.

use crate::error::{Error, Result};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Identifier for a supported signing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    HS256,
    HS384,
    HS512,
}

impl AlgorithmId {
    /// Resolve an algorithm from its `alg` header value
    ///
    /// The unsigned `"none"` algorithm is always rejected per
    /// [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),
            "none" => Err(Error::AlgorithmNoneRejected),
            other => Err(Error::AlgorithmUnsupported(other.to_string())),
        }
    }

    /// The algorithm identifier as it appears in the `alg` header claim
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Core trait that all signing algorithms implement
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256")
    fn name(&self) -> &'static str;

    /// Compute the raw MAC over the signing input
    ///
    /// # Arguments
    /// * `signing_input` - The data to sign (`header.payload`)
    /// * `secret` - The symmetric key
    fn sign(&self, signing_input: &str, secret: &[u8]) -> Result<Vec<u8>>;

    /// Verify a Base64URL-encoded signature
    ///
    /// Recomputes the MAC and compares in constant time. A length mismatch
    /// fails without comparing bytes.
    fn verify(&self, signing_input: &str, signature: &str, secret: &[u8]) -> Result<()> {
        let provided = base64url::decode_bytes(signature)?;
        let expected = self.sign(signing_input, secret)?;

        if provided.len() != expected.len() {
            return Err(Error::SignatureInvalid);
        }

        if constant_time_eq(&provided, &expected) {
            Ok(())
        } else {
            Err(Error::SignatureInvalid)
        }
    }
}

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &str, secret: &[u8]) -> Result<Vec<u8>> {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
        mac.update(signing_input.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl Algorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn sign(&self, signing_input: &str, secret: &[u8]) -> Result<Vec<u8>> {
        let mut mac =
            Hmac::<Sha384>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
        mac.update(signing_input.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl Algorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn sign(&self, signing_input: &str, secret: &[u8]) -> Result<Vec<u8>> {
        let mut mac =
            Hmac::<Sha512>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
        mac.update(signing_input.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

/// Get the signer for an algorithm identifier
pub fn signer(algorithm: AlgorithmId) -> &'static dyn Algorithm {
    match algorithm {
        AlgorithmId::HS256 => &HS256,
        AlgorithmId::HS384 => &HS384,
        AlgorithmId::HS512 => &HS512,
    }
}
