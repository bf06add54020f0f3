//! Inbound token parsing

use crate::algorithm::AlgorithmId;
use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::utils::{base64url, json};

/// A token string split and decoded, but not yet verified
///
/// Splitting succeeds only for exactly three non-empty dot-separated
/// segments that all decode as Base64URL, with header and payload decoding
/// to JSON objects. Nothing at this stage is trustworthy: the claims must
/// not be acted on until the signature has been verified.
pub struct ParsedToken {
    header: Header,
    claims: Claims,
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
    signature: Vec<u8>,
}

impl ParsedToken {
    /// Parse a token from its wire format (`header.payload.signature`)
    pub fn from_string(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        let payload_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        let signature_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        if parts.next().is_some() {
            return Err(Error::FormatInvalid);
        }
        if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(Error::FormatInvalid);
        }

        let header_json = base64url::decode(header_b64)?;
        let header = Header::from_map(json::decode_object(&header_json)?);

        let payload_json = base64url::decode(payload_b64)?;
        let claims = Claims::from_map(json::decode_object(&payload_json)?);

        let signature = base64url::decode_bytes(signature_b64)?;

        Ok(Self {
            header,
            claims,
            header_b64: header_b64.to_string(),
            payload_b64: payload_b64.to_string(),
            signature_b64: signature_b64.to_string(),
            signature,
        })
    }

    /// The decoded header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The decoded payload claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// The algorithm named in the header
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        self.header.algorithm()
    }

    /// The Base64URL-encoded signature segment
    pub fn signature_b64(&self) -> &str {
        &self.signature_b64
    }

    /// The raw signature bytes
    pub fn signature_bytes(&self) -> &[u8] {
        &self.signature
    }

    /// The signed portion of the token (`header.payload`)
    pub(crate) fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    pub(crate) fn into_parts(self) -> (Header, Claims) {
        (self.header, self.claims)
    }
}
