//! Fluent token construction

use crate::algorithm::{self, AlgorithmId};
use crate::claims::{Audience, ClaimMap, Claims};
use crate::error::{Error, Result};
use crate::header::Header;
use crate::token::Token;
use crate::utils::{base64url, json};
use crate::validator::{self, TokenValidator};

use serde_json::Value;

/// Fluent builder for signed tokens
///
/// Claims accumulate through chained setters. Setters whose input a policy
/// can reject (`secret`, `expiration`, `audience_value`) validate eagerly
/// and return `Result`; everything else assigns unconditionally. The
/// algorithm binding is fixed at construction and survives
/// [`reset`](Self::reset).
///
/// # Example
///
/// ```
/// use jwtsmith::{AlgorithmId, TokenBuilder};
///
/// let token = TokenBuilder::new(AlgorithmId::HS256)
///     .secret("Correct*Horse7Battery")?
///     .issuer("https://issuer.example.com")
///     .subject("user-1234")
///     .build()?;
/// # Ok::<(), jwtsmith::Error>(())
/// ```
pub struct TokenBuilder {
    algorithm: AlgorithmId,
    header: ClaimMap,
    payload: ClaimMap,
    secret: Option<String>,
}

impl TokenBuilder {
    /// Create a builder bound to the given algorithm
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            header: ClaimMap::new(),
            payload: ClaimMap::new(),
            secret: None,
        }
    }

    /// Create a builder for HS256 tokens
    pub fn hs256() -> Self {
        Self::new(AlgorithmId::HS256)
    }

    /// Set the `cty` header claim
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header_claim("cty", content_type.into())
    }

    /// Set a custom header claim
    ///
    /// The computed `alg` and `typ` values are applied last when the header
    /// is encoded and override same-named custom claims.
    pub fn header_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.header.insert(name.into(), value.into());
        self
    }

    /// Set the signing secret
    ///
    /// Fails with [`Error::SecretTooWeak`] unless the secret passes the
    /// strength policy.
    pub fn secret(mut self, secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if !TokenValidator::secret(&secret) {
            return Err(Error::SecretTooWeak);
        }
        self.secret = Some(secret);
        Ok(self)
    }

    /// Set the `iss` claim
    pub fn issuer(self, issuer: impl Into<String>) -> Self {
        self.private_claim("iss", issuer.into())
    }

    /// Set the `sub` claim
    pub fn subject(self, subject: impl Into<String>) -> Self {
        self.private_claim("sub", subject.into())
    }

    /// Set the `aud` claim
    pub fn audience(mut self, audience: impl Into<Audience>) -> Self {
        self.payload
            .insert("aud".to_string(), audience.into().to_value());
        self
    }

    /// Set the `aud` claim from an untyped JSON value
    ///
    /// Fails with [`Error::ClaimInvalid`] unless the value is a string or
    /// an array of strings.
    pub fn audience_value(self, value: Value) -> Result<Self> {
        let audience = Audience::from_value(&value)?;
        Ok(self.audience(audience))
    }

    /// Set the `exp` claim
    ///
    /// Fails with [`Error::TokenExpired`] unless the timestamp is strictly
    /// in the future at set-time.
    pub fn expiration(mut self, timestamp: i64) -> Result<Self> {
        if !TokenValidator::expiration(timestamp) {
            return Err(Error::TokenExpired {
                expired_at: timestamp,
                now: validator::unix_now(),
            });
        }
        self.payload.insert("exp".to_string(), Value::from(timestamp));
        Ok(self)
    }

    /// Set the `nbf` claim
    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.payload.insert("nbf".to_string(), Value::from(timestamp));
        self
    }

    /// Set the `iat` claim
    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.payload.insert("iat".to_string(), Value::from(timestamp));
        self
    }

    /// Set the `jti` claim
    pub fn jwt_id(self, jwt_id: impl Into<String>) -> Self {
        self.private_claim("jti", jwt_id.into())
    }

    /// Set an arbitrary payload claim
    pub fn private_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    /// The header as it will be encoded: custom claims plus the computed
    /// `alg` and `typ`
    pub fn header(&self) -> Header {
        Header::from_map(self.merged_header())
    }

    /// The accumulated payload, verbatim
    pub fn payload(&self) -> Claims {
        Claims::from_map(self.payload.clone())
    }

    /// Encode, sign, and dot-join the token
    ///
    /// Fails with [`Error::SecretMissing`] when no secret has been set.
    /// The result pairs the token string with the secret that signed it.
    pub fn build(&self) -> Result<Token> {
        let secret = self.secret.as_deref().ok_or(Error::SecretMissing)?;

        let header_json = json::encode(&self.merged_header())?;
        let payload_json = json::encode(&self.payload)?;

        let signing_input = format!(
            "{}.{}",
            base64url::encode(&header_json),
            base64url::encode(&payload_json)
        );

        let mac = algorithm::signer(self.algorithm).sign(&signing_input, secret.as_bytes())?;
        let raw = format!("{}.{}", signing_input, base64url::encode_bytes(&mac));

        Ok(Token::new(raw, secret.to_string()))
    }

    /// Clear header, payload, and secret, keeping the algorithm binding
    pub fn reset(mut self) -> Self {
        self.header.clear();
        self.payload.clear();
        self.secret = None;
        self
    }

    fn merged_header(&self) -> ClaimMap {
        let mut header = self.header.clone();
        header.insert("alg".to_string(), Value::from(self.algorithm.name()));
        header.insert("typ".to_string(), Value::from("JWT"));
        header
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::hs256()
    }
}
