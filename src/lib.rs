//! # jwtsmith - Compact Signed Token Issuing and Validation
//!
//! **jwtsmith** builds and validates JSON Web Tokens signed with a
//! symmetric secret. A token is three Base64URL segments joined by dots:
//! a JSON header, a JSON payload, and an HMAC signature computed over the
//! encoded header and payload. The library covers both directions of that
//! wire format: a fluent builder that encodes, signs, and joins; and a
//! parser/validator pair that splits, decodes, and checks structure,
//! signature, and expiration.
//!
//! Everything is synchronous and stateless across calls. There is no key
//! management, no asymmetric cryptography, no storage, and no HTTP layer;
//! those belong to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use jwtsmith::{AlgorithmId, TokenBuilder};
//!
//! # fn main() -> jwtsmith::Result<()> {
//! let now = std::time::SystemTime::now()
//!     .duration_since(std::time::UNIX_EPOCH)
//!     .unwrap()
//!     .as_secs() as i64;
//!
//! let token = TokenBuilder::new(AlgorithmId::HS256)
//!     .secret("Correct*Horse7Battery")?
//!     .issuer("https://issuer.example.com")
//!     .subject("user-1234")
//!     .expiration(now + 3600)?
//!     .build()?;
//!
//! let validated = token.validate()?;
//! assert_eq!(validated.claims().subject(), Some("user-1234"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation Flow
//!
//! Inbound tokens pass through a fixed pipeline; the first failing step
//! rejects the token:
//!
//! ```text
//! token string
//!     │ structure: three non-empty Base64URL segments,
//!     │            header and payload decode to JSON objects
//!     ▼
//! ParsedToken
//!     │ signature: recompute the MAC under the header's algorithm,
//!     │            compare in constant time
//!     │ temporal:  reject expired `exp` (and `nbf` when opted in)
//!     ▼
//! ValidatedToken (claims safe to use)
//! ```
//!
//! ## Secrets
//!
//! Secrets are checked against a strength policy when they are set: at
//! least 12 characters, with a lowercase letter, an uppercase letter, a
//! digit, and one of `*&!@%^#$`. Weak secrets are rejected before they can
//! sign anything.
//!
//! ## Security
//!
//! - HMAC signatures are compared in constant time via the
//!   [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//! - The `"none"` algorithm (unsigned tokens) is always rejected per
//!   [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
//! - Oversized token strings are rejected before any decoding work.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) — JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;

// Claims and header access
pub mod claims;
pub mod header;

// Outbound: build and sign
pub mod builder;
pub mod token;

// Inbound: parse and validate
pub mod parser;
pub mod validator;

pub(crate) mod limits;

// Main API
pub use builder::TokenBuilder;
pub use parser::ParsedToken;
pub use token::Token;
pub use validator::{TokenValidator, ValidatedToken, ValidationOptions};

// Supporting types
pub use algorithm::{Algorithm, AlgorithmId};
pub use claims::{Audience, ClaimMap, Claims};
pub use error::{Error, Result};
pub use header::Header;
