//! Claim maps and typed claim access
//!
//! Headers and payloads are plain JSON objects. [`Claims`] wraps a payload
//! map with typed accessors for the registered claims from
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1);
//! everything else stays reachable through [`Claims::get`].

use crate::error::{Error, Result};
use serde_json::Value;

/// Map of claim name to JSON value, used for both headers and payloads
pub type ClaimMap = serde_json::Map<String, Value>;

/// Audience (`aud`) claim: a single recipient or a list of recipients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    /// Read an audience out of an untyped claim value
    ///
    /// Accepts a JSON string or an array of strings; any other shape is an
    /// invalid `aud` claim.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(single) => Ok(Audience::Single(single.clone())),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(entry) => values.push(entry.to_string()),
                        None => {
                            return Err(Error::ClaimInvalid {
                                claim: "aud".to_string(),
                                reason: "audience array entries must be strings".to_string(),
                            });
                        }
                    }
                }
                Ok(Audience::Multiple(values))
            }
            _ => Err(Error::ClaimInvalid {
                claim: "aud".to_string(),
                reason: "expected a string or an array of strings".to_string(),
            }),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self {
            Audience::Single(single) => Value::String(single.clone()),
            Audience::Multiple(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

impl From<&str> for Audience {
    fn from(audience: &str) -> Self {
        Audience::Single(audience.to_string())
    }
}

impl From<String> for Audience {
    fn from(audience: String) -> Self {
        Audience::Single(audience)
    }
}

impl From<Vec<String>> for Audience {
    fn from(audiences: Vec<String>) -> Self {
        Audience::Multiple(audiences)
    }
}

impl From<Vec<&str>> for Audience {
    fn from(audiences: Vec<&str>) -> Self {
        Audience::Multiple(audiences.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Audience {
    fn from(audiences: &[&str]) -> Self {
        Audience::Multiple(audiences.iter().map(|s| s.to_string()).collect())
    }
}

/// Payload claim set with typed accessors for the registered claims
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    map: ClaimMap,
}

impl Claims {
    pub(crate) fn from_map(map: ClaimMap) -> Self {
        Self { map }
    }

    /// Look up any claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Issuer (`iss`)
    pub fn issuer(&self) -> Option<&str> {
        self.str_claim("iss")
    }

    /// Subject (`sub`)
    pub fn subject(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    /// Audience (`aud`)
    ///
    /// Fails with [`Error::ClaimInvalid`] when the claim is present but is
    /// neither a string nor an array of strings.
    pub fn audience(&self) -> Result<Option<Audience>> {
        self.map.get("aud").map(Audience::from_value).transpose()
    }

    /// Expiration time (`exp`), seconds since the Unix epoch
    pub fn expiration(&self) -> Result<Option<i64>> {
        self.timestamp_claim("exp")
    }

    /// Not-before time (`nbf`), seconds since the Unix epoch
    pub fn not_before(&self) -> Result<Option<i64>> {
        self.timestamp_claim("nbf")
    }

    /// Issued-at time (`iat`), seconds since the Unix epoch
    pub fn issued_at(&self) -> Result<Option<i64>> {
        self.timestamp_claim("iat")
    }

    /// Token identifier (`jti`)
    pub fn jwt_id(&self) -> Option<&str> {
        self.str_claim("jti")
    }

    /// The underlying claim map
    pub fn as_map(&self) -> &ClaimMap {
        &self.map
    }

    /// Consume the claim set, returning the underlying map
    pub fn into_map(self) -> ClaimMap {
        self.map
    }

    fn str_claim(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(Value::as_str)
    }

    fn timestamp_claim(&self, name: &str) -> Result<Option<i64>> {
        match self.map.get(name) {
            None => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or_else(|| Error::ClaimInvalid {
                claim: name.to_string(),
                reason: "expected an integer Unix timestamp".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audience_from_string_value() {
        let audience = Audience::from_value(&json!("example.com")).unwrap();
        assert_eq!(audience, Audience::Single("example.com".to_string()));
    }

    #[test]
    fn test_audience_from_array_value() {
        let audience = Audience::from_value(&json!(["a", "b"])).unwrap();
        assert_eq!(
            audience,
            Audience::Multiple(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_audience_rejects_other_types() {
        assert!(matches!(
            Audience::from_value(&json!(42)),
            Err(Error::ClaimInvalid { .. })
        ));
        assert!(matches!(
            Audience::from_value(&json!({"aud": "x"})),
            Err(Error::ClaimInvalid { .. })
        ));
        assert!(matches!(
            Audience::from_value(&json!(["a", 1])),
            Err(Error::ClaimInvalid { .. })
        ));
    }

    #[test]
    fn test_audience_value_roundtrip() {
        let single = Audience::Single("example.com".to_string());
        assert_eq!(Audience::from_value(&single.to_value()).unwrap(), single);

        let multiple = Audience::Multiple(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(Audience::from_value(&multiple.to_value()).unwrap(), multiple);
    }

    #[test]
    fn test_registered_claim_accessors() {
        let mut map = ClaimMap::new();
        map.insert("iss".to_string(), json!("issuer"));
        map.insert("sub".to_string(), json!("subject"));
        map.insert("aud".to_string(), json!("audience"));
        map.insert("exp".to_string(), json!(1_700_000_000));
        map.insert("nbf".to_string(), json!(1_600_000_000));
        map.insert("iat".to_string(), json!(1_650_000_000));
        map.insert("jti".to_string(), json!("token-1"));
        map.insert("role".to_string(), json!("admin"));

        let claims = Claims::from_map(map);
        assert_eq!(claims.issuer(), Some("issuer"));
        assert_eq!(claims.subject(), Some("subject"));
        assert_eq!(
            claims.audience().unwrap(),
            Some(Audience::Single("audience".to_string()))
        );
        assert_eq!(claims.expiration().unwrap(), Some(1_700_000_000));
        assert_eq!(claims.not_before().unwrap(), Some(1_600_000_000));
        assert_eq!(claims.issued_at().unwrap(), Some(1_650_000_000));
        assert_eq!(claims.jwt_id(), Some("token-1"));
        assert_eq!(claims.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn test_missing_claims_are_none() {
        let claims = Claims::default();
        assert_eq!(claims.issuer(), None);
        assert_eq!(claims.audience().unwrap(), None);
        assert_eq!(claims.expiration().unwrap(), None);
    }

    #[test]
    fn test_non_integer_timestamp_is_invalid() {
        let mut map = ClaimMap::new();
        map.insert("exp".to_string(), json!("tomorrow"));

        let claims = Claims::from_map(map);
        assert!(matches!(
            claims.expiration(),
            Err(Error::ClaimInvalid { .. })
        ));
    }
}
