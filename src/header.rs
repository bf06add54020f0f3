//! Token header access

use crate::algorithm::AlgorithmId;
use crate::claims::ClaimMap;
use crate::error::{Error, Result};
use serde_json::Value;

/// Token header with typed access to the registered header claims
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    map: ClaimMap,
}

impl Header {
    pub(crate) fn from_map(map: ClaimMap) -> Self {
        Self { map }
    }

    /// Look up any header claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// The `alg` claim resolved to a supported algorithm
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        let name = self
            .algorithm_str()
            .ok_or_else(|| Error::FieldMissing("alg".to_string()))?;
        AlgorithmId::from_name(name)
    }

    /// The raw `alg` claim value
    pub fn algorithm_str(&self) -> Option<&str> {
        self.map.get("alg").and_then(Value::as_str)
    }

    /// The `typ` claim (typically "JWT")
    pub fn token_type(&self) -> Option<&str> {
        self.map.get("typ").and_then(Value::as_str)
    }

    /// The `cty` claim
    pub fn content_type(&self) -> Option<&str> {
        self.map.get("cty").and_then(Value::as_str)
    }

    /// The underlying header map
    pub fn as_map(&self) -> &ClaimMap {
        &self.map
    }

    /// Consume the header, returning the underlying map
    pub fn into_map(self) -> ClaimMap {
        self.map
    }
}
