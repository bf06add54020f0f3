//! Canonical JSON serialization for claim maps
//!
//! `serde_json`'s default map representation is backed by a BTreeMap, so
//! object keys serialize in lexicographic order. Two encode calls over
//! equal maps produce byte-identical JSON, which keeps recomputed
//! signatures stable regardless of claim insertion order.

use crate::claims::ClaimMap;
use crate::error::{Error, Result};
use serde_json::Value;

/// Serialize a claim map to its canonical JSON string
pub fn encode(map: &ClaimMap) -> Result<String> {
    serde_json::to_string(map).map_err(|e| Error::FormatJsonEncode(e.to_string()))
}

/// Parse a JSON string into a claim map
///
/// Rejects any JSON document whose top level is not an object.
pub fn decode_object(input: &str) -> Result<ClaimMap> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| Error::FormatInvalidJson(format!("JSON parse failed: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::FormatInvalidJson(format!(
            "expected a JSON object, found: {other}"
        ))),
    }
}
