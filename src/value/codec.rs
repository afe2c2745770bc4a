//! Value codec
//!
//! Encoding and decoding between `Value` and the textual `Row` form.
//!
//! Scalars use their bare textual representation so persisted files stay
//! readable; `record` and `map` payloads are JSON, with every nested value
//! wrapped in its own `{"k": ..., "v": ...}` tag (see the module docs for
//! the full format).
//!
//! ## Numeric Round Trips
//! Integers cover the full `i64`/`u64` range exactly. Floats are emitted as
//! the shortest decimal that parses back to the identical bits (both the
//! `Display` form used here and serde_json's Ryū output guarantee this), so
//! every finite `f64` round-trips bit-for-bit.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{FlatKvError, Result};

use super::{Kind, Value};

/// The encoded form of one stored value: discriminator plus textual payload
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Which value kind the payload encodes
    pub kind: Kind,

    /// Textual payload, lossless for the claimed kind
    pub payload: String,
}

impl Row {
    pub fn new(kind: Kind, payload: String) -> Self {
        Self { kind, payload }
    }
}

/// Encode a value into its row form
///
/// Callers are expected to have run [`Value::validate`] first; encoding a
/// non-finite float or an over-deep tree is reported as `UnsupportedType`
/// here as well since serde_json cannot represent either.
pub fn encode(value: &Value) -> Result<Row> {
    let payload = match value {
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(FlatKvError::UnsupportedType(format!(
                    "non-finite float {} cannot be represented",
                    f
                )));
            }
            f.to_string()
        }
        Value::Bool(b) => b.to_string(),
        Value::Str(s) => s.clone(),
        Value::Record(fields) => serde_json::to_string(fields)
            .map_err(|e| FlatKvError::UnsupportedType(format!("record not encodable: {}", e)))?,
        Value::Map(entries) => serde_json::to_string(entries)
            .map_err(|e| FlatKvError::UnsupportedType(format!("map not encodable: {}", e)))?,
    };

    Ok(Row::new(value.kind(), payload))
}

/// Decode a row back into a value
///
/// The row's discriminator is authoritative: the payload is parsed per that
/// kind and a payload that does not parse yields `DecodeMismatch`. Kind
/// compatibility with a caller's destination type is a separate, skippable
/// concern handled by [`FromValue`](super::FromValue).
pub fn decode(row: &Row) -> Result<Value> {
    let mismatch = |detail: String| FlatKvError::DecodeMismatch {
        kind: row.kind,
        detail,
    };

    match row.kind {
        Kind::Int => row
            .payload
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| mismatch(e.to_string())),
        Kind::Uint => row
            .payload
            .parse::<u64>()
            .map(Value::Uint)
            .map_err(|e| mismatch(e.to_string())),
        Kind::Float => {
            let f = f64::from_str(&row.payload).map_err(|e| mismatch(e.to_string()))?;
            if !f.is_finite() {
                return Err(mismatch(format!("non-finite float {}", row.payload)));
            }
            Ok(Value::Float(f))
        }
        Kind::Bool => match row.payload.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(mismatch(format!("expected true or false, got {:?}", other))),
        },
        Kind::Str => Ok(Value::Str(row.payload.clone())),
        Kind::Record => serde_json::from_str::<Vec<(String, Value)>>(&row.payload)
            .map(Value::Record)
            .map_err(|e| mismatch(e.to_string())),
        Kind::Map => serde_json::from_str::<BTreeMap<String, Value>>(&row.payload)
            .map(Value::Map)
            .map_err(|e| mismatch(e.to_string())),
    }
}
