//! Value Model Module
//!
//! The closed, tagged set of value shapes the store can hold, and the codec
//! that turns them into textual row payloads and back.
//!
//! ## Responsibilities
//! - Define the `Value` variants and their `Kind` discriminators
//! - Encode any `Value` into a `Row` (tag + textual payload)
//! - Decode a `Row` back into a `Value`, rejecting malformed payloads
//! - Convert between caller types and `Value` (`IntoValue` / `FromValue`)
//!
//! ## Payload Format
//! ```text
//! int / uint   decimal digits                     42, -7
//! float        shortest round-trip decimal       3.25, 1e-12
//! bool         true | false
//! str          the raw string
//! record       JSON array of [name, tagged] pairs
//! map          JSON object of name -> tagged
//!
//! tagged = {"k": "<kind>", "v": <payload>}       (recursive)
//! ```
//!
//! Nested values always carry their own tag, so structural shapes (records
//! containing maps, maps containing records) serialize without ambiguity.

mod codec;
mod convert;
mod kind;

pub use codec::{decode, encode, Row};
pub use convert::{FromValue, IntoValue};
pub use kind::Kind;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FlatKvError, Result};

/// A single storable value
///
/// The set of variants is closed: anything the store holds is one of these,
/// identified by its [`Kind`]. Decoding into a concrete destination is a
/// pattern match over the discriminator, never runtime type introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "k", content = "v", rename_all = "lowercase")]
pub enum Value {
    /// Signed integer
    Int(i64),

    /// Unsigned integer
    Uint(u64),

    /// Finite 64-bit float
    Float(f64),

    /// Boolean
    Bool(bool),

    /// UTF-8 string
    Str(String),

    /// Ordered record of named fields (field order is preserved)
    Record(Vec<(String, Value)>),

    /// String-keyed mapping (sorted key order)
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// The discriminator for this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::Str,
            Value::Record(_) => Kind::Record,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Check that this value is encodable: every float in the tree is
    /// finite and nesting stays within `max_depth`.
    ///
    /// The textual format has no representation for NaN or infinity, and
    /// the decoder recurses over nested payloads, so both limits are
    /// enforced before anything reaches the table.
    pub fn validate(&self, max_depth: usize) -> Result<()> {
        self.validate_at(max_depth, 0)
    }

    fn validate_at(&self, max_depth: usize, depth: usize) -> Result<()> {
        if depth > max_depth {
            return Err(FlatKvError::UnsupportedType(format!(
                "nesting exceeds maximum depth of {}",
                max_depth
            )));
        }

        match self {
            Value::Float(f) if !f.is_finite() => Err(FlatKvError::UnsupportedType(format!(
                "non-finite float {} cannot be represented",
                f
            ))),
            Value::Record(fields) => fields
                .iter()
                .try_for_each(|(_, v)| v.validate_at(max_depth, depth + 1)),
            Value::Map(entries) => entries
                .values()
                .try_for_each(|v| v.validate_at(max_depth, depth + 1)),
            _ => Ok(()),
        }
    }
}
