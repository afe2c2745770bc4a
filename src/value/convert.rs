//! Conversions between caller types and the value model
//!
//! `IntoValue` is the `set`-side conversion; `FromValue` is the `get`-side
//! one. `FromValue` returns `Option` rather than `Result`: a `None` means
//! the stored discriminator (or range) does not fit the destination, which
//! callers treat as "not found" so they can probe several shapes without
//! error handling. Malformed payloads are detected earlier, by the codec.
//!
//! Numeric rules: a stored integer converts into any integer destination
//! that represents it exactly, and into `f64` only when the conversion is
//! lossless. Everything else is a mismatch.

use std::collections::{BTreeMap, HashMap};

use crate::error::Result;

use super::Value;

/// Conversion into a storable value
pub trait IntoValue {
    fn into_value(self) -> Result<Value>;
}

/// Conversion out of a stored value
///
/// Returns `None` when the value's kind is incompatible with `Self`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

// =============================================================================
// Identity
// =============================================================================

impl IntoValue for Value {
    fn into_value(self) -> Result<Value> {
        Ok(self)
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

// =============================================================================
// Integers
// =============================================================================

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl IntoValue for $t {
            fn into_value(self) -> Result<Value> {
                Ok(Value::Int(self as i64))
            }
        }

        impl FromValue for $t {
            fn from_value(value: &Value) -> Option<Self> {
                match *value {
                    Value::Int(i) => Self::try_from(i).ok(),
                    Value::Uint(u) => Self::try_from(u).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl IntoValue for $t {
            fn into_value(self) -> Result<Value> {
                Ok(Value::Uint(self as u64))
            }
        }

        impl FromValue for $t {
            fn from_value(value: &Value) -> Option<Self> {
                match *value {
                    Value::Int(i) => Self::try_from(i).ok(),
                    Value::Uint(u) => Self::try_from(u).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

// =============================================================================
// Floats
// =============================================================================

impl IntoValue for f64 {
    fn into_value(self) -> Result<Value> {
        Ok(Value::Float(self))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Float(f) => Some(f),
            // Integers convert only when f64 represents them exactly.
            // Compared via i128: `as` casts back to i64 saturate at the
            // extremes and would falsely accept i64::MAX.
            Value::Int(i) => {
                let f = i as f64;
                (f as i128 == i as i128).then_some(f)
            }
            Value::Uint(u) => {
                let f = u as f64;
                (f as u128 == u as u128).then_some(f)
            }
            _ => None,
        }
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Result<Value> {
        Ok(Value::Float(self as f64))
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Float(f) => {
                let narrowed = f as f32;
                (narrowed as f64 == f).then_some(narrowed)
            }
            _ => None,
        }
    }
}

// =============================================================================
// Bool and Strings
// =============================================================================

impl IntoValue for bool {
    fn into_value(self) -> Result<Value> {
        Ok(Value::Bool(self))
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Result<Value> {
        Ok(Value::Str(self))
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Result<Value> {
        Ok(Value::Str(self.to_string()))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

// =============================================================================
// Maps and Records
// =============================================================================

impl<V: IntoValue> IntoValue for BTreeMap<String, V> {
    fn into_value(self) -> Result<Value> {
        let entries = self
            .into_iter()
            .map(|(k, v)| Ok((k, v.into_value()?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Value::Map(entries))
    }
}

// HashMap entries land in sorted order; iteration determinism comes from
// the map kind itself, not the source container.
impl<V: IntoValue> IntoValue for HashMap<String, V> {
    fn into_value(self) -> Result<Value> {
        let entries = self
            .into_iter()
            .map(|(k, v)| Ok((k, v.into_value()?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Value::Map(entries))
    }
}

impl<V: FromValue> FromValue for BTreeMap<String, V> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Map(entries) => entries
                .iter()
                .map(|(k, v)| Some((k.clone(), V::from_value(v)?)))
                .collect(),
            _ => None,
        }
    }
}

impl<V: FromValue> FromValue for HashMap<String, V> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Map(entries) => entries
                .iter()
                .map(|(k, v)| Some((k.clone(), V::from_value(v)?)))
                .collect(),
            _ => None,
        }
    }
}

impl<V: IntoValue> IntoValue for Vec<(String, V)> {
    fn into_value(self) -> Result<Value> {
        let fields = self
            .into_iter()
            .map(|(name, v)| Ok((name, v.into_value()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Record(fields))
    }
}

impl<V: FromValue> FromValue for Vec<(String, V)> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Record(fields) => fields
                .iter()
                .map(|(name, v)| Some((name.clone(), V::from_value(v)?)))
                .collect(),
            _ => None,
        }
    }
}
