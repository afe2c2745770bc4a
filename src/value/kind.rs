//! Type discriminator definitions
//!
//! Every stored value carries a `Kind` tag identifying which variant of the
//! value model it encodes. The tag is persisted as the second field of each
//! row, so the textual names are part of the on-disk format and must stay
//! stable.

use std::fmt;
use std::str::FromStr;

/// Discriminator for the closed set of storable value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Signed 64-bit integer
    Int,

    /// Unsigned 64-bit integer
    Uint,

    /// 64-bit float (finite values only)
    Float,

    /// Boolean
    Bool,

    /// UTF-8 string
    Str,

    /// Ordered sequence of named typed fields
    Record,

    /// String-keyed mapping of typed values
    Map,
}

impl Kind {
    /// The stable textual tag written into persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Str => "str",
            Kind::Record => "record",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ();

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "int" => Ok(Kind::Int),
            "uint" => Ok(Kind::Uint),
            "float" => Ok(Kind::Float),
            "bool" => Ok(Kind::Bool),
            "str" => Ok(Kind::Str),
            "record" => Ok(Kind::Record),
            "map" => Ok(Kind::Map),
            _ => Err(()),
        }
    }
}
