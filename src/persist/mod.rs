//! Persistence Module
//!
//! Row framing for whole-store serialization.
//!
//! ## Responsibilities
//! - Write (key, row) entries as delimited text records to any sink
//! - Parse records back from any source with line-accurate errors
//! - Quote fields so embedded delimiters and newlines survive round trips
//!
//! ## File Format
//! ```text
//! key,kind,payload\n                  <- constant header, line 1
//! int:1,int,42\n
//! m:1,map,"{""a"":{""k"":""str"",""v"":""b""}}"\n
//! str:1,str,hello\n
//! ```
//!
//! One record per line, three comma-delimited fields. A field containing a
//! comma, double quote, CR, or LF is wrapped in double quotes with embedded
//! quotes doubled. The header doubles as the format version marker: a
//! future revision of the format changes it.

mod reader;
mod writer;

pub use reader::RowReader;
pub use writer::RowWriter;

/// The constant header record, written first and required on load
pub const HEADER: [&str; 3] = ["key", "kind", "payload"];

/// Field delimiter
pub(crate) const DELIMITER: char = ',';

/// Field quote character
pub(crate) const QUOTE: char = '"';
