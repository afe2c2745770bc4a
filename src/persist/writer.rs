//! Row writer
//!
//! Serializes entries into the delimited text format over any
//! `std::io::Write`. Callers that need an atomic snapshot write into an
//! in-memory buffer first and hand the finished bytes to the sink in one
//! call; see `Store::commit_to`.

use std::io::Write;

use crate::error::Result;
use crate::value::Row;

use super::{DELIMITER, HEADER, QUOTE};

/// Writes header and entry records to a sink
pub struct RowWriter<W: Write> {
    inner: W,
}

impl<W: Write> RowWriter<W> {
    /// Wrap a sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the constant header record
    pub fn write_header(&mut self) -> Result<()> {
        self.write_record(&HEADER)
    }

    /// Write one entry as a three-field record
    pub fn write_entry(&mut self, key: &str, row: &Row) -> Result<()> {
        self.write_record(&[key, row.kind.as_str(), &row.payload])
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwrap back into the sink
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_record(&mut self, fields: &[&str]) -> Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                write_char(&mut self.inner, DELIMITER)?;
            }
            self.write_field(field)?;
        }
        write_char(&mut self.inner, '\n')?;
        Ok(())
    }

    fn write_field(&mut self, field: &str) -> Result<()> {
        if !needs_quoting(field) {
            self.inner.write_all(field.as_bytes())?;
            return Ok(());
        }

        write_char(&mut self.inner, QUOTE)?;
        for ch in field.chars() {
            if ch == QUOTE {
                // Embedded quotes are doubled
                write_char(&mut self.inner, QUOTE)?;
            }
            let mut buf = [0u8; 4];
            self.inner.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        }
        write_char(&mut self.inner, QUOTE)?;
        Ok(())
    }
}

/// A field must be quoted when it contains the delimiter, a quote, or a
/// line break
fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|ch| ch == DELIMITER || ch == QUOTE || ch == '\n' || ch == '\r')
}

fn write_char<W: Write>(sink: &mut W, ch: char) -> Result<()> {
    let mut buf = [0u8; 4];
    sink.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
    Ok(())
}
