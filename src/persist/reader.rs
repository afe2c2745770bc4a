//! Row reader
//!
//! Parses the delimited text format back into (key, row) entries. The
//! reader works over a fully-buffered source: load is all-or-nothing, so
//! there is nothing to gain from incremental reads, and buffering first
//! means an I/O error can never leave a half-parsed state behind.
//!
//! Every parse failure is a `CorruptRecord` naming the line the record
//! started on.

use crate::error::{FlatKvError, Result};
use crate::value::{Kind, Row};

use super::{DELIMITER, HEADER, QUOTE};

/// Where a field ended inside a record
enum FieldEnd {
    Delimiter,
    RecordEnd,
}

/// Parses header and entry records from buffered source text
pub struct RowReader<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> RowReader<'a> {
    /// Wrap buffered source text
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Read and verify the constant header record
    pub fn expect_header(&mut self) -> Result<()> {
        let line = self.line;
        match self.read_record()? {
            Some(fields) if fields == HEADER => Ok(()),
            _ => Err(FlatKvError::CorruptRecord {
                line,
                detail: format!("missing or unrecognized header, expected {:?}", HEADER.join(",")),
            }),
        }
    }

    /// Read the next entry, or `None` at end of input
    pub fn next_entry(&mut self) -> Result<Option<(String, Row)>> {
        let line = self.line;
        let fields = match self.read_record()? {
            Some(fields) => fields,
            None => return Ok(None),
        };

        if fields.len() != 3 {
            return Err(FlatKvError::CorruptRecord {
                line,
                detail: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let mut fields = fields.into_iter();
        let key = fields.next().unwrap_or_default();
        let tag = fields.next().unwrap_or_default();
        let payload = fields.next().unwrap_or_default();

        let kind: Kind = tag.parse().map_err(|_| FlatKvError::CorruptRecord {
            line,
            detail: format!("unknown kind tag {:?}", tag),
        })?;

        Ok(Some((key, Row::new(kind, payload))))
    }

    /// Read one raw record, or `None` at end of input
    fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        if self.pos >= self.input.len() {
            return Ok(None);
        }

        let mut fields = Vec::with_capacity(HEADER.len());
        loop {
            let (field, end) = self.read_field()?;
            fields.push(field);
            if matches!(end, FieldEnd::RecordEnd) {
                return Ok(Some(fields));
            }
        }
    }

    /// Read one field and report what terminated it
    fn read_field(&mut self) -> Result<(String, FieldEnd)> {
        if self.peek() == Some(QUOTE) {
            self.read_quoted_field()
        } else {
            self.read_bare_field()
        }
    }

    fn read_bare_field(&mut self) -> Result<(String, FieldEnd)> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            match ch {
                ch if ch == DELIMITER => {
                    let field = self.input[start..self.pos].to_string();
                    self.advance(ch);
                    return Ok((field, FieldEnd::Delimiter));
                }
                '\n' | '\r' => {
                    let field = self.input[start..self.pos].to_string();
                    self.consume_record_end()?;
                    return Ok((field, FieldEnd::RecordEnd));
                }
                ch => self.advance(ch),
            }
        }

        // Input ended without a trailing newline; the record is still valid
        Ok((self.input[start..].to_string(), FieldEnd::RecordEnd))
    }

    fn read_quoted_field(&mut self) -> Result<(String, FieldEnd)> {
        let opened_at = self.line;
        self.advance(QUOTE);

        let mut field = String::new();
        while let Some(ch) = self.peek() {
            self.advance(ch);
            if ch != QUOTE {
                field.push(ch);
                continue;
            }

            // A quote inside a quoted field is either a doubled (escaped)
            // quote or the closing quote.
            match self.peek() {
                Some(next) if next == QUOTE => {
                    self.advance(QUOTE);
                    field.push(QUOTE);
                }
                Some(next) if next == DELIMITER => {
                    self.advance(next);
                    return Ok((field, FieldEnd::Delimiter));
                }
                Some('\n') | Some('\r') => {
                    self.consume_record_end()?;
                    return Ok((field, FieldEnd::RecordEnd));
                }
                None => return Ok((field, FieldEnd::RecordEnd)),
                Some(other) => {
                    return Err(FlatKvError::CorruptRecord {
                        line: self.line,
                        detail: format!("unexpected character {:?} after closing quote", other),
                    });
                }
            }
        }

        Err(FlatKvError::CorruptRecord {
            line: opened_at,
            detail: "unterminated quoted field".to_string(),
        })
    }

    /// Consume `\n` or `\r\n` at the current position
    fn consume_record_end(&mut self) -> Result<()> {
        if self.peek() == Some('\r') {
            self.advance('\r');
            if self.peek() != Some('\n') {
                return Err(FlatKvError::CorruptRecord {
                    line: self.line,
                    detail: "bare carriage return in record".to_string(),
                });
            }
        }
        if self.peek() == Some('\n') {
            self.advance('\n');
            self.line += 1;
        }
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
    }
}
