//! Entry formatting and column layout: record building, per-field width
//! tracking, and the width-fitting grid search.

mod grid;
mod record;
mod widths;

pub use grid::layout;
pub use record::{build_record, format_blocks, quote_name};
pub use widths::ColumnWidths;

use crate::error::{ListError, Result};

/// Reserved field separator. Under `-q` name quoting replaces control
/// characters, so rendered text stays delimiter-free; a raw (`-w`) name
/// carrying this byte splits its record and fails the field-count check,
/// which is fatal. Every other field is built from printable output.
pub const DELIMITER: char = '\u{8}';

/// Hard ceiling on one record's rendered text.
pub const MAX_RECORD_LEN: usize = 4096;

/// Maximum rendered name length in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// Delimiter-separated sequence of rendered text fields for one entry.
///
/// Every record built from the same batch under the same options has the
/// same field count; the width tracker enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    buf: String,
}

impl Record {
    pub(crate) fn new() -> Self {
        Record { buf: String::new() }
    }

    pub(crate) fn push_str(&mut self, s: &str) -> Result<()> {
        if self.buf.len() + s.len() > MAX_RECORD_LEN {
            return Err(ListError::BufferExhausted);
        }
        self.buf.push_str(s);
        Ok(())
    }

    pub(crate) fn push_char(&mut self, c: char) -> Result<()> {
        if self.buf.len() + c.len_utf8() > MAX_RECORD_LEN {
            return Err(ListError::BufferExhausted);
        }
        self.buf.push(c);
        Ok(())
    }

    pub(crate) fn push_delim(&mut self) -> Result<()> {
        self.push_char(DELIMITER)
    }

    /// Iterate the fields in order. An empty record still has one (empty)
    /// field, mirroring the delimiter-count-plus-one contract.
    pub fn fields(&self) -> std::str::Split<'_, char> {
        self.buf.split(DELIMITER)
    }

    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_count_is_delimiter_count_plus_one() {
        let mut rec = Record::new();
        rec.push_str("a").unwrap();
        rec.push_delim().unwrap();
        rec.push_str("bb").unwrap();
        rec.push_delim().unwrap();
        rec.push_str("ccc").unwrap();
        let delims = rec.as_str().matches(DELIMITER).count();
        assert_eq!(rec.field_count(), delims + 1);
        assert_eq!(rec.fields().collect::<Vec<_>>(), ["a", "bb", "ccc"]);
    }

    #[test]
    fn oversized_push_is_buffer_exhausted() {
        let mut rec = Record::new();
        let big = "x".repeat(MAX_RECORD_LEN + 1);
        assert!(matches!(
            rec.push_str(&big),
            Err(ListError::BufferExhausted)
        ));
    }
}
