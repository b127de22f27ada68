//! Per-field-position maximum rendered widths across a set of records.

use unicode_width::UnicodeWidthStr;

use super::Record;
use crate::error::{ListError, Result};

/// Maximum observed width (in character cells) per field position.
///
/// Mixing records with differing field counts is a caller bug and fails
/// fast with `FieldCountMismatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    /// Seed the tracker from one record's field widths.
    pub fn init(record: &Record) -> Self {
        ColumnWidths {
            widths: record.fields().map(cell_width).collect(),
        }
    }

    /// A tracker with `cols` fields all set to `width`.
    pub fn uniform(cols: usize, width: usize) -> Self {
        ColumnWidths {
            widths: vec![width; cols],
        }
    }

    pub fn cols(&self) -> usize {
        self.widths.len()
    }

    pub fn width(&self, field: usize) -> usize {
        self.widths[field]
    }

    /// Sum of all field widths, without separators.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Fold in a later record, keeping the per-field maximum.
    pub fn update(&mut self, record: &Record) -> Result<()> {
        let mut seen = 0;
        for (i, field) in record.fields().enumerate() {
            if i >= self.widths.len() {
                seen += 1;
                continue;
            }
            self.widths[i] = self.widths[i].max(cell_width(field));
            seen += 1;
        }
        if seen != self.widths.len() {
            return Err(ListError::FieldCountMismatch {
                expected: self.widths.len(),
                got: seen,
            });
        }
        Ok(())
    }

    /// Keep the per-field maximum of two trackers.
    pub fn merge_max(&mut self, other: &ColumnWidths) -> Result<()> {
        if self.widths.len() != other.widths.len() {
            return Err(ListError::FieldCountMismatch {
                expected: self.widths.len(),
                got: other.widths.len(),
            });
        }
        for (w, o) in self.widths.iter_mut().zip(&other.widths) {
            *w = (*w).max(*o);
        }
        Ok(())
    }
}

fn cell_width(s: &str) -> usize {
    s.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> Record {
        let mut rec = Record::new();
        for (i, f) in fields.iter().enumerate() {
            if i > 0 {
                rec.push_delim().unwrap();
            }
            rec.push_str(f).unwrap();
        }
        rec
    }

    #[test]
    fn init_seeds_per_field_widths() {
        let w = ColumnWidths::init(&record(&["a", "bbb", "cc"]));
        assert_eq!(w.cols(), 3);
        assert_eq!(w.width(0), 1);
        assert_eq!(w.width(1), 3);
        assert_eq!(w.width(2), 2);
    }

    #[test]
    fn update_keeps_per_field_maximum() {
        let mut w = ColumnWidths::init(&record(&["a", "bbb"]));
        w.update(&record(&["xxxx", "y"])).unwrap();
        assert_eq!(w.width(0), 4);
        assert_eq!(w.width(1), 3);
        assert_eq!(w.total(), 7);
    }

    #[test]
    fn mismatched_field_count_fails_fast() {
        let mut w = ColumnWidths::init(&record(&["a", "b"]));
        let err = w.update(&record(&["a", "b", "c"])).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ListError::FieldCountMismatch {
                expected: 2,
                got: 3
            }
        ));
        let err = w.update(&record(&["a"])).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ListError::FieldCountMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn widths_are_measured_in_cells() {
        // CJK characters occupy two cells each.
        let w = ColumnWidths::init(&record(&["日本"]));
        assert_eq!(w.width(0), 4);
    }
}
