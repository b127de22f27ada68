//! Width-fitted grid layout for a batch of records.
//!
//! Grid modes search for a row/column partition that fits the target line
//! width: columns-down grows the row count, rows-across shrinks the column
//! count, and either search accepts a degenerate (possibly overflowing)
//! grid once no further adjustment is possible. Per-entry field widths are
//! computed once; only the per-grid-column accumulators are rebuilt each
//! iteration.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use super::{ColumnWidths, Record};
use crate::entry::GridMode;
use crate::error::{ListError, Result};

/// Render a batch of records to `out`. Zero records produce no output.
pub fn layout<W: Write>(
    records: &[Record],
    mode: GridMode,
    target_width: usize,
    out: &mut W,
) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    match mode {
        GridMode::OnePerLine => one_per_line(records, out),
        GridMode::ColumnsDown | GridMode::RowsAcross => {
            grid(records, mode, target_width, out)
        }
    }
}

fn one_per_line<W: Write>(records: &[Record], out: &mut W) -> Result<()> {
    let mut widths = ColumnWidths::init(&records[0]);
    for record in &records[1..] {
        widths.update(record)?;
    }
    for record in records {
        render_record(out, record, &widths, true)?;
    }
    Ok(())
}

fn grid<W: Write>(
    records: &[Record],
    mode: GridMode,
    target_width: usize,
    out: &mut W,
) -> Result<()> {
    let entryc = records.len();
    let fields = records[0].field_count();

    let entry_widths: Vec<ColumnWidths> = records.iter().map(ColumnWidths::init).collect();
    for w in &entry_widths {
        if w.cols() != fields {
            return Err(ListError::FieldCountMismatch {
                expected: fields,
                got: w.cols(),
            });
        }
    }

    let mut rows = 1usize;
    let mut cols = entryc;
    let mut col_widths: Vec<ColumnWidths>;

    loop {
        match mode {
            GridMode::ColumnsDown => cols = entryc.div_ceil(rows),
            _ => rows = entryc.div_ceil(cols),
        }

        // Rebuild the per-grid-column accumulators, floored at width 1.
        col_widths = (0..cols).map(|_| ColumnWidths::uniform(fields, 1)).collect();
        for (i, ew) in entry_widths.iter().enumerate() {
            let coli = match mode {
                GridMode::ColumnsDown => i / rows,
                _ => i % cols,
            };
            col_widths[coli].merge_max(ew)?;
        }

        // Degenerate grids (one entry per row, or a single column) are
        // accepted even when they overflow the target.
        let degenerate = match mode {
            GridMode::ColumnsDown => rows == entryc,
            _ => cols == 1,
        };
        if degenerate {
            break;
        }

        let line_width: usize =
            col_widths.iter().map(ColumnWidths::total).sum::<usize>() + cols * fields - 1;
        if line_width <= target_width {
            break;
        }

        match mode {
            GridMode::ColumnsDown => rows += 1,
            _ => cols -= 1,
        }
    }

    match mode {
        GridMode::ColumnsDown => {
            for row in 0..rows {
                for col in 0..cols {
                    let p = row + col * rows;
                    if p < entryc {
                        render_record(out, &records[p], &col_widths[col], col == cols - 1)?;
                    } else {
                        // Keep vertical rows aligned when the last column
                        // runs short.
                        writeln!(out)?;
                    }
                }
            }
        }
        _ => {
            for (i, record) in records.iter().enumerate() {
                let coli = i % cols;
                let row_end = coli == cols - 1 || i == entryc - 1;
                render_record(out, record, &col_widths[coli], row_end)?;
            }
        }
    }
    Ok(())
}

/// Print one record padded to its grid column's field widths. Every field
/// is followed by one separating space; the final field of a row is left
/// unpadded and terminates the line.
fn render_record<W: Write>(
    out: &mut W,
    record: &Record,
    widths: &ColumnWidths,
    row_end: bool,
) -> Result<()> {
    let cols = widths.cols();
    let mut seen = 0;
    for (i, field) in record.fields().enumerate() {
        if i >= cols {
            seen += 1;
            continue;
        }
        seen += 1;
        out.write_all(field.as_bytes())?;
        let last = i == cols - 1;
        if !last || !row_end {
            let pad = widths.width(i).saturating_sub(field.width());
            for _ in 0..pad {
                out.write_all(b" ")?;
            }
            out.write_all(b" ")?;
        }
    }
    if seen != cols {
        return Err(ListError::FieldCountMismatch {
            expected: cols,
            got: seen,
        });
    }
    if row_end {
        out.write_all(b"\n")?;
    }
    Ok(())
}
