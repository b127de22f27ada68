//! Per-directory listing orchestration: intro lines, sorting, the `total`
//! block line, layout invocation, and `-R` recursion.

use std::io::Write;
use std::path::Path;

use crate::entry::{Entry, FileKind, Options};
use crate::error::Result;
use crate::fmt::{self, build_record, format_blocks, quote_name, Record};
use crate::walk;

/// Build records for a batch and hand them to the layout engine. Used for
/// directory contents and for the non-directory operand batch (`dir` is
/// empty there, since operand names are full paths).
pub fn list_entries<W: Write>(
    out: &mut W,
    dir: &Path,
    entries: &[Entry],
    opts: &Options,
) -> Result<()> {
    let records: Vec<Record> = entries
        .iter()
        .map(|e| build_record(e, &opts.display, dir))
        .collect::<Result<_>>()?;
    fmt::layout(&records, opts.display.grid, opts.target_width, out)
}

/// List one directory. `intro` prints the `dir:` preamble (always on under
/// `-R`); `depth` separates consecutive listings with a blank line.
pub fn traverse<W: Write>(
    out: &mut W,
    dir: &Path,
    opts: &Options,
    intro: bool,
    depth: usize,
) -> Result<()> {
    if depth > 0 {
        writeln!(out)?;
    }
    if intro || opts.recurse {
        let name = dir.to_string_lossy();
        writeln!(
            out,
            "{}:",
            quote_name(&name, opts.display.hide_nonprintable)
        )?;
    }

    let mut entries = walk::read_directory(dir, opts)?;
    walk::sort_entries(&mut entries, opts);

    if opts.display.long_format || (opts.display.show_blocks && opts.stdout_is_tty) {
        let total: u64 = entries.iter().map(|e| e.blocks).sum();
        writeln!(out, "total {}", format_blocks(total, &opts.display))?;
    }

    list_entries(out, dir, &entries, opts)?;

    if opts.recurse {
        for entry in &entries {
            if entry.kind == FileKind::Directory && !walk::is_dot_dir(&entry.name) {
                traverse(out, &dir.join(&entry.name), opts, intro, depth + 1)?;
            }
        }
    }
    Ok(())
}
