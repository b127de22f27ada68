//! Field record builder: turns one entry plus the active display options
//! into an ordered sequence of delimited text fields.

use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use chrono::{DateTime, Local};

use super::{Record, MAX_NAME_LEN};
use crate::entry::{DisplayOptions, Entry, FileKind, TimeKey};
use crate::error::{ListError, Result};
use crate::owner;

const SIZE_UNITS: [char; 7] = ['B', 'K', 'M', 'G', 'T', 'P', 'E'];
const SIX_MONTHS_SECS: i64 = 6 * 30 * 24 * 60 * 60;

/// Build the record for one entry.
///
/// Field order is fixed: inode (`-i`), block count (`-s`), the long-format
/// block (`-l`/`-n`), the name (with type symbol glued on for `-F`), and a
/// trailing ` -> target` field for symlinks in long format.
///
/// `dir` is the directory the entry was read from; it is only consulted to
/// resolve symlink targets.
pub fn build_record(entry: &Entry, opts: &DisplayOptions, dir: &Path) -> Result<Record> {
    if entry.name.as_bytes().len() > MAX_NAME_LEN {
        return Err(ListError::NameTooLong(
            entry.name.to_string_lossy().into_owned(),
        ));
    }

    let mut rec = Record::new();

    if opts.show_inode {
        rec.push_str(&entry.ino.to_string())?;
        rec.push_delim()?;
    }

    if opts.show_blocks {
        rec.push_str(&format_blocks(entry.blocks, opts))?;
        rec.push_delim()?;
    }

    if opts.long_format {
        rec.push_str(&mode_string(entry.mode))?;
        rec.push_delim()?;
        rec.push_str(&entry.nlink.to_string())?;
        rec.push_delim()?;
        rec.push_str(&owner_field(entry.uid, opts))?;
        rec.push_delim()?;
        rec.push_str(&group_field(entry.gid, opts))?;
        rec.push_delim()?;
        rec.push_str(&size_field(entry, opts))?;
        rec.push_delim()?;
        rec.push_str(&time_field(entry, opts))?;
        rec.push_delim()?;
    }

    rec.push_str(&quote_name(
        &entry.name.to_string_lossy(),
        opts.hide_nonprintable,
    ))?;

    if opts.classify {
        if let Some(sym) = type_symbol(entry.kind, entry.mode, opts.long_format) {
            rec.push_char(sym)?;
        }
    }

    if opts.long_format && entry.kind == FileKind::Symlink {
        push_link_field(&mut rec, entry, opts, dir)?;
    }

    Ok(rec)
}

/// Replace non-printable characters with `?` when quoting is active.
pub fn quote_name(name: &str, hide_nonprintable: bool) -> String {
    if !hide_nonprintable {
        return name.to_string();
    }
    name.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// Render a 512-byte block count under the active size policy. Without
/// `-h`/`-k` the count is rescaled to `BLOCKSIZE` units, rounded up.
pub fn format_blocks(blocks: u64, opts: &DisplayOptions) -> String {
    if opts.human_readable || opts.kilobytes {
        let bytes = blocks * opts.block_size;
        if opts.human_readable {
            format_size_human(bytes)
        } else {
            format_size_kilo(bytes)
        }
    } else {
        let bytes = blocks * 512;
        bytes.div_ceil(opts.block_size).to_string()
    }
}

/// Human-readable size: divide by 1024 while the value is >= 1000, one
/// fractional digit unless the result is >= 10 or exactly 0, unit letter
/// appended except for the base unit.
fn format_size_human(size: u64) -> String {
    let mut result = size as f64;
    let mut unit = 0usize;
    while result >= 1000.0 {
        result /= 1024.0;
        unit += 1;
    }
    let fracdigits = if result >= 10.0 || result == 0.0 { 0 } else { 1 };
    let mut out = format!("{:.*}", fracdigits, result);
    if unit > 0 && unit < SIZE_UNITS.len() {
        out.push(SIZE_UNITS[unit]);
    }
    out
}

/// Kilobyte size: divide by 1024, rounding up on any remainder.
fn format_size_kilo(size: u64) -> String {
    size.div_ceil(1024).to_string()
}

fn owner_field(uid: u32, opts: &DisplayOptions) -> String {
    if !opts.numeric_ids {
        if let Some(name) = owner::user_name(uid) {
            return quote_name(&name, opts.hide_nonprintable);
        }
    }
    uid.to_string()
}

fn group_field(gid: u32, opts: &DisplayOptions) -> String {
    if !opts.numeric_ids {
        if let Some(name) = owner::group_name(gid) {
            return quote_name(&name, opts.hide_nonprintable);
        }
    }
    gid.to_string()
}

/// Size field of the long-format block: `major,minor` for device special
/// files regardless of size flags, otherwise the byte count under the
/// active size policy.
fn size_field(entry: &Entry, opts: &DisplayOptions) -> String {
    match entry.kind {
        FileKind::Block | FileKind::Char => {
            format!("{},{}", dev_major(entry.rdev), dev_minor(entry.rdev))
        }
        _ if opts.human_readable => format_size_human(entry.size),
        _ if opts.kilobytes => format_size_kilo(entry.size),
        _ => entry.size.to_string(),
    }
}

/// Timestamps younger than six months print `%b %d %H:%M`, older ones
/// `%b %d %Y`.
fn time_field(entry: &Entry, opts: &DisplayOptions) -> String {
    let secs = match opts.time_key {
        TimeKey::Access => entry.atime,
        TimeKey::Modify => entry.mtime,
        TimeKey::Change => entry.ctime,
    };
    let dt = DateTime::from_timestamp(secs, 0)
        .unwrap_or_default()
        .with_timezone(&Local);
    if opts.now - secs < SIX_MONTHS_SECS {
        dt.format("%b %d %H:%M").to_string()
    } else {
        dt.format("%b %d %Y").to_string()
    }
}

/// strmode-style 10-character type and permission string.
fn mode_string(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(match mode & 0o170000 {
        0o040000 => 'd',
        0o020000 => 'c',
        0o060000 => 'b',
        0o120000 => 'l',
        0o010000 => 'p',
        0o140000 => 's',
        0o160000 => 'w',
        _ => '-',
    });
    for (i, bits) in [(mode >> 6) & 7, (mode >> 3) & 7, mode & 7]
        .into_iter()
        .enumerate()
    {
        out.push(if bits & 4 != 0 { 'r' } else { '-' });
        out.push(if bits & 2 != 0 { 'w' } else { '-' });
        let exec = bits & 1 != 0;
        let special = match i {
            0 => mode & 0o4000 != 0,
            1 => mode & 0o2000 != 0,
            _ => mode & 0o1000 != 0,
        };
        out.push(match (special, exec) {
            (true, true) if i == 2 => 't',
            (true, false) if i == 2 => 'T',
            (true, true) => 's',
            (true, false) => 'S',
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}

/// Type symbol appended to the name for `-F`. The symlink `@` is suppressed
/// in long format, where the ` -> target` field identifies the link.
fn type_symbol(kind: FileKind, mode: u32, long_format: bool) -> Option<char> {
    match kind {
        FileKind::Directory => Some('/'),
        FileKind::Fifo => Some('|'),
        FileKind::Symlink => {
            if long_format {
                None
            } else {
                Some('@')
            }
        }
        FileKind::Socket => Some('='),
        FileKind::Whiteout => Some('%'),
        _ => {
            if mode & 0o111 != 0 {
                Some('*')
            } else {
                None
            }
        }
    }
}

/// Append the ` -> target` field for a symlink in long format. A target
/// that grew between lstat and readlink means the directory is being
/// modified underneath us; that is fatal. With `-F` a type symbol for the
/// target is appended after a fresh lookup, silently omitted if the lookup
/// fails.
fn push_link_field(rec: &mut Record, entry: &Entry, opts: &DisplayOptions, dir: &Path) -> Result<()> {
    let path = dir.join(&entry.name);
    let target = fs::read_link(&path).map_err(|_| ListError::LinkRead(path.clone()))?;
    // Raw byte length, matching what lstat reported. Lossy conversion
    // would inflate non-UTF-8 bytes and misreport an unchanged link.
    if target.as_os_str().as_bytes().len() as u64 > entry.size {
        return Err(ListError::LinkRead(path));
    }
    let target_text = target.to_string_lossy().into_owned();

    rec.push_str(" -> ")?;
    rec.push_str(&quote_name(&target_text, opts.hide_nonprintable))?;

    if opts.classify {
        let target_path = if target.is_absolute() {
            target
        } else {
            dir.join(&target)
        };
        if let Ok(md) = fs::symlink_metadata(&target_path) {
            use std::os::unix::fs::MetadataExt;
            let kind = FileKind::from_mode(md.mode());
            if let Some(sym) = type_symbol(kind, md.mode(), opts.long_format) {
                rec.push_char(sym)?;
            }
        }
    }
    Ok(())
}

// Linux dev_t encoding.
fn dev_major(rdev: u64) -> u64 {
    ((rdev >> 32) & 0xffff_f000) | ((rdev >> 8) & 0xfff)
}

fn dev_minor(rdev: u64) -> u64 {
    ((rdev >> 12) & 0xffff_ff00) | (rdev & 0xff)
}
