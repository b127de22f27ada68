//! Directory reading and operand handling: metadata capture, hidden-entry
//! filtering, operand partitioning, and detection of directories changing
//! underneath a listing.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::entry::{Entry, FileKind, Options, SortKey};
use crate::error::{ListError, Result};
use crate::sort::comparator;

pub fn is_dot_dir(name: &OsStr) -> bool {
    let bytes = name.as_bytes();
    bytes == b"." || bytes == b".."
}

/// Whether an entry name is shown under the active hidden-file flags.
/// Names are raw bytes; a filename need not be UTF-8.
pub fn display_file(name: &OsStr, all: bool, almost_all: bool) -> bool {
    if is_dot_dir(name) {
        all
    } else if name.as_bytes().first() == Some(&b'.') {
        all || almost_all
    } else {
        true
    }
}

/// lstat one name inside `dir` and capture its metadata snapshot.
pub fn stat_entry(dir: &Path, name: &OsStr) -> Result<Entry> {
    let path = if name.is_empty() {
        dir.to_path_buf()
    } else {
        dir.join(name)
    };
    let md = fs::symlink_metadata(&path).map_err(|source| ListError::Metadata {
        path: path.clone(),
        source,
    })?;
    Ok(Entry::from_metadata(name.to_os_string(), &md))
}

/// Read one directory into a batch of entries, filtered per the hidden-file
/// flags. `.` and `..` are synthesized under `-a` since the iterator never
/// yields them. The entry count is taken twice; a disagreement means the
/// directory was modified during the listing, which is fatal.
pub fn read_directory(dir: &Path, opts: &Options) -> Result<Vec<Entry>> {
    let expected = fs::read_dir(dir)
        .map_err(|source| ListError::Metadata {
            path: dir.to_path_buf(),
            source,
        })?
        .count();

    let mut entries = Vec::new();
    if opts.all {
        for name in [".", ".."] {
            entries.push(stat_entry(dir, OsStr::new(name))?);
        }
    }

    let mut seen = 0;
    for dirent in fs::read_dir(dir).map_err(|source| ListError::Metadata {
        path: dir.to_path_buf(),
        source,
    })? {
        let dirent = dirent?;
        seen += 1;
        let name = dirent.file_name();
        if !display_file(&name, opts.all, opts.almost_all) {
            continue;
        }
        entries.push(stat_entry(dir, &name)?);
    }

    if seen != expected {
        return Err(ListError::DirectoryChanged(dir.to_path_buf()));
    }
    Ok(entries)
}

/// Sort a directory batch: lexicographic first, then the secondary key on
/// top of it. The secondary sort is unstable, so tie order under size/time
/// keys is whatever the sort algorithm leaves behind.
pub fn sort_entries(entries: &mut [Entry], opts: &Options) {
    if opts.no_sort {
        return;
    }
    let reverse = opts.display.reverse;
    entries.sort_by(comparator(SortKey::Lexicographic, reverse));
    if opts.display.sort != SortKey::Lexicographic {
        entries.sort_unstable_by(comparator(opts.display.sort, reverse));
    }
}

/// Stat the command-line operands and partition them: non-directories
/// first, directories after, each partition sorted lexicographically
/// (never reversed — reversal applies within directory batches only).
pub fn partition_operands(paths: &[String]) -> Result<(Vec<Entry>, Vec<Entry>)> {
    let mut non_dirs = Vec::new();
    let mut dirs = Vec::new();
    for path in paths {
        let entry = stat_operand(path)?;
        if entry.kind == FileKind::Directory {
            dirs.push(entry);
        } else {
            non_dirs.push(entry);
        }
    }
    non_dirs.sort_by(comparator(SortKey::Lexicographic, false));
    dirs.sort_by(comparator(SortKey::Lexicographic, false));
    Ok((non_dirs, dirs))
}

/// lstat one operand, keeping the path as typed for display.
pub fn stat_operand(path: &str) -> Result<Entry> {
    let md = fs::symlink_metadata(path).map_err(|source| ListError::Metadata {
        path: path.into(),
        source,
    })?;
    Ok(Entry::from_metadata(OsString::from(path), &md))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_dirs_require_all_flag() {
        assert!(!display_file(OsStr::new("."), false, false));
        assert!(!display_file(OsStr::new(".."), false, true));
        assert!(display_file(OsStr::new("."), true, true));
    }

    #[test]
    fn dotfiles_require_all_or_almost_all() {
        assert!(!display_file(OsStr::new(".hidden"), false, false));
        assert!(display_file(OsStr::new(".hidden"), false, true));
        assert!(display_file(OsStr::new(".hidden"), true, false));
        assert!(display_file(OsStr::new("plain"), false, false));
    }

    #[test]
    fn non_utf8_dotfile_is_still_hidden() {
        let name = OsStr::from_bytes(b".h\xffidden");
        assert!(!display_file(name, false, false));
        assert!(display_file(name, false, true));
    }
}
