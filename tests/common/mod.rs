use std::fs;
use tempfile::TempDir;

use lsr::entry::{DisplayOptions, Entry, FileKind, GridMode, Options};

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Options for deterministic pipe-style output: one per line, fixed width,
/// no tty behavior.
#[allow(dead_code)]
pub fn pipe_options() -> Options {
    Options {
        display: DisplayOptions {
            grid: GridMode::OnePerLine,
            ..DisplayOptions::default()
        },
        all: false,
        almost_all: false,
        list_directories: false,
        no_sort: false,
        recurse: false,
        target_width: 80,
        stdout_is_tty: false,
    }
}

/// A synthetic regular-file entry for layout tests.
#[allow(dead_code)]
pub fn make_entry(name: &str, size: u64) -> Entry {
    Entry {
        name: name.into(),
        kind: FileKind::Regular,
        ino: 1,
        size,
        blocks: size.div_ceil(512),
        nlink: 1,
        uid: 1000,
        gid: 1000,
        atime: 1_700_000_000,
        mtime: 1_700_000_000,
        ctime: 1_700_000_000,
        mode: 0o100644,
        rdev: 0,
    }
}
