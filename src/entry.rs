//! Entry metadata snapshots and the display-option model shared by the
//! formatting and layout engine.

use std::ffi::OsString;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use crate::cli::Args;
use crate::terminal;

/// The filesystem object kind, decoded from the type bits of `st_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    Block,
    Char,
    Whiteout,
}

const S_IFMT: u32 = 0o170000;

impl FileKind {
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            0o040000 => FileKind::Directory,
            0o120000 => FileKind::Symlink,
            0o010000 => FileKind::Fifo,
            0o140000 => FileKind::Socket,
            0o060000 => FileKind::Block,
            0o020000 => FileKind::Char,
            0o160000 => FileKind::Whiteout,
            _ => FileKind::Regular,
        }
    }
}

/// One filesystem object's metadata, captured once per listing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Display name: the filename component, or the operand as typed for
    /// command-line arguments. Kept as raw bytes since filenames need not
    /// be UTF-8; lossy conversion happens only at render time.
    pub name: OsString,
    pub kind: FileKind,
    pub ino: u64,
    /// Size in bytes (for symlinks: the target length, per lstat).
    pub size: u64,
    /// Block count in 512-byte units.
    pub blocks: u64,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    /// Access / modify / change timestamps in unix seconds.
    pub atime: i64,
    pub mtime: i64,
    pub ctime: i64,
    /// Raw `st_mode` bits (permissions + type).
    pub mode: u32,
    /// Device id for block/char special files.
    pub rdev: u64,
}

impl Entry {
    pub fn from_metadata(name: OsString, md: &Metadata) -> Self {
        Entry {
            name,
            kind: FileKind::from_mode(md.mode()),
            ino: md.ino(),
            size: md.size(),
            blocks: md.blocks(),
            nlink: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            atime: md.atime(),
            mtime: md.mtime(),
            ctime: md.ctime(),
            mode: md.mode(),
            rdev: md.rdev(),
        }
    }
}

/// Which timestamp `-l` prints and `-t` sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKey {
    Access,
    Modify,
    Change,
}

/// Sort key for a directory batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Lexicographic,
    Size,
    AccessTime,
    ModifyTime,
    ChangeTime,
}

/// How a batch of records is arranged on the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// One record per line (`-1`, `-l`, `-n`).
    OnePerLine,
    /// Entries fill down a column before starting the next (`-C`).
    ColumnsDown,
    /// Entries fill across a row before wrapping (`-x`).
    RowsAcross,
}

/// Immutable snapshot of every setting the formatting core consults.
///
/// `block_size` and `now` are captured once at startup so that building a
/// record is a pure function of (entry, options, directory).
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub show_inode: bool,
    pub show_blocks: bool,
    pub long_format: bool,
    pub numeric_ids: bool,
    pub human_readable: bool,
    pub kilobytes: bool,
    pub classify: bool,
    pub hide_nonprintable: bool,
    pub time_key: TimeKey,
    pub sort: SortKey,
    pub reverse: bool,
    pub grid: GridMode,
    /// `BLOCKSIZE` override (512 when absent or invalid).
    pub block_size: u64,
    /// Unix seconds at startup, used for the six-month timestamp cutoff.
    pub now: i64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_inode: false,
            show_blocks: false,
            long_format: false,
            numeric_ids: false,
            human_readable: false,
            kilobytes: false,
            classify: false,
            hide_nonprintable: false,
            time_key: TimeKey::Modify,
            sort: SortKey::Lexicographic,
            reverse: false,
            grid: GridMode::OnePerLine,
            block_size: terminal::DEFAULT_BLOCK_SIZE,
            now: 0,
        }
    }
}

/// Full invocation settings: the display snapshot plus the traversal knobs
/// the formatting core never sees.
#[derive(Debug, Clone)]
pub struct Options {
    pub display: DisplayOptions,
    /// `-a`: show everything, including `.` and `..`.
    pub all: bool,
    /// `-A`: show dotfiles but not `.` and `..`.
    pub almost_all: bool,
    /// `-d`: list operands themselves, not their contents.
    pub list_directories: bool,
    /// `-f`: no sorting at all.
    pub no_sort: bool,
    /// `-R`: recurse into subdirectories.
    pub recurse: bool,
    pub target_width: usize,
    pub stdout_is_tty: bool,
}

impl Options {
    /// Resolve validated CLI flags plus environment into one snapshot.
    pub fn from_args(args: &Args) -> Self {
        let long_format = args.long_format || args.numeric_ids;
        let grid = if long_format || args.one_per_line {
            GridMode::OnePerLine
        } else if args.rows_across {
            GridMode::RowsAcross
        } else {
            GridMode::ColumnsDown
        };
        let time_key = if args.change_time {
            TimeKey::Change
        } else if args.access_time {
            TimeKey::Access
        } else {
            TimeKey::Modify
        };
        let sort = if args.sort_time {
            match time_key {
                TimeKey::Access => SortKey::AccessTime,
                TimeKey::Modify => SortKey::ModifyTime,
                TimeKey::Change => SortKey::ChangeTime,
            }
        } else if args.sort_size {
            SortKey::Size
        } else {
            SortKey::Lexicographic
        };

        Options {
            display: DisplayOptions {
                show_inode: args.inode,
                show_blocks: args.blocks,
                long_format,
                numeric_ids: args.numeric_ids,
                human_readable: args.human_readable,
                kilobytes: args.kilobytes,
                classify: args.classify,
                hide_nonprintable: args.hide_nonprintable && !args.raw_nonprintable,
                time_key,
                sort,
                reverse: args.reverse,
                grid,
                block_size: terminal::block_size(),
                now: chrono::Local::now().timestamp(),
            },
            all: args.all,
            almost_all: args.almost_all || args.all,
            list_directories: args.directory,
            no_sort: args.no_sort,
            recurse: args.recurse,
            target_width: terminal::terminal_width(),
            stdout_is_tty: terminal::stdout_is_tty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_decoded_from_mode_type_bits() {
        assert_eq!(FileKind::from_mode(0o040755), FileKind::Directory);
        assert_eq!(FileKind::from_mode(0o120777), FileKind::Symlink);
        assert_eq!(FileKind::from_mode(0o100644), FileKind::Regular);
        assert_eq!(FileKind::from_mode(0o010600), FileKind::Fifo);
        assert_eq!(FileKind::from_mode(0o140755), FileKind::Socket);
        assert_eq!(FileKind::from_mode(0o060660), FileKind::Block);
        assert_eq!(FileKind::from_mode(0o020660), FileKind::Char);
        assert_eq!(FileKind::from_mode(0o160000), FileKind::Whiteout);
    }
}
