//! Entry ordering. The sort key and reverse flag are captured by the
//! returned closure, so no process-wide sort configuration exists.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use crate::entry::{Entry, SortKey};

/// Build a comparator for the given key. Lexicographic order is
/// case-insensitive ASCII; size and the time keys order descending
/// (largest / newest first). Ties under non-lexicographic keys are
/// intentionally left to the sort algorithm. `reverse` negates the final
/// ordering uniformly.
pub fn comparator(key: SortKey, reverse: bool) -> impl Fn(&Entry, &Entry) -> Ordering {
    move |a, b| {
        let ord = match key {
            SortKey::Lexicographic => cmp_ascii_ci(&a.name, &b.name),
            SortKey::Size => b.size.cmp(&a.size),
            SortKey::AccessTime => b.atime.cmp(&a.atime),
            SortKey::ModifyTime => b.mtime.cmp(&a.mtime),
            SortKey::ChangeTime => b.ctime.cmp(&a.ctime),
        };
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    }
}

fn cmp_ascii_ci(a: &OsStr, b: &OsStr) -> Ordering {
    let a = a.as_bytes().iter().map(|c| c.to_ascii_lowercase());
    let b = b.as_bytes().iter().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}
