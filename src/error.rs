//! Error kinds for a listing pass. All of them are fatal to the current
//! invocation: nothing is retried and there is no partial-success mode.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("name too long: {0}")]
    NameTooLong(String),

    #[error("record exceeds {} bytes", crate::fmt::MAX_RECORD_LEN)]
    BufferExhausted,

    #[error("symlink changed between lstat and readlink: {}", .0.display())]
    LinkRead(PathBuf),

    #[error("record has {got} fields, expected {expected}")]
    FieldCountMismatch { expected: usize, got: usize },

    #[error("cannot stat {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("directory {} changed during listing", .0.display())]
    DirectoryChanged(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
