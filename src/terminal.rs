//! Terminal and environment sources: output width, block size, buffered
//! stdout, and tty detection.

use crossterm::terminal;
use crossterm::tty::IsTty;
use std::io::{self, Stdout};

/// Width assumed when neither `COLUMNS` nor the terminal report one.
pub const TTY_COLUMNS: usize = 80;

/// Block unit assumed when `BLOCKSIZE` is absent or invalid.
pub const DEFAULT_BLOCK_SIZE: u64 = 512;

/// Target line width for the column layout: the `COLUMNS` environment
/// variable when set to a positive number, otherwise the live terminal
/// size, otherwise 80.
pub fn terminal_width() -> usize {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(n) = cols.trim().parse::<usize>() {
            if n > 0 {
                return n;
            }
        }
    }
    terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(TTY_COLUMNS)
}

/// Block unit from the `BLOCKSIZE` environment variable; non-positive or
/// unparsable values fall back to 512.
pub fn block_size() -> u64 {
    match std::env::var("BLOCKSIZE") {
        Ok(v) => match v.trim().parse::<i64>() {
            Ok(n) if n > 0 => n as u64,
            _ => DEFAULT_BLOCK_SIZE,
        },
        Err(_) => DEFAULT_BLOCK_SIZE,
    }
}

pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
