use clap::Parser;
use crossterm::tty::IsTty;

/// BSD-style flag set. The format flags (`-1`, `-C`, `-l`, `-n`, `-x`)
/// override each other in last-one-wins order, as do `-c`/`-u` and
/// `-q`/`-w`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lsr",
    version,
    about = "List directory contents with a width-fitted column layout",
    disable_help_flag = true
)]
pub struct Args {
    /// Files and directories to list (default: current directory)
    pub paths: Vec<String>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,

    /// Include entries starting with '.', except '.' and '..'
    #[arg(short = 'A')]
    pub almost_all: bool,

    /// Include all entries, '.' and '..' included
    #[arg(short = 'a')]
    pub all: bool,

    /// Multi-column output, entries sorted down the columns
    #[arg(
        short = 'C',
        overrides_with_all = ["long_format", "numeric_ids", "rows_across", "one_per_line"]
    )]
    pub columns: bool,

    /// Use the status-change time for display and sorting
    #[arg(short = 'c', overrides_with = "access_time")]
    pub change_time: bool,

    /// List directories themselves, not their contents
    #[arg(short = 'd')]
    pub directory: bool,

    /// Append a type symbol to each name (/ | @ = % *)
    #[arg(short = 'F')]
    pub classify: bool,

    /// Do not sort
    #[arg(short = 'f')]
    pub no_sort: bool,

    /// Human-readable sizes (B, K, M, ...)
    #[arg(short = 'h')]
    pub human_readable: bool,

    /// Print each entry's inode number
    #[arg(short = 'i')]
    pub inode: bool,

    /// Sizes in kilobytes, rounded up
    #[arg(short = 'k')]
    pub kilobytes: bool,

    /// Long format
    #[arg(
        short = 'l',
        overrides_with_all = ["columns", "numeric_ids", "rows_across", "one_per_line"]
    )]
    pub long_format: bool,

    /// Long format with numeric user and group ids
    #[arg(
        short = 'n',
        overrides_with_all = ["columns", "long_format", "rows_across", "one_per_line"]
    )]
    pub numeric_ids: bool,

    /// Replace non-printable name characters with '?'
    #[arg(short = 'q', overrides_with = "raw_nonprintable")]
    pub hide_nonprintable: bool,

    /// Recursively list subdirectories
    #[arg(short = 'R')]
    pub recurse: bool,

    /// Reverse the sort order
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Sort by size, largest first
    #[arg(short = 'S')]
    pub sort_size: bool,

    /// Print each entry's block count
    #[arg(short = 's')]
    pub blocks: bool,

    /// Sort by time, newest first
    #[arg(short = 't')]
    pub sort_time: bool,

    /// Use the access time for display and sorting
    #[arg(short = 'u', overrides_with = "change_time")]
    pub access_time: bool,

    /// Print non-printable name characters as-is
    #[arg(short = 'w', overrides_with = "hide_nonprintable")]
    pub raw_nonprintable: bool,

    /// Multi-column output, entries sorted across the rows
    #[arg(
        short = 'x',
        overrides_with_all = ["columns", "long_format", "numeric_ids", "one_per_line"]
    )]
    pub rows_across: bool,

    /// One entry per line
    #[arg(
        short = '1',
        overrides_with_all = ["columns", "long_format", "numeric_ids", "rows_across"]
    )]
    pub one_per_line: bool,
}

impl Args {
    /// Enforce invariants after parsing: the super user always gets `-A`,
    /// `-q` defaults on for terminals and `-w` for pipes, and the format
    /// defaults to `-C` on terminals and `-1` otherwise.
    pub fn validated(mut self) -> Self {
        if users::get_current_uid() == 0 {
            self.almost_all = true;
        }
        let tty = std::io::stdout().is_tty();
        if !self.hide_nonprintable && !self.raw_nonprintable {
            if tty {
                self.hide_nonprintable = true;
            } else {
                self.raw_nonprintable = true;
            }
        }
        if !(self.one_per_line
            || self.columns
            || self.long_format
            || self.numeric_ids
            || self.rows_across)
        {
            if tty {
                self.columns = true;
            } else {
                self.one_per_line = true;
            }
        }
        self
    }
}
