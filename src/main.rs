#![forbid(unsafe_code)]

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use lsr::cli::Args;
use lsr::entry::Options;
use lsr::terminal;
use lsr::traverse::{list_entries, traverse};
use lsr::walk;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("lsr: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    let opts = Options::from_args(&args);
    let mut out = terminal::buffered_stdout();

    if args.paths.is_empty() {
        if opts.list_directories {
            let entry = walk::stat_operand(".")?;
            list_entries(&mut out, Path::new(""), &[entry], &opts)?;
        } else {
            traverse(&mut out, Path::new("."), &opts, false, 0)?;
        }
    } else {
        let (non_dirs, dirs) = walk::partition_operands(&args.paths)?;
        if opts.list_directories {
            // -d treats every operand as a plain entry, non-directories
            // first.
            let mut all = non_dirs;
            all.extend(dirs);
            list_entries(&mut out, Path::new(""), &all, &opts)?;
        } else {
            if !non_dirs.is_empty() {
                list_entries(&mut out, Path::new(""), &non_dirs, &opts)?;
                if !dirs.is_empty() {
                    writeln!(out)?;
                }
            }
            let intro = args.paths.len() > 1;
            for (i, dir) in dirs.iter().enumerate() {
                traverse(&mut out, Path::new(&dir.name), &opts, intro, i)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
