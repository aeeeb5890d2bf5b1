use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::{open_store, parse_digest};
use crate::Cli;

#[derive(Args)]
pub struct ShowArgs {
    /// Commit to show
    #[arg(value_name = "commit")]
    commit: String,

    /// Also list the tracked files
    #[arg(long)]
    files: bool,
}

pub fn run(args: &ShowArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli);
    let digest = parse_digest(&args.commit)?;
    let commit = store.read_commit(&digest)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{commit}")?;
    if args.files {
        writeln!(out)?;
        for (name, blob) in commit.tree_entries() {
            writeln!(out, "{blob} {name}")?;
        }
    }
    Ok(0)
}
