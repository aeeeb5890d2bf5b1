use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::{open_store, parse_digest};
use crate::Cli;

#[derive(Args)]
pub struct VerifyArgs {
    /// Commit(s) to check
    #[arg(value_name = "commit", required = true)]
    commits: Vec<String>,
}

/// Exit status 1 if any commit's stored hash differs from its content.
pub fn run(args: &VerifyArgs, cli: &Cli) -> Result<i32> {
    // Mismatches are reported here, not as read errors.
    let mut store = open_store(cli);
    store.set_verify_on_read(false);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut code = 0;
    for name in &args.commits {
        let digest = parse_digest(name)?;
        let commit = store.read_commit(&digest)?;
        let computed = commit.calculate_hash();
        if commit.hash() == computed {
            writeln!(out, "ok {}", commit.hash())?;
        } else {
            writeln!(out, "mismatch {} {computed}", commit.hash())?;
            code = 1;
        }
    }
    Ok(code)
}
