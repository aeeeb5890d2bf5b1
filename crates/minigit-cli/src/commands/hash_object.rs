use std::io::{self, Read, Write};

use anyhow::Result;
use clap::Args;
use minigit_hash::{Digest, Hasher};
use minigit_store::ObjectStore;

use super::open_store;
use crate::Cli;

#[derive(Args)]
pub struct HashObjectArgs {
    /// Read the content from stdin
    #[arg(long)]
    stdin: bool,

    /// Actually write the content into the object store
    #[arg(short = 'w')]
    write: bool,

    /// Files to hash
    #[arg(value_name = "file")]
    files: Vec<String>,
}

pub fn run(args: &HashObjectArgs, cli: &Cli) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Only need the store if writing
    let store = if args.write { Some(open_store(cli)) } else { None };

    if args.stdin {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        let digest = hash_and_maybe_write(&data, store.as_ref())?;
        writeln!(out, "{digest}")?;
    }

    for file in &args.files {
        let data = std::fs::read(file)?;
        let digest = hash_and_maybe_write(&data, store.as_ref())?;
        writeln!(out, "{digest}")?;
    }

    Ok(0)
}

fn hash_and_maybe_write(data: &[u8], store: Option<&ObjectStore>) -> Result<Digest> {
    match store {
        Some(store) => Ok(store.write_blob(data)?),
        None => Ok(Hasher::digest(data)),
    }
}
