use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::{open_store, parse_digest};
use crate::Cli;

#[derive(Args)]
pub struct CatFileArgs {
    /// Object to print
    #[arg(value_name = "object")]
    object: String,
}

pub fn run(args: &CatFileArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli);
    let digest = parse_digest(&args.object)?;
    let data = store.read_blob(&digest)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&data)?;
    Ok(0)
}
