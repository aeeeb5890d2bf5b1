use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use clap::Args;
use minigit_object::{date, Commit};
use tracing::debug;

use super::{open_store, parse_digest};
use crate::Cli;

#[derive(Args)]
pub struct WriteCommitArgs {
    /// Commit message (read from stdin when omitted)
    #[arg(short = 'm')]
    message: Option<String>,

    /// Parent commit(s), in order
    #[arg(short = 'p', num_args = 1)]
    parent: Vec<String>,

    /// Tracked file as <name>=<blob>
    #[arg(short = 'f', long = "file", value_name = "name=blob")]
    files: Vec<String>,

    /// Timestamp to record instead of the current time (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    date: Option<String>,
}

pub fn run(args: &WriteCommitArgs, cli: &Cli) -> Result<i32> {
    let store = open_store(cli);

    let mut parents = Vec::with_capacity(args.parent.len());
    for parent in &args.parent {
        let digest = parse_digest(parent)?;
        store
            .read_commit(&digest)
            .with_context(|| format!("not a valid commit: {parent}"))?;
        parents.push(digest.to_hex());
    }

    let mut files = Vec::with_capacity(args.files.len());
    for entry in &args.files {
        let (name, blob) = entry
            .rsplit_once('=')
            .with_context(|| format!("invalid file entry '{entry}': expected <name>=<blob>"))?;
        let digest = parse_digest(blob)?;
        if !store.contains(&digest) {
            bail!("blob {blob} for '{name}' is not in the object store");
        }
        files.push((name.to_string(), digest.to_hex()));
    }

    let message = match args.message {
        Some(ref msg) => msg.clone(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(&['\n', '\r'][..]).to_string()
        }
    };

    let timestamp = match args.date {
        Some(ref ts) => {
            if date::parse_timestamp(ts).is_none() {
                bail!("invalid date '{ts}': expected YYYY-MM-DDTHH:MM:SS");
            }
            ts.clone()
        }
        None => date::now_timestamp(),
    };

    let commit = Commit::with_timestamp(message, timestamp, parents, files)?;
    let digest = store.write_commit(&commit)?;
    debug!(
        commit = %digest,
        parents = commit.parent_hashes().len(),
        files = commit.file_blobs().len(),
        "wrote commit"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{digest}")?;
    Ok(0)
}
