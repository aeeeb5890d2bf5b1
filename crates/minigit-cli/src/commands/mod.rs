pub mod cat_file;
pub mod hash_object;
pub mod show;
pub mod verify;
pub mod write_commit;

use anyhow::{Context, Result};
use clap::Subcommand;
use minigit_hash::Digest;
use minigit_store::{ObjectStore, StoreConfig};

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute object digests and optionally store the content as blobs
    HashObject(hash_object::HashObjectArgs),
    /// Create and store a commit object
    WriteCommit(write_commit::WriteCommitArgs),
    /// Print a stored commit record verbatim
    CatFile(cat_file::CatFileArgs),
    /// Show a commit in log format
    Show(show::ShowArgs),
    /// Check a stored commit's hash against its content
    Verify(verify::VerifyArgs),
}

/// Open the object store from the environment, with command-line overrides.
pub fn open_store(cli: &Cli) -> ObjectStore {
    let mut config = StoreConfig::from_env();
    if let Some(ref dir) = cli.dir {
        config = config.with_repo_dir(dir);
    }
    if cli.verify {
        config = config.with_verify_on_read(true);
    }
    ObjectStore::open(&config)
}

/// Parse an object name given on the command line.
pub fn parse_digest(name: &str) -> Result<Digest> {
    Digest::from_hex(name).with_context(|| format!("not a valid object name: {name}"))
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::HashObject(args) => hash_object::run(args, &cli),
        Commands::WriteCommit(args) => write_commit::run(args, &cli),
        Commands::CatFile(args) => cat_file::run(args, &cli),
        Commands::Show(args) => show::run(args, &cli),
        Commands::Verify(args) => verify::run(args, &cli),
    }
}
