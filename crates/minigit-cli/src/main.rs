mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;

use commands::Commands;

#[derive(Parser)]
#[command(name = "minigit", about = "Content-addressed commit objects", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository directory (default: $MINIGIT_DIR, then .minigit)
    #[arg(long = "dir", global = true)]
    dir: Option<PathBuf>,

    /// Reject commits whose stored hash does not match their content
    #[arg(long, global = true)]
    verify: bool,

    /// Log storage operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(128),
            }
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(128);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    commands::run(cli)
}
