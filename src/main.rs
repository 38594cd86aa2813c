use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use number_guesser::{GameConfig, GuessError, HeaderSource, Session};

#[derive(Parser)]
#[command(name = "number_guesser", about = "Think of a number, the computer guesses it")]
struct Args {
    /// Largest number the player may pick.
    #[arg(long, env = "GUESSER_MAX", default_value_t = 1000)]
    max: u32,

    /// Banner file shown at startup, instead of the built-in one.
    #[arg(long)]
    header: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::new(args.max).context("Invalid --max")?;
    let header = args.header.map_or(HeaderSource::Embedded, HeaderSource::File);

    let mut session = Session::new(config, header, io::stdin().lock(), io::stdout().lock());
    match session.run() {
        Ok(()) => Ok(()),
        // the diagnostic has already been shown to the player
        Err(GuessError::HeaderMissing { .. }) => process::exit(0),
        Err(err) => Err(err).context("Game session failed"),
    }
}
