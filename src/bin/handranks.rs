//! Generates the perfect-hash rank table and writes it to disk.
use anyhow::Context;
use clap::Parser;
use holdem_odds::evaluation::HandRanks;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate the 7-card rank table", long_about = None)]
struct Args {
    /// Destination file; falls back to HANDRANKS_PATH, then HandRanks.dat
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    holdem_odds::log();
    let args = Args::parse();
    let path = args.output.unwrap_or_else(HandRanks::path);
    let ranks = HandRanks::generate();
    anyhow::ensure!(
        ranks.len() == holdem_odds::HAND_RANKS_LEN,
        "generated {} entries, expected {}",
        ranks.len(),
        holdem_odds::HAND_RANKS_LEN
    );
    ranks
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("{:<32}{:<32}", "saved       rank table", path.display());
    Ok(())
}
