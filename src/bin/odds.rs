//! Command-line front end for the odds calculator.
//!
//! ```text
//! odds --hero as ks --community 2d 3d 4d --opponents 2
//! odds --json hand as ks qs js ts 2c 3d
//! ```
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use holdem_odds::combinations::CombinationIndex;
use holdem_odds::evaluation::HandEvaluator;
use holdem_odds::evaluation::HandRanks;
use holdem_odds::odds::Calculator;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Win/lose/tie odds for a Hold'em hand", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
    /// Hero hole cards, e.g. `as ks`
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    hero: Vec<String>,
    /// Known community cards: none, 3, 4 or 5
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    community: Vec<String>,
    #[arg(long, default_value_t = 1)]
    opponents: usize,
    #[arg(long, default_value_t = holdem_odds::DEFAULT_SAMPLES)]
    samples: usize,
    /// Rank table file; falls back to HANDRANKS_PATH, then HandRanks.dat
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Print JSON instead of a summary line
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Evaluate exactly seven cards", alias = "eval")]
    Hand {
        #[arg(required = true, num_args = 7)]
        cards: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    holdem_odds::log();
    let args = Args::parse();
    let path = args.table.clone().unwrap_or_else(HandRanks::path);
    let ranks = HandRanks::load(&path).context("run `handranks` to generate the table")?;
    let evaluator = Arc::new(HandEvaluator::new(ranks));
    match args.command {
        Some(Command::Hand { ref cards }) => {
            let evaluation = evaluator.evaluate_strings(cards)?;
            match args.json {
                true => println!("{}", serde_json::to_string(&evaluation)?),
                false => println!("{}", evaluation),
            }
        }
        None => {
            let combinations = Arc::new(CombinationIndex::new());
            let calculator = Calculator::new(evaluator, combinations);
            let odds = calculator
                .calculate_with(&args.hero, &args.community, args.opponents, args.samples)
                .context("calculating odds")?;
            match args.json {
                true => println!("{}", serde_json::to_string_pretty(&odds)?),
                false => println!("{}", odds),
            }
        }
    }
    Ok(())
}
