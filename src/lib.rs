//! Win/lose/tie odds for a Texas Hold'em hand against up to nine opponents.
//!
//! The pipeline, leaf first:
//!
//! - [`combinations`]: precomputed k-subsets of `0..n`, built once at startup
//! - [`sampler`]: distinct-index sampling without replacement, O(1) reset
//! - [`evaluation`]: perfect-hash 7-card evaluator over a flat state table
//! - [`arena`]: pooled columnar buffer of surviving enumeration branches
//! - [`showdown`]: per-board multi-opponent enumeration
//! - [`odds`]: validation, memoization and the worker pool
pub mod arena;
pub mod cards;
pub mod combinations;
pub mod error;
pub mod evaluation;
pub mod odds;
pub mod sampler;
pub mod showdown;

#[cfg(test)]
pub(crate) mod testing;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Weighted showdown counts. Products of per-level sample sizes live here.
pub type Count = u64;
/// Win/lose/tie shares, expressed in percent.
pub type Percent = f32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
/// Cards in a complete board.
pub const BOARD_SIZE: usize = 5;
/// Cards dealt to each player.
pub const HOLE_SIZE: usize = 2;
/// Entries in a complete perfect-hash rank table.
pub const HAND_RANKS_LEN: usize = 32_487_834;
/// Default location of the rank table when `HANDRANKS_PATH` is unset.
pub const HAND_RANKS_FILE: &str = "HandRanks.dat";

// ============================================================================
// SAMPLING PARAMETERS
// ============================================================================
/// Most opponents a single calculation may face.
pub const MAX_OPPONENTS: usize = 9;
/// Smallest accepted sample depth.
pub const MIN_SAMPLES: usize = 1_000;
/// Largest accepted sample depth.
pub const MAX_SAMPLES: usize = 1_000_000;
/// Sample depth used when the caller does not name one.
pub const DEFAULT_SAMPLES: usize = 100_000;
/// Opponent hands sampled per branch before the budget widens the board sample.
pub const MIN_OPPONENT_SAMPLES: usize = 2;
/// Pending board indices buffered between the producer and the workers.
pub const QUEUE_CAPACITY: usize = 1024;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
