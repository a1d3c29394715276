//! Per-board multi-opponent enumeration.
mod level;
mod showdown;
mod tally;

pub use level::*;
pub use showdown::*;
pub use tally::*;
