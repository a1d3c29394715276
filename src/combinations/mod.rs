//! Precomputed k-subsets of `0..n` with their complements.
mod combination;
mod combinations;
mod index;

pub use combination::*;
pub use combinations::*;
pub use index::*;
