use crate::cards::Card;
use thiserror::Error;

/// Everything a calculation can fail with.
///
/// Input variants are the caller's fault and are never retried.
/// `MissingCombination` means the startup tables do not cover a request.
/// `Invariant` means card bookkeeping is broken; the calculation aborts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OddsError {
    #[error("{0}")]
    Card(String),
    #[error("please provide 2 hole cards, got {0}")]
    HoleCards(usize),
    #[error("please provide 7 cards, got {0}")]
    HandSize(usize),
    #[error("please provide 0 or 3 or 4 or 5 community cards, got {0}")]
    Community(usize),
    #[error("found more than one {0}")]
    Duplicate(Card),
    #[error("opponents between 1 and {max} are allowed, got {0}", max = crate::MAX_OPPONENTS)]
    Opponents(usize),
    #[error("sample size between {min} and {max} is allowed, got {0}", min = crate::MIN_SAMPLES, max = crate::MAX_SAMPLES)]
    Samples(usize),
    #[error("unable to compute {n}c{k}")]
    MissingCombination { n: usize, k: usize },
    #[error("invalid hand for {0}")]
    Invariant(String),
}

impl OddsError {
    /// True for errors caused by the request itself.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Card(_)
                | Self::HoleCards(_)
                | Self::HandSize(_)
                | Self::Community(_)
                | Self::Duplicate(_)
                | Self::Opponents(_)
                | Self::Samples(_)
        )
    }
}

/// The rank table could not be brought up. Fatal at startup.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("rank table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("rank table {path} is {bytes} bytes, not a whole number of entries")]
    Misaligned { path: String, bytes: u64 },
    #[error("rank table {path} holds {found} entries, expected at least {expected}")]
    Truncated {
        path: String,
        found: usize,
        expected: usize,
    },
}
