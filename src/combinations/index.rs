use super::combinations::Combinations;
use crate::OddsError;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::time::Instant;

/// Process-wide store of every [`Combinations`] block a calculation can ask for.
///
/// Built once at startup and shared read-only by every worker. Lookups never
/// generate: some blocks hold millions of rows and must not appear on a hot path.
#[derive(Debug, Clone, Default)]
pub struct CombinationIndex(HashMap<(usize, usize), Combinations>);

impl CombinationIndex {
    /// Index covering every situation the calculator accepts.
    pub fn new() -> Self {
        Self::from(Self::required())
    }

    /// (n, k) pairs needed for 0/3/4/5 known community cards and 1..=9 opponents.
    ///
    /// Board completions draw from the cards unknown to the hero; the first opponent
    /// always draws from what is left after the board is complete, and every later
    /// opponent from two fewer.
    pub fn required() -> Vec<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        for known in [0, 3, 4, 5] {
            let unknown = crate::DECK_SIZE - crate::HOLE_SIZE - known;
            let missing = crate::BOARD_SIZE - known;
            pairs.insert((unknown, missing));
            let first = unknown - missing;
            for opponent in 0..crate::MAX_OPPONENTS {
                pairs.insert((first - crate::HOLE_SIZE * opponent, crate::HOLE_SIZE));
            }
        }
        pairs.into_iter().collect()
    }

    pub fn get(&self, n: usize, k: usize) -> Result<&Combinations, OddsError> {
        self.0
            .get(&(n, k))
            .ok_or(OddsError::MissingCombination { n, k })
    }

    pub fn contains(&self, n: usize, k: usize) -> bool {
        self.0.contains_key(&(n, k))
    }
}

impl From<Vec<(usize, usize)>> for CombinationIndex {
    fn from(pairs: Vec<(usize, usize)>) -> Self {
        Self(
            pairs
                .into_par_iter()
                .map(|(n, k)| {
                    let start = Instant::now();
                    let combos = Combinations::generate(n, k);
                    log::debug!(
                        "generated {:>2}c{} {:>9} rows in {:?}",
                        n,
                        k,
                        combos.len(),
                        start.elapsed()
                    );
                    ((n, k), combos)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_pairs() {
        let pairs = CombinationIndex::required();
        assert!(pairs.contains(&(50, 5)));
        assert!(pairs.contains(&(47, 2)));
        assert!(pairs.contains(&(46, 1)));
        assert!(pairs.contains(&(45, 0)));
        for n in (29..=45).step_by(2) {
            assert!(pairs.contains(&(n, 2)), "{}c2", n);
        }
        assert_eq!(pairs.len(), 13);
    }

    #[test]
    fn lookup_never_generates() {
        let index = CombinationIndex::from(vec![(6, 2), (4, 0)]);
        assert_eq!(index.get(6, 2).map(|c| c.len()), Ok(15));
        assert_eq!(index.get(4, 0).map(|c| c.len()), Ok(1));
        assert_eq!(
            index.get(7, 2).map(|c| c.len()),
            Err(OddsError::MissingCombination { n: 7, k: 2 })
        );
        assert!(!index.contains(7, 2));
    }
}
