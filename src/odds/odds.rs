use crate::Count;
use crate::Percent;
use crate::evaluation::HandCategory;
use crate::showdown::Tally;
use serde::Serialize;
use std::collections::BTreeMap;

/// Merged result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Odds {
    pub total: Count,
    pub win: Count,
    pub lose: Count,
    pub tie: Count,
    /// Percent of `total`, 0 to 100.
    pub win_p: Percent,
    pub lose_p: Percent,
    pub tie_p: Percent,
    /// Tied outcomes keyed by how many opponents split with the hero.
    pub ties: BTreeMap<usize, Count>,
    /// Weighted outcomes keyed by the hero's final hand category.
    pub hero: BTreeMap<HandCategory, Count>,
}

impl From<Tally> for Odds {
    fn from(tally: Tally) -> Self {
        let percent = |n: Count| match tally.total {
            0 => 0.,
            total => (100. * n as f64 / total as f64) as Percent,
        };
        Self {
            win_p: percent(tally.win),
            lose_p: percent(tally.lose),
            tie_p: percent(tally.tie),
            ties: tally
                .ties
                .iter()
                .enumerate()
                .filter(|(_, n)| **n > 0)
                .map(|(opponents, n)| (opponents, *n))
                .collect(),
            hero: HandCategory::all()
                .into_iter()
                .zip(tally.hero.iter().copied())
                .collect(),
            total: tally.total,
            win: tally.win,
            lose: tally.lose,
            tie: tally.tie,
        }
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:>6.2}% lose {:>6.2}% tie {:>6.2}% over {}",
            self.win_p, self.lose_p, self.tie_p, self.total
        )
    }
}
