use crate::Count;
use crate::evaluation::N_CATEGORIES;
use std::ops::AddAssign;

/// Weighted showdown outcomes accumulated by one worker.
///
/// Every sampled branch ends as exactly one of win, lose or tie, so
/// `win + lose + tie == total` holds after every board. Tallies from
/// different workers merge with `+=` in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: Count,
    pub win: Count,
    pub lose: Count,
    pub tie: Count,
    /// Ties indexed by how many opponents split with the hero.
    pub ties: [Count; crate::MAX_OPPONENTS + 1],
    /// Weighted boards indexed by the hero's hand category.
    pub hero: [Count; N_CATEGORIES],
}

impl Tally {
    pub fn is_consistent(&self) -> bool {
        self.win + self.lose + self.tie == self.total
            && self.ties.iter().sum::<Count>() == self.tie
            && self.hero.iter().sum::<Count>() == self.total
    }
}

impl AddAssign<&Tally> for Tally {
    fn add_assign(&mut self, other: &Tally) {
        self.total += other.total;
        self.win += other.win;
        self.lose += other.lose;
        self.tie += other.tie;
        for (a, b) in self.ties.iter_mut().zip(other.ties.iter()) {
            *a += b;
        }
        for (a, b) in self.hero.iter_mut().zip(other.hero.iter()) {
            *a += b;
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Tally) {
        *self += &other;
    }
}
