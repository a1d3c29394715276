/// How a sample depth is split between boards and opponent hands.
///
/// Each sampled board is played against `per_opponent` hands at every
/// opponent level, so one board costs `per_opponent ^ opponents` showdowns.
/// Boards are favored: every opponent gets the floor of
/// [`MIN_OPPONENT_SAMPLES`](crate::MIN_OPPONENT_SAMPLES) and the rest of the
/// depth widens the board sample, until every board is taken and the
/// remainder goes to the opponents. `communities * per_opponent ^ opponents`
/// never exceeds the depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    communities: usize,
    per_opponent: usize,
}

impl Budget {
    pub fn new(samples: usize, population: usize, opponents: usize) -> Self {
        let opponents = opponents.max(1) as u32;
        let floor = crate::MIN_OPPONENT_SAMPLES
            .checked_pow(opponents)
            .unwrap_or(usize::MAX);
        let communities = (samples / floor).clamp(1, population.max(1));
        let per_board = samples / communities;
        Self {
            communities,
            per_opponent: Self::root(per_board, opponents),
        }
    }

    /// Boards to draw.
    pub fn communities(&self) -> usize {
        self.communities
    }

    /// Hands drawn per opponent per surviving branch.
    pub fn per_opponent(&self) -> usize {
        self.per_opponent
    }

    /// Largest `s >= 1` with `s ^ n <= limit`.
    fn root(limit: usize, n: u32) -> usize {
        let fits = |s: usize| s.checked_pow(n).is_some_and(|p| p <= limit);
        let mut s = (limit as f64).powf(1. / n as f64) as usize;
        while s > 1 && !fits(s) {
            s -= 1;
        }
        while fits(s + 1) {
            s += 1;
        }
        s.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflop_heads_up_favors_boards() {
        let budget = Budget::new(100_000, 2_118_760, 1);
        assert_eq!(budget.communities(), 50_000);
        assert_eq!(budget.per_opponent(), 2);
    }

    #[test]
    fn river_goes_to_opponents() {
        let budget = Budget::new(100_000, 1, 1);
        assert_eq!(budget.communities(), 1);
        assert_eq!(budget.per_opponent(), 100_000);
        let budget = Budget::new(100_000, 1, 3);
        assert_eq!(budget.per_opponent(), 46);
    }

    #[test]
    fn turn_with_two_opponents() {
        let budget = Budget::new(100_000, 46, 2);
        assert_eq!(budget.communities(), 46);
        assert_eq!(budget.per_opponent(), 46);
    }

    #[test]
    fn flop_with_two_opponents() {
        let budget = Budget::new(100_000, 1081, 2);
        assert_eq!(budget.communities(), 1081);
        assert_eq!(budget.per_opponent(), 9);
    }

    #[test]
    fn nine_opponents_at_minimum_depth() {
        let budget = Budget::new(1_000, 2_118_760, 9);
        assert_eq!(budget.communities(), 1);
        assert_eq!(budget.per_opponent(), 2);
    }

    #[test]
    fn never_over_budget() {
        for samples in [1_000, 7_777, 100_000, 1_000_000] {
            for population in [1, 46, 1081, 2_118_760] {
                for opponents in 1..=9 {
                    let b = Budget::new(samples, population, opponents);
                    let cost = b.communities() * b.per_opponent().pow(opponents as u32);
                    assert!(cost <= samples, "{} {} {}", samples, population, opponents);
                    assert!(b.communities() >= 1 && b.communities() <= population);
                    assert!(b.per_opponent() >= 1);
                }
            }
        }
    }
}
